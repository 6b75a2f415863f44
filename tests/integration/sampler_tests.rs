//! Tick-path tests: timer overflows → button sampler → click flags →
//! main cycle.
//!
//! The overflow timer is replaced by calling `on_overflow()` in a loop,
//! with the default divider of one sample per 82 overflows.

use porosity::app::display::Presentation;
use porosity::app::service::AppService;
use porosity::config::DeviceConfig;
use porosity::drivers::button::ButtonSampler;
use porosity::drivers::debounce::Level;
use porosity::events::{ClickEvents, ClickKind};

use crate::mock_hw::{MockDisplay, MockInput, MockOutputs, RecordingSink};

/// Drive overflows until `samples` samples have been taken.
fn run_samples(sampler: &mut ButtonSampler<'_, MockInput>, samples: usize) {
    let mut taken = 0;
    while taken < samples {
        if sampler.on_overflow() {
            taken += 1;
        }
    }
}

/// One full press-and-release, long enough to pass the debouncer both ways.
fn click(pin: &MockInput, sampler: &mut ButtonSampler<'_, MockInput>) {
    pin.set_high(false);
    run_samples(sampler, 6);
    pin.set_high(true);
    run_samples(sampler, 6);
}

#[test]
fn divider_samples_every_82_overflows() {
    let clicks = ClickEvents::new();
    let pin = MockInput::new();
    let mut sampler = ButtonSampler::new(pin, &DeviceConfig::default(), &clicks).expect("valid config");

    let sampled: Vec<bool> = (0..82 * 3).map(|_| sampler.on_overflow()).collect();

    assert_eq!(sampled.iter().filter(|s| **s).count(), 3);
    assert!(sampled[81]);
    assert!(sampled[163]);
    assert!(sampled[245]);
}

#[test]
fn held_press_raises_one_press_after_history_fills() {
    let clicks = ClickEvents::new();
    let pin = MockInput::new();
    let mut sampler = ButtonSampler::new(pin.clone(), &DeviceConfig::default(), &clicks).expect("valid config");

    pin.set_high(false);
    run_samples(&mut sampler, 4);
    assert!(!clicks.is_pending(ClickKind::Press), "four low samples are not enough");

    run_samples(&mut sampler, 1);
    assert!(clicks.take_press());
    assert_eq!(sampler.level(), Level::Low);

    // Holding the button down does not repeat.
    run_samples(&mut sampler, 20);
    assert!(!clicks.take_press());
}

#[test]
fn bounce_shorter_than_history_is_ignored() {
    let clicks = ClickEvents::new();
    let pin = MockInput::new();
    let mut sampler = ButtonSampler::new(pin.clone(), &DeviceConfig::default(), &clicks).expect("valid config");

    for _ in 0..10 {
        pin.set_high(false);
        run_samples(&mut sampler, 2);
        pin.set_high(true);
        run_samples(&mut sampler, 1);
    }

    assert!(!clicks.is_pending(ClickKind::Press));
    assert!(!clicks.is_pending(ClickKind::Release));
    assert_eq!(sampler.level(), Level::High);
}

#[test]
fn release_follows_press() {
    let clicks = ClickEvents::new();
    let pin = MockInput::new();
    let mut sampler = ButtonSampler::new(pin.clone(), &DeviceConfig::default(), &clicks).expect("valid config");

    pin.set_high(false);
    run_samples(&mut sampler, 5);
    pin.set_high(true);
    run_samples(&mut sampler, 5);

    assert!(clicks.take_press());
    assert!(clicks.take_release());
    assert_eq!(sampler.level(), Level::High);
}

#[test]
fn physical_presses_drive_counter_end_to_end() {
    let clicks = ClickEvents::new();
    let pin = MockInput::new();
    let config = DeviceConfig::default();
    let mut sampler = ButtonSampler::new(pin.clone(), &config, &clicks).expect("valid config");
    let mut app = AppService::new(&config, &clicks).expect("valid config");
    let mut hw = MockOutputs::new();
    let mut lcd = MockDisplay::new();
    let mut sink = RecordingSink::new();

    app.start(&mut hw, &mut lcd, &mut sink);
    app.cycle(&mut hw, &mut lcd, &mut sink);

    click(&pin, &mut sampler);
    app.cycle(&mut hw, &mut lcd, &mut sink);
    assert_eq!(app.presentation(), Presentation::Running);
    assert_eq!(app.counter(), 0);

    for expected in 1..=3 {
        click(&pin, &mut sampler);
        app.cycle(&mut hw, &mut lcd, &mut sink);
        assert_eq!(app.counter(), expected);
    }
    assert_eq!(lcd.line(0), "Porosity:   3");
    assert_eq!(hw.last_duty(), Some(77));
}
