//! Integration tests for the AppService → counter → display/outputs pipeline.
//!
//! Clicks are raised directly on a [`ClickEvents`] owned by the test, the
//! way the tick handler would raise them on target.

use porosity::app::counter::Direction;
use porosity::app::display::Presentation;
use porosity::app::events::AppEvent;
use porosity::app::service::AppService;
use porosity::config::DeviceConfig;
use porosity::error::{ConfigError, Error};
use porosity::events::{ClickEvents, ClickKind};

use crate::mock_hw::{MockDisplay, MockOutputs, OutputCall, RecordingSink};

struct Rig<'a> {
    app: AppService<'a>,
    hw: MockOutputs,
    lcd: MockDisplay,
    sink: RecordingSink,
}

impl<'a> Rig<'a> {
    fn start(clicks: &'a ClickEvents) -> Self {
        let mut rig = Self {
            app: AppService::new(&DeviceConfig::default(), clicks).expect("default config is valid"),
            hw: MockOutputs::new(),
            lcd: MockDisplay::new(),
            sink: RecordingSink::new(),
        };
        let hold = rig.app.start(&mut rig.hw, &mut rig.lcd, &mut rig.sink);
        assert_eq!(hold, 1500, "splash hold");
        rig
    }

    fn cycle(&mut self) -> u32 {
        self.app.cycle(&mut self.hw, &mut self.lcd, &mut self.sink)
    }

    /// Splash → wait → running, consuming one start press.
    fn start_running(clicks: &'a ClickEvents) -> Self {
        let mut rig = Self::start(clicks);
        rig.cycle();
        clicks.raise(ClickKind::Press);
        rig.cycle();
        assert_eq!(rig.app.presentation(), Presentation::Running);
        rig
    }

    fn press(&mut self, clicks: &ClickEvents, direction: Direction) {
        self.hw.direction = direction;
        clicks.raise(ClickKind::Press);
        self.cycle();
    }
}

// ── Presentation flow ────────────────────────────────────────

#[test]
fn start_draws_splash_and_resets_outputs() {
    let clicks = ClickEvents::new();
    let rig = Rig::start(&clicks);

    assert_eq!(rig.lcd.line(0), "   \"PWM v1.1\"");
    assert_eq!(rig.lcd.line(1), "--___--___--___-");
    assert_eq!(rig.hw.calls, vec![OutputCall::Duty(0), OutputCall::Indicator(false)]);
    assert_eq!(rig.sink.events, vec![AppEvent::Started { counter_max: 10 }]);
    assert_eq!(rig.app.presentation(), Presentation::Splash);
}

#[test]
fn splash_gives_way_to_prompt_without_a_press() {
    let clicks = ClickEvents::new();
    let mut rig = Rig::start(&clicks);

    let hold = rig.cycle();

    assert_eq!(rig.app.presentation(), Presentation::WaitForStart);
    assert_eq!(hold, 100);
    assert_eq!(rig.lcd.line(0), "Press button");
    assert_eq!(rig.lcd.line(1), "to continue...");
    assert!(rig.sink.events.contains(&AppEvent::PresentationChanged {
        from: Presentation::Splash,
        to: Presentation::WaitForStart,
    }));
}

#[test]
fn prompt_waits_until_pressed() {
    let clicks = ClickEvents::new();
    let mut rig = Rig::start(&clicks);
    rig.cycle();

    for _ in 0..20 {
        rig.cycle();
        assert_eq!(rig.app.presentation(), Presentation::WaitForStart);
    }

    clicks.raise(ClickKind::Press);
    let hold = rig.cycle();

    assert_eq!(rig.app.presentation(), Presentation::Running);
    assert_eq!(hold, 50);
    assert_eq!(rig.lcd.line(0), "Porosity:   0");
    assert_eq!(rig.lcd.line(1), "Max value: 10");
}

#[test]
fn start_press_is_not_counted() {
    let clicks = ClickEvents::new();
    let rig = Rig::start_running(&clicks);

    assert_eq!(rig.app.counter(), 0);
    assert_eq!(rig.hw.direction_reads, 0, "direction must not be read for the start press");
    assert!(!clicks.is_pending(ClickKind::Press));
}

#[test]
fn press_during_splash_starts_on_the_following_cycle() {
    let clicks = ClickEvents::new();
    let mut rig = Rig::start(&clicks);
    clicks.raise(ClickKind::Press);

    rig.cycle();
    assert_eq!(rig.app.presentation(), Presentation::WaitForStart);

    rig.cycle();
    assert_eq!(rig.app.presentation(), Presentation::Running);
    assert_eq!(rig.app.counter(), 0);
}

#[test]
fn releases_are_drained_and_ignored() {
    let clicks = ClickEvents::new();
    let mut rig = Rig::start_running(&clicks);

    clicks.raise(ClickKind::Release);
    rig.cycle();

    assert!(!clicks.is_pending(ClickKind::Release));
    assert_eq!(rig.app.counter(), 0);
}

// ── Counting ─────────────────────────────────────────────────

#[test]
fn forward_press_increments_and_updates_duty_and_display() {
    let clicks = ClickEvents::new();
    let mut rig = Rig::start_running(&clicks);

    rig.press(&clicks, Direction::Forward);

    assert_eq!(rig.app.counter(), 1);
    assert_eq!(rig.hw.last_duty(), Some(26));
    assert_eq!(rig.lcd.line(0), "Porosity:   1");
    assert_eq!(rig.hw.direction_reads, 1);
    assert_eq!(
        rig.sink.events.last(),
        Some(&AppEvent::CounterChanged {
            value: 1,
            direction: Direction::Forward,
            duty: 26,
        })
    );
}

#[test]
fn idle_cycles_leave_counter_alone_but_refresh_duty() {
    let clicks = ClickEvents::new();
    let mut rig = Rig::start_running(&clicks);
    rig.press(&clicks, Direction::Forward);
    rig.press(&clicks, Direction::Forward);
    let writes_before = rig.hw.calls.len();

    for _ in 0..5 {
        rig.cycle();
    }

    assert_eq!(rig.app.counter(), 2);
    assert_eq!(rig.app.cycles(), 9);
    assert_eq!(rig.hw.calls.len(), writes_before + 5);
    assert_eq!(rig.hw.last_duty(), Some(51));
}

#[test]
fn coalesced_presses_count_once() {
    let clicks = ClickEvents::new();
    let mut rig = Rig::start_running(&clicks);

    clicks.raise(ClickKind::Press);
    clicks.raise(ClickKind::Press);
    rig.cycle();

    assert_eq!(rig.app.counter(), 1);
}

#[test]
fn full_scale_reaches_255() {
    let clicks = ClickEvents::new();
    let mut rig = Rig::start_running(&clicks);

    for _ in 0..10 {
        rig.press(&clicks, Direction::Forward);
    }

    assert_eq!(rig.app.counter(), 10);
    assert_eq!(rig.hw.last_duty(), Some(255));
    assert_eq!(rig.lcd.line(0), "Porosity:  10");
    assert!(!rig.app.is_saturated());
}

// ── Saturation ───────────────────────────────────────────────

#[test]
fn press_past_max_clamps_and_lights_indicator() {
    let clicks = ClickEvents::new();
    let mut rig = Rig::start_running(&clicks);
    for _ in 0..10 {
        rig.press(&clicks, Direction::Forward);
    }

    rig.press(&clicks, Direction::Forward);

    assert_eq!(rig.app.counter(), 10);
    assert!(rig.app.is_saturated());
    assert!(rig.hw.indicator_lit());
    assert_eq!(rig.hw.last_duty(), Some(255));
    assert_eq!(
        rig.sink.events.last(),
        Some(&AppEvent::Saturated {
            value: 10,
            direction: Direction::Forward,
        })
    );
}

#[test]
fn reverse_press_after_clamp_recovers() {
    let clicks = ClickEvents::new();
    let mut rig = Rig::start_running(&clicks);
    for _ in 0..11 {
        rig.press(&clicks, Direction::Forward);
    }
    assert!(rig.app.is_saturated());

    rig.press(&clicks, Direction::Reverse);

    assert_eq!(rig.app.counter(), 9);
    assert!(!rig.app.is_saturated());
    assert!(!rig.hw.indicator_lit());
    assert_eq!(rig.lcd.line(0), "Porosity:   9");
    assert!(rig.sink.events.contains(&AppEvent::SaturationCleared { value: 9 }));
}

#[test]
fn reverse_at_zero_clamps() {
    let clicks = ClickEvents::new();
    let mut rig = Rig::start_running(&clicks);

    rig.press(&clicks, Direction::Reverse);

    assert_eq!(rig.app.counter(), 0);
    assert!(rig.app.is_saturated());
    assert!(rig.hw.indicator_lit());
    assert_eq!(rig.hw.last_duty(), Some(0));
}

#[test]
fn repeated_clamping_keeps_saturation() {
    let clicks = ClickEvents::new();
    let mut rig = Rig::start_running(&clicks);

    for _ in 0..4 {
        rig.press(&clicks, Direction::Reverse);
    }

    assert_eq!(rig.app.counter(), 0);
    assert!(rig.app.is_saturated());

    rig.press(&clicks, Direction::Forward);
    assert_eq!(rig.app.counter(), 1);
    assert!(!rig.app.is_saturated());
}

// ── Configuration ────────────────────────────────────────────

#[test]
fn invalid_config_is_rejected() {
    let clicks = ClickEvents::new();
    let config = DeviceConfig {
        counter_max: 0,
        ..DeviceConfig::default()
    };

    let result = AppService::new(&config, &clicks);

    assert!(matches!(result, Err(Error::Config(ConfigError::CounterMax(0)))));
}

#[test]
fn custom_max_shows_on_running_screen() {
    let clicks = ClickEvents::new();
    let config = DeviceConfig {
        counter_max: 250,
        ..DeviceConfig::default()
    };
    let mut app = AppService::new(&config, &clicks).expect("valid config");
    let mut hw = MockOutputs::new();
    let mut lcd = MockDisplay::new();
    let mut sink = RecordingSink::new();

    app.start(&mut hw, &mut lcd, &mut sink);
    app.cycle(&mut hw, &mut lcd, &mut sink);
    clicks.raise(ClickKind::Press);
    app.cycle(&mut hw, &mut lcd, &mut sink);
    clicks.raise(ClickKind::Press);
    app.cycle(&mut hw, &mut lcd, &mut sink);

    assert_eq!(lcd.line(1), "Max value: 250");
    assert_eq!(lcd.line(0), "Porosity:   1");
    assert_eq!(hw.last_duty(), Some(1));
}
