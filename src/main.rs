//! Porosity Controller Firmware — Main Entry Point
//!
//! One push-button steps a bounded porosity value, a switch picks the
//! direction, the value drives an 8-bit PWM duty and is shown on an
//! HD44780 display.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Timer task (preempts main)          Main task               │
//! │                                                              │
//! │  esp_timer overflow                  loop {                  │
//! │      │                                 sleep(hold_ms)        │
//! │      ▼                                 AppService::cycle()   │
//! │  ButtonSampler ──▶ ClickEvents ──────▶   Counter · Duty      │
//! │  (history, level)  (press/release)       Display renderer    │
//! │                                        watchdog.feed()       │
//! │                                      }                       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::{Ets, FreeRtos};
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, Input, Output, PinDriver, Pull};
use esp_idf_svc::sys::EspError;
use log::{error, info};

use porosity::adapters::hardware::HardwareAdapter;
use porosity::adapters::log_sink::LogEventSink;
use porosity::app::service::AppService;
use porosity::config::DeviceConfig;
use porosity::drivers::button::ButtonSampler;
use porosity::drivers::direction::DirectionSwitch;
use porosity::drivers::hw_timer::{self, TickSlot};
use porosity::drivers::hw_init;
use porosity::drivers::indicator::SaturationIndicator;
use porosity::drivers::lcd::Hd44780;
use porosity::drivers::pwm::DutyChannel;
use porosity::drivers::watchdog::Watchdog;
use porosity::error;
use porosity::events::ClickEvents;
use porosity::pins;

type InputLine = PinDriver<'static, AnyIOPin, Input>;
type OutputLine = PinDriver<'static, AnyOutputPin, Output>;

// ── Tick-context state ────────────────────────────────────────
//
// CLICKS is the only state shared between the timer task and the main
// task. SAMPLER belongs to the timer task once installed.

static CLICKS: ClickEvents = ClickEvents::new();
static SAMPLER: TickSlot<ButtonSampler<'static, InputLine>> = TickSlot::new();

fn on_overflow() {
    SAMPLER.with(|sampler| {
        sampler.on_overflow();
    });
}

// ── Pin helpers ───────────────────────────────────────────────

fn pulled_up_input(gpio: i32) -> Result<InputLine, EspError> {
    // SAFETY: every GPIO number in `pins` is claimed exactly once, here in
    // main(), so no two drivers alias the same pin.
    let mut pin = PinDriver::input(unsafe { AnyIOPin::new(gpio) })?;
    pin.set_pull(Pull::Up)?;
    Ok(pin)
}

fn output(gpio: i32) -> Result<OutputLine, EspError> {
    // SAFETY: as for pulled_up_input().
    PinDriver::output(unsafe { AnyOutputPin::new(gpio) })
}

fn start_peripherals(config: &DeviceConfig) -> error::Result<()> {
    hw_init::init_ledc(config.duty_pwm_freq_hz)?;
    hw_timer::start_overflow_timer(u64::from(config.overflow_period_us), on_overflow)?;
    Ok(())
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Porosity controller v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Config (no storage: defaults every boot) ───────────
    let config = DeviceConfig::default();
    config.validate()?;
    info!(
        "Config: range 0..={}, debounce {} samples / {} µs, cycle {} ms",
        config.counter_max,
        config.history_width,
        config.debounce_window_us(),
        config.cycle_ms
    );

    // ── 3. Tick handler ───────────────────────────────────────
    let sampler = ButtonSampler::new(pulled_up_input(pins::BUTTON_GPIO)?, &config, &CLICKS)?;
    SAMPLER.install(sampler);

    if let Err(e) = start_peripherals(&config) {
        // Sleep rather than spin so the idle task keeps feeding its own
        // watchdog; the device stays parked here until a power cycle.
        error!("Peripheral start failed: {}. Halting.", e);
        loop {
            FreeRtos::delay_ms(1_000);
        }
    }

    // ── 4. Outputs + direction ────────────────────────────────
    let indicator = SaturationIndicator::new([
        output(pins::SATURATION_LED_GPIOS[0])?,
        output(pins::SATURATION_LED_GPIOS[1])?,
        output(pins::SATURATION_LED_GPIOS[2])?,
    ]);
    let direction = DirectionSwitch::new(pulled_up_input(pins::DIRECTION_GPIO)?);
    let mut hw = HardwareAdapter::new(DutyChannel::new(), indicator, direction);

    // ── 5. Display ────────────────────────────────────────────
    let d = pins::LCD_DATA_GPIOS;
    let mut lcd = Hd44780::new(
        output(pins::LCD_RS_GPIO)?,
        output(pins::LCD_RW_GPIO)?,
        output(pins::LCD_EN_GPIO)?,
        [
            output(d[0])?,
            output(d[1])?,
            output(d[2])?,
            output(d[3])?,
            output(d[4])?,
            output(d[5])?,
            output(d[6])?,
            output(d[7])?,
        ],
        Ets,
    );
    lcd.init();

    // ── 6. App service ────────────────────────────────────────
    let mut sink = LogEventSink::new();
    let mut app = AppService::new(&config, &CLICKS)?;
    let mut watchdog = Watchdog::new(&config);

    info!("System ready. Entering main loop.");

    // ── 7. Main loop ──────────────────────────────────────────
    let mut hold_ms = app.start(&mut hw, &mut lcd, &mut sink);
    loop {
        FreeRtos::delay_ms(hold_ms);
        hold_ms = app.cycle(&mut hw, &mut lcd, &mut sink);
        watchdog.feed();
    }
}
