//! Presentation state machine for the character display.
//!
//! ```text
//!  SPLASH ──[splash hold elapsed]──▶ WAIT_FOR_START ──[press]──▶ RUNNING
//! ```
//!
//! Transitions only go forward; a reset is the only way back to the
//! splash. Each state has a hold time that the main loop sleeps between
//! cycles: the splash duration, the start-prompt poll period, and the
//! running cycle period.
//!
//! | State        | Line 1            | Line 2              |
//! |--------------|-------------------|---------------------|
//! | Splash       | `   "PWM v1.1"`   | `--___--___--___-`  |
//! | WaitForStart | `Press button`    | `to continue...`    |
//! | Running      | `Porosity: ` + value | `Max value: <max>` |

use core::fmt::Write as _;

use heapless::String;
use log::{info, warn};

use crate::config::{DeviceConfig, MAX_COUNTER_LIMIT};
use crate::events::ClickEvents;

use super::ports::{DisplayPort, CMD_DISPLAY_ON};

pub const SPLASH_LINE_1: &str = "   \"PWM v1.1\"";
pub const SPLASH_LINE_2: &str = "--___--___--___-";
pub const PROMPT_LINE_1: &str = "Press button";
pub const PROMPT_LINE_2: &str = "to continue...";
pub const VALUE_LABEL: &str = "Porosity: ";

/// Characters reserved for the counter value after [`VALUE_LABEL`].
pub const VALUE_FIELD_WIDTH: usize = 3;

/// Characters per display line.
pub const LINE_WIDTH: usize = 16;

/// Value field, right-aligned: `"  5"`, `" 10"`, `"100"`.
pub type ValueField = String<VALUE_FIELD_WIDTH>;

/// One display line.
pub type Line = String<LINE_WIDTH>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Splash,
    WaitForStart,
    Running,
}

/// Owns the presentation state and everything drawn on the display.
pub struct DisplayRenderer {
    state: Presentation,
    counter_max: u16,
    splash_ms: u32,
    wait_poll_ms: u32,
    cycle_ms: u32,
}

impl DisplayRenderer {
    pub fn new(config: &DeviceConfig) -> Self {
        Self {
            state: Presentation::Splash,
            counter_max: config.counter_max,
            splash_ms: config.splash_ms,
            wait_poll_ms: config.wait_poll_ms,
            cycle_ms: config.cycle_ms,
        }
    }

    pub fn state(&self) -> Presentation {
        self.state
    }

    /// How long the main loop should sleep before the next cycle.
    pub fn hold_ms(&self) -> u32 {
        match self.state {
            Presentation::Splash => self.splash_ms,
            Presentation::WaitForStart => self.wait_poll_ms,
            Presentation::Running => self.cycle_ms,
        }
    }

    /// Draw the splash screen. Call once after the display is initialised.
    pub fn show_splash(&mut self, display: &mut impl DisplayPort) {
        display.send_command(CMD_DISPLAY_ON);
        display.write_text(SPLASH_LINE_1);
        display.set_cursor(1, 0);
        display.write_text(SPLASH_LINE_2);
    }

    /// Advance the presentation by one cycle.
    ///
    /// The splash gives way unconditionally (its hold has been slept by the
    /// time this runs). The start prompt consumes a pending press to move
    /// on; that press is spent on starting and never reaches the counter.
    /// Returns `(from, to)` when a transition happened.
    pub fn poll(
        &mut self,
        display: &mut impl DisplayPort,
        clicks: &ClickEvents,
    ) -> Option<(Presentation, Presentation)> {
        let next = match self.state {
            Presentation::Splash => Presentation::WaitForStart,
            Presentation::WaitForStart if clicks.take_press() => Presentation::Running,
            Presentation::WaitForStart | Presentation::Running => return None,
        };

        let from = self.state;
        info!("Presentation transition: {:?} -> {:?}", from, next);
        self.state = next;
        self.enter(display);
        Some((from, next))
    }

    /// Redraw the counter value in its fixed field on line 1.
    pub fn render_value(&mut self, display: &mut impl DisplayPort, value: u16) {
        display.set_cursor(0, VALUE_LABEL.len() as u8);
        display.write_text(&format_value(value));
    }

    fn enter(&mut self, display: &mut impl DisplayPort) {
        match self.state {
            Presentation::Splash => self.show_splash(display),
            Presentation::WaitForStart => {
                display.clear();
                display.home();
                display.write_text(PROMPT_LINE_1);
                display.set_cursor(1, 0);
                display.write_text(PROMPT_LINE_2);
            }
            Presentation::Running => {
                display.clear();
                display.home();
                display.write_text(VALUE_LABEL);
                display.set_cursor(1, 0);
                display.write_text(&max_line(self.counter_max));
            }
        }
    }
}

/// Right-align `value` in a [`VALUE_FIELD_WIDTH`]-character field.
///
/// Covers `0..=999`, which is exactly the range config validation allows
/// for the counter. Anything wider is shown as `***`.
pub fn format_value(value: u16) -> ValueField {
    let mut field = ValueField::new();
    if value > MAX_COUNTER_LIMIT || write!(field, "{:>3}", value).is_err() {
        warn!("display: value {} does not fit the field", value);
        field.clear();
        let _ = field.push_str("***");
    }
    field
}

/// Second line of the running screen, e.g. `Max value: 10`.
pub fn max_line(max: u16) -> Line {
    let mut line = Line::new();
    // "Max value: " + at most 3 digits fits in 16 characters.
    let _ = write!(line, "Max value: {}", max);
    line
}
