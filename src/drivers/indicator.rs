//! Saturation indicator output group.
//!
//! Three discrete LEDs driven together: all on while the counter is held
//! at a bound, all off once it moves back inside.

use embedded_hal::digital::{Error as _, OutputPin, PinState};
use log::warn;

pub struct SaturationIndicator<P> {
    lines: [P; 3],
    lit: bool,
}

impl<P: OutputPin> SaturationIndicator<P> {
    /// Takes the lines and drives them off.
    pub fn new(lines: [P; 3]) -> Self {
        let mut indicator = Self { lines, lit: true };
        indicator.set(false);
        indicator
    }

    pub fn set(&mut self, on: bool) {
        for (i, line) in self.lines.iter_mut().enumerate() {
            if let Err(e) = line.set_state(PinState::from(on)) {
                warn!("indicator: line {} write failed ({:?})", i, e.kind());
            }
        }
        self.lit = on;
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}
