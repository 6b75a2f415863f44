//! Duty-cycle output channel.
//!
//! One LEDC channel at 8-bit resolution; the compare value is the
//! porosity duty (0 – 255).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes the LEDC duty register via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

pub struct DutyChannel {
    channel: u32,
    current: u8,
}

impl DutyChannel {
    pub fn new() -> Self {
        Self {
            channel: hw_init::LEDC_CH_DUTY,
            current: 0,
        }
    }

    /// Write the compare value. Written every time, even if unchanged.
    pub fn set(&mut self, duty: u8) {
        hw_init::ledc_set(self.channel, duty);
        self.current = duty;
    }

    pub fn current(&self) -> u8 {
        self.current
    }
}

impl Default for DutyChannel {
    fn default() -> Self {
        Self::new()
    }
}
