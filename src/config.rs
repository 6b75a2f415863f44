//! Device configuration parameters
//!
//! All tunable parameters for the porosity controller. There is no
//! persistent storage: every boot starts from [`DeviceConfig::default()`].
//! Fields are `#[serde(default)]` so a partial override (e.g. baked in at
//! build time for a bench rig) only needs to name what changes.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Widest sample history the debouncer can hold (one `u8` shift register).
pub const MAX_HISTORY_WIDTH: u8 = 8;

/// Largest counter value the 3-character display field can show.
pub const MAX_COUNTER_LIMIT: u16 = 999;

/// Core device configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    // --- Debounce ---
    /// Consecutive identical samples required for a level change (1-8)
    pub history_width: u8,
    /// Timer overflows to let pass between two button samples
    pub overflows_per_sample: u16,
    /// Period of one timer overflow (microseconds)
    pub overflow_period_us: u32,

    // --- Counter ---
    /// Upper bound of the porosity counter (lower bound is 0)
    pub counter_max: u16,

    // --- Timing ---
    /// Main cycle period while running (milliseconds)
    pub cycle_ms: u32,
    /// How long the splash screen stays up (milliseconds)
    pub splash_ms: u32,
    /// Poll period while waiting for the start press (milliseconds)
    pub wait_poll_ms: u32,

    // --- Output ---
    /// Base frequency of the duty-cycle PWM output (Hz)
    pub duty_pwm_freq_hz: u32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            // Debounce: 5 samples, one every 82 overflows of a 256 µs timer (~21 ms)
            history_width: 5,
            overflows_per_sample: 80,
            overflow_period_us: 256,

            // Counter
            counter_max: 10,

            // Timing
            cycle_ms: 50,
            splash_ms: 1500,
            wait_poll_ms: 100,

            // Output
            duty_pwm_freq_hz: 1_000,
        }
    }
}

impl DeviceConfig {
    /// Reject values the firmware cannot honour.
    ///
    /// `counter_max` is capped at [`MAX_COUNTER_LIMIT`] so that the counter
    /// range never outgrows the display's value field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_width == 0 || self.history_width > MAX_HISTORY_WIDTH {
            return Err(ConfigError::HistoryWidth(self.history_width));
        }
        if self.counter_max == 0 || self.counter_max > MAX_COUNTER_LIMIT {
            return Err(ConfigError::CounterMax(self.counter_max));
        }
        if self.overflow_period_us == 0 {
            return Err(ConfigError::ZeroPeriod("overflow_period_us"));
        }
        if self.cycle_ms == 0 {
            return Err(ConfigError::ZeroPeriod("cycle_ms"));
        }
        if self.wait_poll_ms == 0 {
            return Err(ConfigError::ZeroPeriod("wait_poll_ms"));
        }
        if self.duty_pwm_freq_hz == 0 {
            return Err(ConfigError::ZeroPeriod("duty_pwm_freq_hz"));
        }
        Ok(())
    }

    /// Time between two button samples, in microseconds.
    pub fn sample_period_us(&self) -> u64 {
        u64::from(self.overflow_period_us) * (u64::from(self.overflows_per_sample) + 2)
    }

    /// Minimum time a level must be held before it is accepted, in microseconds.
    pub fn debounce_window_us(&self) -> u64 {
        self.sample_period_us() * u64::from(self.history_width)
    }
}
