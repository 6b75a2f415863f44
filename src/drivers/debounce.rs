//! Shift-register debouncer.
//!
//! Every sample is shifted into an N-bit history (oldest bit falls off the
//! top). The debounced level only changes when the whole history agrees:
//! all ones for high, all zeros for low. Anything in between is a bouncing
//! contact and leaves the level alone, so a glitch shorter than N samples
//! can never produce an edge.
//!
//! ```text
//!   history (N = 5)   level   edge
//!   1 1 1 1 1         High    —
//!   1 1 1 1 0         High    —        bounce window
//!   1 0 1 0 0         High    —
//!   0 0 0 0 0         Low     Falling  (press, with pull-up wiring)
//!   0 0 0 0 1         Low     —
//!   1 1 1 1 1         High    Rising   (release)
//! ```
//!
//! The debouncer knows nothing about pins or timers; [`ButtonSampler`]
//! feeds it.
//!
//! [`ButtonSampler`]: crate::drivers::button::ButtonSampler

use crate::config::MAX_HISTORY_WIDTH;
use crate::error::ConfigError;

/// Debounced logic level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    High,
    Low,
}

/// A debounced level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Low → high.
    Rising,
    /// High → low.
    Falling,
}

/// N-sample debouncer, `1 <= N <= 8`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    history: u8,
    mask: u8,
    level: Level,
}

impl Debouncer {
    /// Create a debouncer requiring `width` identical samples per level change.
    ///
    /// Starts with a full-ones history and a `High` level, i.e. an idle
    /// pulled-up input, so boot does not produce a spurious edge.
    pub fn new(width: u8) -> Result<Self, ConfigError> {
        if width == 0 || width > MAX_HISTORY_WIDTH {
            return Err(ConfigError::HistoryWidth(width));
        }
        let mask = ((1u16 << width) - 1) as u8;
        Ok(Self {
            history: mask,
            mask,
            level: Level::High,
        })
    }

    /// Shift in one raw sample and report the edge it completes, if any.
    pub fn update(&mut self, high: bool) -> Option<Edge> {
        self.history = ((self.history << 1) | u8::from(high)) & self.mask;

        if self.history == self.mask {
            if self.level != Level::High {
                self.level = Level::High;
                return Some(Edge::Rising);
            }
        } else if self.history == 0 && self.level == Level::High {
            self.level = Level::Low;
            return Some(Edge::Falling);
        }

        None
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Raw history bits (only the low `width` bits are significant).
    pub fn history(&self) -> u8 {
        self.history
    }

    pub fn width(&self) -> u8 {
        self.mask.count_ones() as u8
    }
}
