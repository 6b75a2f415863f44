//! Timer-driven button sampler.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up. A periodic hardware timer
//! calls [`ButtonSampler::on_overflow`] on every overflow; the sampler
//! divides that rate down and reads the pin once every
//! `overflows_per_sample + 2` overflows.
//!
//! ## Context
//!
//! This is the only code that runs in tick (interrupt) context. It owns
//! the pin, the sample history and the debounced level, and reaches the
//! main cycle only through the shared [`ClickEvents`] flags. The counter
//! and the display are out of its reach.
//!
//! | Debounced edge | Event raised         |
//! |----------------|----------------------|
//! | Falling        | `ClickKind::Press`   |
//! | Rising         | `ClickKind::Release` |

use embedded_hal::digital::{Error as _, InputPin};
use log::warn;

use crate::config::DeviceConfig;
use crate::drivers::debounce::{Debouncer, Edge, Level};
use crate::error::ConfigError;
use crate::events::{ClickEvents, ClickKind};

pub struct ButtonSampler<'a, P> {
    pin: P,
    debouncer: Debouncer,
    clicks: &'a ClickEvents,
    // Wider than the configured divider so the count can always climb past it.
    overflows: u32,
    overflows_per_sample: u32,
}

impl<'a, P: InputPin> ButtonSampler<'a, P> {
    pub fn new(pin: P, config: &DeviceConfig, clicks: &'a ClickEvents) -> Result<Self, ConfigError> {
        Ok(Self {
            pin,
            debouncer: Debouncer::new(config.history_width)?,
            clicks,
            overflows: 0,
            overflows_per_sample: u32::from(config.overflows_per_sample),
        })
    }

    /// Timer overflow entry point. Returns `true` when this overflow took a sample.
    pub fn on_overflow(&mut self) -> bool {
        if self.overflows > self.overflows_per_sample {
            self.overflows = 0;
            self.on_tick();
            true
        } else {
            self.overflows += 1;
            false
        }
    }

    /// Take one sample and publish the edge it completes, if any.
    ///
    /// Never blocks. A failed pin read skips the sample.
    pub fn on_tick(&mut self) -> Option<Edge> {
        let high = match self.pin.is_high() {
            Ok(high) => high,
            Err(e) => {
                warn!("button: pin read failed ({:?}), sample skipped", e.kind());
                return None;
            }
        };

        let edge = self.debouncer.update(high)?;
        match edge {
            Edge::Falling => self.clicks.raise(ClickKind::Press),
            Edge::Rising => self.clicks.raise(ClickKind::Release),
        }
        Some(edge)
    }

    /// Current debounced level.
    pub fn level(&self) -> Level {
        self.debouncer.level()
    }
}
