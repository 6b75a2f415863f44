//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the duty channel, the saturation indicator group and the direction
//! switch, exposing them through [`OutputPort`] and [`DirectionPort`].
//! On non-espidf targets the duty channel is an in-memory simulation and
//! the pins are whatever `embedded-hal` implementations the caller hands in.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::app::counter::Direction;
use crate::app::ports::{DirectionPort, OutputPort};
use crate::drivers::direction::DirectionSwitch;
use crate::drivers::indicator::SaturationIndicator;
use crate::drivers::pwm::DutyChannel;

/// Concrete adapter that combines the device I/O behind port traits.
pub struct HardwareAdapter<I, O> {
    duty: DutyChannel,
    indicator: SaturationIndicator<O>,
    direction: DirectionSwitch<I>,
}

impl<I: InputPin, O: OutputPin> HardwareAdapter<I, O> {
    pub fn new(
        duty: DutyChannel,
        indicator: SaturationIndicator<O>,
        direction: DirectionSwitch<I>,
    ) -> Self {
        Self {
            duty,
            indicator,
            direction,
        }
    }

    /// Last duty value written.
    pub fn current_duty(&self) -> u8 {
        self.duty.current()
    }

    pub fn indicator_lit(&self) -> bool {
        self.indicator.is_lit()
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl<I: InputPin, O: OutputPin> OutputPort for HardwareAdapter<I, O> {
    fn set_duty(&mut self, duty: u8) {
        self.duty.set(duty);
    }

    fn set_saturation_indicator(&mut self, on: bool) {
        self.indicator.set(on);
    }
}

// ── DirectionPort implementation ──────────────────────────────

impl<I: InputPin, O: OutputPin> DirectionPort for HardwareAdapter<I, O> {
    fn read_direction(&mut self) -> Direction {
        self.direction.read_direction()
    }
}
