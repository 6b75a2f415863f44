//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port. The only sink on the device
//! is the serial log; tests record them.

use super::counter::Direction;
use super::display::Presentation;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has started and drawn the splash screen.
    Started { counter_max: u16 },

    /// The presentation moved forward.
    PresentationChanged { from: Presentation, to: Presentation },

    /// A press moved the counter by one step.
    CounterChanged { value: u16, direction: Direction, duty: u8 },

    /// A press was clamped at a bound.
    Saturated { value: u16, direction: Direction },

    /// The first in-range move after saturation.
    SaturationCleared { value: u16 },
}
