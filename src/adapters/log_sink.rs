//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (UART / USB-CDC in production). The device has no
//! other reporting channel; the display text is the user-facing one.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { counter_max } => {
                info!("START | range=0..={}", counter_max);
            }
            AppEvent::PresentationChanged { from, to } => {
                info!("SCREEN | {:?} -> {:?}", from, to);
            }
            AppEvent::CounterChanged { value, direction, duty } => {
                info!("COUNT | value={} dir={:?} duty={}/255", value, direction, duty);
            }
            AppEvent::Saturated { value, direction } => {
                info!("SATURATED | held at {} (dir={:?})", value, direction);
            }
            AppEvent::SaturationCleared { value } => {
                info!("SATURATED | cleared at {}", value);
            }
        }
    }
}
