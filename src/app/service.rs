//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the counter engine and the display renderer, and
//! holds the consumer side of the click flags. It exposes a
//! hardware-agnostic API; all I/O flows through port traits injected at
//! call sites, making the whole service testable with mock adapters.
//!
//! ```text
//!  ClickEvents ──▶ ┌──────────────────────────┐ ──▶ EventSink
//! DirectionPort ──▶│        AppService        │ ──▶ DisplayPort
//!                  │ Counter · Duty · Display │ ──▶ OutputPort
//!                  └──────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::DeviceConfig;
use crate::error::Result;
use crate::events::ClickEvents;

use super::counter::{CounterEngine, MoveOutcome};
use super::display::{DisplayRenderer, Presentation};
use super::duty::duty;
use super::events::AppEvent;
use super::ports::{DirectionPort, DisplayPort, EventSink, OutputPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// Device state owned by the main cycle.
pub struct AppService<'a> {
    counter: CounterEngine,
    renderer: DisplayRenderer,
    clicks: &'a ClickEvents,
    cycles: u64,
}

impl<'a> AppService<'a> {
    /// Construct the service from a validated configuration.
    ///
    /// Does **not** touch any port — call [`start`](Self::start) next.
    pub fn new(config: &DeviceConfig, clicks: &'a ClickEvents) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            counter: CounterEngine::new(config.counter_max),
            renderer: DisplayRenderer::new(config),
            clicks,
            cycles: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive the outputs to their reset values and draw the splash.
    ///
    /// Returns the time to sleep before the first [`cycle`](Self::cycle).
    pub fn start(
        &mut self,
        out: &mut impl OutputPort,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) -> u32 {
        out.set_duty(self.duty());
        out.set_saturation_indicator(false);
        self.renderer.show_splash(display);
        sink.emit(&AppEvent::Started {
            counter_max: self.counter.max(),
        });
        info!("AppService started, counter max {}", self.counter.max());
        self.renderer.hold_ms()
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one main cycle: presentation → press → counter → display → duty.
    ///
    /// The `hw` parameter satisfies **both** [`DirectionPort`] and
    /// [`OutputPort`], keeping the port boundary explicit without a double
    /// mutable borrow. Returns the time to sleep before the next cycle.
    pub fn cycle(
        &mut self,
        hw: &mut (impl DirectionPort + OutputPort),
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) -> u32 {
        self.cycles += 1;

        // Releases carry no behaviour; drain so the flag never goes stale.
        if self.clicks.take_release() {
            debug!("cycle {}: release", self.cycles);
        }

        // 1. Presentation (may consume the start press)
        if let Some((from, to)) = self.renderer.poll(display, self.clicks) {
            sink.emit(&AppEvent::PresentationChanged { from, to });
        }

        if self.renderer.state() == Presentation::Running {
            // 2. Press → counter, direction sampled at the moment of consumption
            if self.clicks.take_press() {
                self.apply_press(hw, sink);
            }

            // 3. Value field
            self.renderer.render_value(display, self.counter.value());
        }

        // 4. Duty, unconditionally
        hw.set_duty(self.duty());

        self.renderer.hold_ms()
    }

    fn apply_press(&mut self, hw: &mut (impl DirectionPort + OutputPort), sink: &mut impl EventSink) {
        let direction = hw.read_direction();
        let outcome = self.counter.on_press_consumed(direction);
        let value = self.counter.value();

        match outcome {
            MoveOutcome::Clamped => {
                hw.set_saturation_indicator(true);
                sink.emit(&AppEvent::Saturated { value, direction });
            }
            MoveOutcome::Recovered => {
                hw.set_saturation_indicator(false);
                sink.emit(&AppEvent::SaturationCleared { value });
                sink.emit(&AppEvent::CounterChanged {
                    value,
                    direction,
                    duty: self.duty(),
                });
            }
            MoveOutcome::Applied => {
                sink.emit(&AppEvent::CounterChanged {
                    value,
                    direction,
                    duty: self.duty(),
                });
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn counter(&self) -> u16 {
        self.counter.value()
    }

    pub fn is_saturated(&self) -> bool {
        self.counter.is_saturated()
    }

    pub fn presentation(&self) -> Presentation {
        self.renderer.state()
    }

    /// Current duty value derived from the counter.
    pub fn duty(&self) -> u8 {
        duty(self.counter.value(), self.counter.max())
    }

    /// Number of completed cycles since start.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}
