//! Interrupt-to-main-loop click events.
//!
//! The tick handler (timer context) raises events, the main cycle takes
//! them. Each event kind is a single pending flag, so the "queue" has a
//! capacity of one per kind: a second raise before the first is taken
//! coalesces into the same pending event.
//!
//! ```text
//! ┌──────────────┐  raise   ┌─────────────────┐  take (swap)  ┌────────────┐
//! │ Tick handler │─────────▶│ press / release │──────────────▶│ Main cycle │
//! │ (producer)   │          │ (AtomicBool ×2) │               │ (consumer) │
//! └──────────────┘          └─────────────────┘               └────────────┘
//! ```
//!
//! Taking is a single atomic exchange. A raise landing between a separate
//! "test" and "clear" would otherwise be wiped out by the clear.

use core::sync::atomic::{AtomicBool, Ordering};

/// Debounced button transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    /// Stable high → low (button pushed down).
    Press,
    /// Stable low → high (button let go).
    Release,
}

/// Pending-flag pair shared between the tick handler and the main cycle.
///
/// Lives in a `static` on target; tests can own one on the stack and lend
/// it to both sides.
pub struct ClickEvents {
    press: AtomicBool,
    release: AtomicBool,
}

impl ClickEvents {
    pub const fn new() -> Self {
        Self {
            press: AtomicBool::new(false),
            release: AtomicBool::new(false),
        }
    }

    /// Mark an event pending. Safe to call from interrupt context.
    pub fn raise(&self, kind: ClickKind) {
        self.flag(kind).store(true, Ordering::Release);
    }

    /// Consume a pending event. Returns `true` exactly once per raise
    /// (or per coalesced burst of raises).
    pub fn take(&self, kind: ClickKind) -> bool {
        self.flag(kind).swap(false, Ordering::AcqRel)
    }

    pub fn take_press(&self) -> bool {
        self.take(ClickKind::Press)
    }

    pub fn take_release(&self) -> bool {
        self.take(ClickKind::Release)
    }

    /// Peek without consuming.
    pub fn is_pending(&self, kind: ClickKind) -> bool {
        self.flag(kind).load(Ordering::Acquire)
    }

    fn flag(&self, kind: ClickKind) -> &AtomicBool {
        match kind {
            ClickKind::Press => &self.press,
            ClickKind::Release => &self.release,
        }
    }
}

impl Default for ClickEvents {
    fn default() -> Self {
        Self::new()
    }
}
