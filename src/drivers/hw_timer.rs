//! Overflow tick timer using ESP-IDF's esp_timer API.
//!
//! A periodic timer stands in for the hardware timer overflow interrupt:
//! every period it calls a plain `fn()` handler, which the binary wires to
//! [`ButtonSampler::on_overflow`]. The handler runs in the ESP timer task,
//! which preempts the main task at any point.
//!
//! The handler's state cannot be captured by an `extern "C"` callback, so
//! it is parked in a [`TickSlot`] static: installed once from the main
//! task before the timer starts, then touched only by the handler.
//!
//! [`ButtonSampler::on_overflow`]: crate::drivers::button::ButtonSampler::on_overflow

use core::cell::RefCell;

use critical_section::Mutex;

use crate::drivers::hw_init::HwInitError;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

// ── Handler slot ──────────────────────────────────────────────

/// Interrupt-safe home for state owned by the tick handler.
pub struct TickSlot<T> {
    inner: Mutex<RefCell<Option<T>>>,
}

impl<T> TickSlot<T> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Put `value` in the slot, returning whatever was there.
    pub fn install(&self, value: T) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).replace(Some(value)))
    }

    /// Run `f` on the installed value. `None` if the slot is empty.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().as_mut().map(f))
    }

    /// Empty the slot.
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).take())
    }
}

impl<T> Default for TickSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ── esp_timer ─────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut OVERFLOW_TIMER: esp_timer_handle_t = core::ptr::null_mut();

#[cfg(target_os = "espidf")]
unsafe extern "C" fn overflow_cb(arg: *mut core::ffi::c_void) {
    // SAFETY: `arg` is the `fn()` passed to start_overflow_timer(), cast to
    // a data pointer of the same size; it is never null.
    let handler: fn() = unsafe { core::mem::transmute::<*mut core::ffi::c_void, fn()>(arg) };
    handler();
}

/// Start the periodic overflow timer calling `on_overflow` every `period_us`.
#[cfg(target_os = "espidf")]
pub fn start_overflow_timer(period_us: u64, on_overflow: fn()) -> Result<(), HwInitError> {
    // SAFETY: OVERFLOW_TIMER is written here once at boot from the single
    // main-task context before any callback fires.
    unsafe {
        let args = esp_timer_create_args_t {
            callback: Some(overflow_cb),
            arg: on_overflow as *mut core::ffi::c_void,
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: b"overflow\0".as_ptr() as *const _,
            skip_unhandled_events: true,
        };
        let ret = esp_timer_create(&args, &raw mut OVERFLOW_TIMER);
        if ret != ESP_OK as i32 {
            return Err(HwInitError::TimerCreateFailed(ret));
        }
        let ret = esp_timer_start_periodic(OVERFLOW_TIMER, period_us);
        if ret != ESP_OK as i32 {
            return Err(HwInitError::TimerStartFailed(ret));
        }
    }

    log::info!("hw_timer: overflow tick started ({} µs)", period_us);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn start_overflow_timer(period_us: u64, _on_overflow: fn()) -> Result<(), HwInitError> {
    log::info!("hw_timer(sim): overflow tick not started ({} µs requested)", period_us);
    Ok(())
}
