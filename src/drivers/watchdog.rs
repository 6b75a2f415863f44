//! Task Watchdog Timer (TWDT) driver.
//!
//! Resets the device if the main loop stops cycling. A reset is also the
//! only way the firmware ever restarts: every piece of state comes back
//! at its power-on value.
//!
//! The loop sleeps a different amount in each presentation state, so the
//! timeout is derived from the configured holds rather than fixed: twice
//! the longest sleep, never below [`MIN_TIMEOUT_MS`]. The main loop calls
//! `feed()` once per cycle.

use crate::config::DeviceConfig;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

/// Floor for the derived timeout; covers LCD redraws on top of the sleep.
pub const MIN_TIMEOUT_MS: u32 = 2_000;

/// Timeout that tolerates the longest sleep the main loop will take.
pub fn timeout_for(config: &DeviceConfig) -> u32 {
    let longest_hold = config.splash_ms.max(config.wait_poll_ms).max(config.cycle_ms);
    longest_hold.saturating_mul(2).max(MIN_TIMEOUT_MS)
}

pub struct Watchdog {
    timeout_ms: u32,
    subscribed: bool,
    feeds: u32,
}

impl Watchdog {
    /// Subscribe the calling task with a timeout fitted to `config`.
    pub fn new(config: &DeviceConfig) -> Self {
        let timeout_ms = timeout_for(config);
        let subscribed = subscribe(timeout_ms);
        Self {
            timeout_ms,
            subscribed,
            feeds: 0,
        }
    }

    pub fn feed(&mut self) {
        if self.subscribed {
            reset();
        }
        self.feeds = self.feeds.wrapping_add(1);
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Feeds since construction (wraps).
    pub fn feeds(&self) -> u32 {
        self.feeds
    }
}

#[cfg(target_os = "espidf")]
fn subscribe(timeout_ms: u32) -> bool {
    let cfg = esp_task_wdt_config_t {
        timeout_ms,
        idle_core_mask: 0,
        trigger_panic: true,
    };
    // SAFETY: called once from the main task at boot; `cfg` outlives the
    // call and a null handle means "the calling task".
    let (reconfigured, added) = unsafe {
        (
            esp_task_wdt_reconfigure(&cfg),
            esp_task_wdt_add(core::ptr::null_mut()),
        )
    };
    if reconfigured != ESP_OK as i32 {
        log::warn!("Watchdog: reconfigure returned {} (may already be configured)", reconfigured);
    }
    if added == ESP_OK as i32 {
        log::info!("Watchdog: main task subscribed, {} ms timeout", timeout_ms);
        true
    } else {
        log::warn!("Watchdog: subscribe failed ({}), running unguarded", added);
        false
    }
}

#[cfg(not(target_os = "espidf"))]
fn subscribe(timeout_ms: u32) -> bool {
    log::info!("Watchdog(sim): {} ms timeout", timeout_ms);
    true
}

#[cfg(target_os = "espidf")]
fn reset() {
    // SAFETY: only reached once the calling task is subscribed.
    unsafe {
        esp_task_wdt_reset();
    }
}

#[cfg(not(target_os = "espidf"))]
fn reset() {}
