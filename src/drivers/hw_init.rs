//! One-shot hardware peripheral initialization.
//!
//! Configures the LEDC timer/channel for the duty-cycle output using raw
//! ESP-IDF sys calls. Called once from `main()` before the main loop
//! starts. GPIO inputs and the LCD lines are claimed through
//! `esp-idf-hal` `PinDriver`s in `main()` instead.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    LedcTimerFailed(i32),
    LedcChannelFailed(i32),
    TimerCreateFailed(i32),
    TimerStartFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LedcTimerFailed(rc)   => write!(f, "LEDC timer config failed (rc={})", rc),
            Self::LedcChannelFailed(rc) => write!(f, "LEDC channel config failed (rc={})", rc),
            Self::TimerCreateFailed(rc) => write!(f, "overflow timer create failed (rc={})", rc),
            Self::TimerStartFailed(rc)  => write!(f, "overflow timer start failed (rc={})", rc),
        }
    }
}

impl std::error::Error for HwInitError {}

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

// ── LEDC PWM ─────────────────────────────────────────────────

/// LEDC channel carrying the porosity duty cycle.
pub const LEDC_CH_DUTY: u32 = 0;

#[cfg(target_os = "espidf")]
pub fn init_ledc(freq_hz: u32) -> Result<(), HwInitError> {
    // SAFETY: Called once from the single main-task context before the
    // main loop; the config structs outlive the calls.
    unsafe {
        let timer = ledc_timer_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            timer_num: ledc_timer_t_LEDC_TIMER_0,
            duty_resolution: ledc_timer_bit_t_LEDC_TIMER_8_BIT,
            freq_hz,
            clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
            ..Default::default()
        };
        let ret = ledc_timer_config(&timer);
        if ret != ESP_OK as i32 { return Err(HwInitError::LedcTimerFailed(ret)); }

        let ret = ledc_channel_config(&ledc_channel_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            channel: LEDC_CH_DUTY,
            timer_sel: ledc_timer_t_LEDC_TIMER_0,
            gpio_num: pins::DUTY_PWM_GPIO,
            duty: 0,
            hpoint: 0,
            ..Default::default()
        });
        if ret != ESP_OK as i32 { return Err(HwInitError::LedcChannelFailed(ret)); }
    }

    info!(
        "hw_init: LEDC configured (duty=CH{} on GPIO{}, {} Hz, {}-bit)",
        LEDC_CH_DUTY, pins::DUTY_PWM_GPIO, freq_hz, pins::PWM_RESOLUTION_BITS
    );
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_ledc(freq_hz: u32) -> Result<(), HwInitError> {
    log::info!("hw_init(sim): LEDC init skipped ({} Hz)", freq_hz);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn ledc_set(channel: u32, duty: u8) {
    // SAFETY: the channel was configured in init_ledc(); duty register
    // writes are race-free since only the main loop calls this function.
    unsafe {
        ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, u32::from(duty));
        ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set(_channel: u32, _duty: u8) {}
