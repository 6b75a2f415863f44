//! Counter → 8-bit duty mapping.

/// Full-scale duty value.
pub const DUTY_FULL_SCALE: u32 = 255;

/// `round(counter * 255 / max)`, halves rounded away from zero.
///
/// Pure integer arithmetic; `counter` is clamped to `max` and a zero `max`
/// is treated as 1, so the result always fits a `u8`.
pub fn duty(counter: u16, max: u16) -> u8 {
    let max = u32::from(max.max(1));
    let counter = u32::from(counter).min(max);
    ((2 * counter * DUTY_FULL_SCALE + max) / (2 * max)) as u8
}
