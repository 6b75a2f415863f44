//! GPIO / peripheral pin assignments for the porosity controller board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers. Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// User inputs (both wired active-low with internal pull-ups)
// ---------------------------------------------------------------------------

/// Momentary push-button. LOW = pressed.
pub const BUTTON_GPIO: i32 = 16;
/// Counting-direction switch. HIGH (open) = count up, LOW = count down.
pub const DIRECTION_GPIO: i32 = 17;

// ---------------------------------------------------------------------------
// Duty-cycle output
// ---------------------------------------------------------------------------

/// LEDC PWM output carrying the porosity duty cycle.
pub const DUTY_PWM_GPIO: i32 = 1;

/// Saturation indicator group: all lit while the counter sits clamped at a bound.
pub const SATURATION_LED_GPIOS: [i32; 3] = [2, 4, 5];

// ---------------------------------------------------------------------------
// HD44780 character LCD (8-bit parallel, write-only)
// ---------------------------------------------------------------------------

/// Register select: LOW = command, HIGH = data.
pub const LCD_RS_GPIO: i32 = 38;
/// Read/write: held LOW, the driver never reads back.
pub const LCD_RW_GPIO: i32 = 39;
/// Enable strobe.
pub const LCD_EN_GPIO: i32 = 40;
/// Data bus D0..D7, least significant bit first.
pub const LCD_DATA_GPIOS: [i32; 8] = [8, 9, 10, 11, 12, 13, 14, 21];

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits). 8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
