//! Input/output drivers, hardware initialisation, and peripheral helpers.

pub mod button;
pub mod debounce;
pub mod direction;
pub mod hw_init;
pub mod hw_timer;
pub mod indicator;
pub mod lcd;
pub mod pwm;
pub mod watchdog;
