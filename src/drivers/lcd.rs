//! HD44780 character LCD driver, 8-bit parallel bus, write-only.
//!
//! ## Bus cycle
//!
//! RS selects command (LOW) or data (HIGH), the byte is put on D0..D7 and
//! latched by a 100 µs EN pulse. The controller then needs time to execute:
//! 1.8 ms after clear/home, 50 µs after anything else. RW is tied LOW for
//! the lifetime of the driver, so the busy flag is never read and the
//! delays are the only synchronisation.
//!
//! ## Dual-target design
//!
//! Generic over `embedded-hal` pins and delay: on ESP-IDF these are
//! `PinDriver`s and `Ets`; on host they are test doubles.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, OutputPin, PinState};
use log::warn;

use crate::app::ports::{
    DisplayPort, CMD_CLEAR, CMD_DISPLAY_OFF, CMD_DISPLAY_ON_BLINK, CMD_ENTRY_INCREMENT,
    CMD_FUNCTION_8BIT_2LINE, CMD_HOME,
};

/// Width of the EN strobe.
pub const ENABLE_PULSE_US: u32 = 100;
/// Settle time after data and most commands.
pub const SHORT_SETTLE_US: u32 = 50;
/// Settle time after clear and home.
pub const LONG_SETTLE_US: u32 = 1_800;

/// Power-up command sequence.
pub const INIT_SEQUENCE: [u8; 5] = [
    CMD_DISPLAY_OFF,
    CMD_FUNCTION_8BIT_2LINE,
    CMD_CLEAR,
    CMD_ENTRY_INCREMENT,
    CMD_DISPLAY_ON_BLINK,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Register {
    Instruction,
    Data,
}

pub struct Hd44780<P, D> {
    rs: P,
    rw: P,
    en: P,
    data: [P; 8],
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// `data[0]` is D0.
    pub fn new(rs: P, rw: P, en: P, data: [P; 8], delay: D) -> Self {
        Self {
            rs,
            rw,
            en,
            data,
            delay,
        }
    }

    /// Park the control lines and run the power-up sequence.
    pub fn init(&mut self) {
        drive(&mut self.rw, false);
        drive(&mut self.en, false);
        drive(&mut self.rs, false);
        self.put_bus(0);
        for code in INIT_SEQUENCE {
            self.send_command(code);
        }
    }

    fn write_byte(&mut self, register: Register, byte: u8) {
        drive(&mut self.rs, register == Register::Data);
        drive(&mut self.en, true);
        self.put_bus(byte);
        self.delay.delay_us(ENABLE_PULSE_US);
        drive(&mut self.en, false);
    }

    fn put_bus(&mut self, byte: u8) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            drive(pin, byte & (1 << bit) != 0);
        }
    }
}

impl<P: OutputPin, D: DelayNs> DisplayPort for Hd44780<P, D> {
    fn send_command(&mut self, code: u8) {
        self.write_byte(Register::Instruction, code);
        let settle = if code == CMD_CLEAR || code == CMD_HOME {
            LONG_SETTLE_US
        } else {
            SHORT_SETTLE_US
        };
        self.delay.delay_us(settle);
    }

    fn send_data(&mut self, byte: u8) {
        self.write_byte(Register::Data, byte);
        self.delay.delay_us(SHORT_SETTLE_US);
    }
}

/// Set a line; there is no one to report a failed write to.
fn drive<P: OutputPin>(pin: &mut P, high: bool) {
    if let Err(e) = pin.set_state(PinState::from(high)) {
        warn!("lcd: pin write failed ({:?})", e.kind());
    }
}
