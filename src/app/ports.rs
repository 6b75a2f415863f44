//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (display, outputs, direction switch, event sinks)
//! implement these traits. The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use super::counter::Direction;

// ───────────────────────────────────────────────────────────────
// Display port (domain → character display)
// ───────────────────────────────────────────────────────────────

/// Clear display, cursor home. Slow: needs the long settle delay.
pub const CMD_CLEAR: u8 = 0x01;
/// Cursor home. Slow: needs the long settle delay.
pub const CMD_HOME: u8 = 0x02;
/// Entry mode: cursor moves right, no display shift.
pub const CMD_ENTRY_INCREMENT: u8 = 0x06;
/// Display off, cursor off.
pub const CMD_DISPLAY_OFF: u8 = 0x08;
/// Display on, cursor hidden.
pub const CMD_DISPLAY_ON: u8 = 0x0C;
/// Display on, blinking cursor.
pub const CMD_DISPLAY_ON_BLINK: u8 = 0x0D;
/// Function set: 8-bit bus, two lines, 5x8 font.
pub const CMD_FUNCTION_8BIT_2LINE: u8 = 0x38;
/// Set DDRAM address; OR in `row * 0x40 + col`.
pub const CMD_SET_DDRAM: u8 = 0x80;
/// DDRAM offset of the second line.
pub const ROW_STRIDE: u8 = 0x40;

/// Write-only character display.
///
/// Every call is fire-and-forget: implementations own their settling
/// delays and there is no acknowledgement to wait for.
pub trait DisplayPort {
    /// Send an instruction byte.
    fn send_command(&mut self, code: u8);

    /// Send one character byte at the cursor.
    fn send_data(&mut self, byte: u8);

    /// Write a string at the cursor, one data byte per character.
    fn write_text(&mut self, text: &str) {
        for byte in text.bytes() {
            self.send_data(byte);
        }
    }

    /// Move the cursor to `row` (0 or 1), `col`.
    fn set_cursor(&mut self, row: u8, col: u8) {
        self.send_command(CMD_SET_DDRAM | (row * ROW_STRIDE + col));
    }

    fn clear(&mut self) {
        self.send_command(CMD_CLEAR);
    }

    fn home(&mut self) {
        self.send_command(CMD_HOME);
    }
}

// ───────────────────────────────────────────────────────────────
// Output port (domain → PWM + indicator)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the device outputs.
pub trait OutputPort {
    /// Write the 8-bit duty compare value. Idempotent.
    fn set_duty(&mut self, duty: u8);

    /// Light or extinguish the saturation indicator group.
    fn set_saturation_indicator(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Direction port (hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the counting-direction switch.
pub trait DirectionPort {
    /// Raw, non-debounced read. Only called when a press is consumed.
    fn read_direction(&mut self) -> Direction;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
