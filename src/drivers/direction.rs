//! Counting-direction switch.
//!
//! A quasi-static toggle on a pulled-up input: open (HIGH) counts up,
//! closed to ground (LOW) counts down. Read raw, without debouncing, and
//! only at the instant a press is consumed.

use embedded_hal::digital::{Error as _, InputPin};
use log::warn;

use crate::app::counter::Direction;
use crate::app::ports::DirectionPort;

pub struct DirectionSwitch<P> {
    pin: P,
}

impl<P: InputPin> DirectionSwitch<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> DirectionPort for DirectionSwitch<P> {
    fn read_direction(&mut self) -> Direction {
        match self.pin.is_high() {
            Ok(true) => Direction::Forward,
            Ok(false) => Direction::Reverse,
            Err(e) => {
                warn!("direction: pin read failed ({:?}), counting forward", e.kind());
                Direction::Forward
            }
        }
    }
}
