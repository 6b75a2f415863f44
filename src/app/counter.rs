//! Bounded porosity counter with sticky saturation.
//!
//! The counter lives in `[0, max]`. A move that would leave the range is
//! clamped to the bound it hit and marks the counter saturated; the flag
//! stays up until a move lands inside the range without clamping,
//! whichever direction that move goes.

/// Counting direction, read from the direction switch at press time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// Signed step applied per press.
    pub fn delta(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }
}

/// What a move did to the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Moved by one step, was not saturated.
    Applied,
    /// Moved by one step and cleared a previous saturation.
    Recovered,
    /// Would have left the range; held at the bound and saturated.
    Clamped,
}

#[derive(Debug, Clone)]
pub struct CounterEngine {
    value: u16,
    max: u16,
    saturated: bool,
}

impl CounterEngine {
    /// New counter at 0, not saturated. `max` must be at least 1.
    pub fn new(max: u16) -> Self {
        debug_assert!(max > 0, "counter max must be positive");
        Self {
            value: 0,
            max,
            saturated: false,
        }
    }

    /// Apply one consumed press. This is the only mutator of the value.
    pub fn on_press_consumed(&mut self, direction: Direction) -> MoveOutcome {
        let target = i32::from(self.value) + direction.delta();

        if target > i32::from(self.max) {
            self.value = self.max;
            self.saturated = true;
            MoveOutcome::Clamped
        } else if target < 0 {
            self.value = 0;
            self.saturated = true;
            MoveOutcome::Clamped
        } else {
            self.value = target as u16;
            if self.saturated {
                self.saturated = false;
                MoveOutcome::Recovered
            } else {
                MoveOutcome::Applied
            }
        }
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn max(&self) -> u16 {
        self.max
    }

    pub fn is_saturated(&self) -> bool {
        self.saturated
    }
}
