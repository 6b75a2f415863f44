//! Fuzz target: raw button samples → debouncer → counter
//!
//! Each input byte is one tick: bit 0 is the button level, bit 1 the
//! direction switch, bit 2 whether the main cycle runs after the tick.
//! Verifies:
//! - No panics under arbitrary sample streams
//! - Debounced edges strictly alternate, falling first
//! - The counter never leaves `[0, max]` and the duty stays on its scale
//!
//! cargo fuzz run fuzz_sample_stream

#![no_main]

use libfuzzer_sys::fuzz_target;
use porosity::app::counter::{CounterEngine, Direction};
use porosity::app::duty::duty;
use porosity::drivers::debounce::{Debouncer, Edge};
use porosity::events::{ClickEvents, ClickKind};

fuzz_target!(|data: &[u8]| {
    let Some((&head, ticks)) = data.split_first() else {
        return;
    };

    let width = head % 8 + 1;
    let max = u16::from(head).max(1);
    let Ok(mut debouncer) = Debouncer::new(width) else {
        return;
    };
    let clicks = ClickEvents::new();
    let mut counter = CounterEngine::new(max);
    let mut next_edge = Edge::Falling;

    for &tick in ticks {
        if let Some(edge) = debouncer.update(tick & 0x01 != 0) {
            assert_eq!(edge, next_edge, "edges must alternate");
            next_edge = match edge {
                Edge::Falling => {
                    clicks.raise(ClickKind::Press);
                    Edge::Rising
                }
                Edge::Rising => {
                    clicks.raise(ClickKind::Release);
                    Edge::Falling
                }
            };
        }

        if tick & 0x04 != 0 {
            clicks.take_release();
            if clicks.take_press() {
                let dir = if tick & 0x02 != 0 {
                    Direction::Forward
                } else {
                    Direction::Reverse
                };
                counter.on_press_consumed(dir);
            }
            assert!(counter.value() <= max);
            let d = duty(counter.value(), max);
            assert!(counter.value() != max || d == 255);
        }
    }
});
