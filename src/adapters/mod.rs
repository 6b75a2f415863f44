//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements     | Connects to                         |
//! |------------|----------------|-------------------------------------|
//! | `hardware` | OutputPort     | LEDC duty channel, indicator LEDs   |
//! |            | DirectionPort  | Direction switch GPIO               |
//! | `log_sink` | EventSink      | Serial log output                   |
//!
//! The character display needs no adapter: the HD44780 driver implements
//! `DisplayPort` directly.

pub mod hardware;
pub mod log_sink;
