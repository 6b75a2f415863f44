//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the rules of the porosity controller: the bounded
//! counter with its saturation policy, the duty-cycle mapping and the
//! splash/wait/run presentation. All interaction with hardware happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod counter;
pub mod display;
pub mod duty;
pub mod events;
pub mod ports;
pub mod service;
