//! Porosity controller firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod pins;

// Drivers and adapters carry their own cfg-gated hardware paths; on the
// host they fall back to in-memory simulation.
pub mod adapters;
pub mod drivers;
