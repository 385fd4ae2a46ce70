//! Order-specific actor wiring: the `Entity` impl and client-facing errors.

pub mod entity;
pub mod error;

pub use error::*;
