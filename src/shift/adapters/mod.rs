//! Adapter implementations of the shift ports.

pub mod memory;
pub mod postgres;
