//! Adapter implementations of the directory ports.

pub mod memory;
pub mod postgres;
