//! Shared test utilities used across labyrinth crates.

pub mod ci;
pub mod tracing;
