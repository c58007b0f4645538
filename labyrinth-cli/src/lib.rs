//! Support library for the labyrinth CLI binary.
//!
//! Exposes the maze model and the command pipeline so doctests and
//! integration tests can exercise them without forking a subprocess.

pub mod cli;
pub mod logging;
pub mod maze;
