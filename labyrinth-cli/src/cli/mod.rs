//! Command-line interface orchestration for the labyrinth binary.
//!
//! The CLI offers a single `carve` command that builds a grid maze, carves it
//! with randomised Kruskal and optionally marks the solution route.

mod commands;

pub use commands::{CarveCommand, CarveSummary, Cli, CliError, Command, render_summary, run_cli};
