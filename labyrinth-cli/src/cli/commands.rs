//! Command implementations and argument parsing for the labyrinth CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::maze::{KruskalCarver, Maze, MazeError, Room, render, solve};

const DEFAULT_SIDE: usize = 10;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "labyrinth", about = "Carve and solve grid mazes.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Carve a perfect maze with randomised Kruskal and print it.
    Carve(CarveCommand),
}

/// Options accepted by the `carve` command.
#[derive(Debug, Args, Clone)]
pub struct CarveCommand {
    /// Number of columns.
    #[arg(long, default_value_t = DEFAULT_SIDE, value_parser = clap::value_parser!(usize))]
    pub width: usize,

    /// Number of rows.
    #[arg(long, default_value_t = DEFAULT_SIDE, value_parser = clap::value_parser!(usize))]
    pub height: usize,

    /// Seed for the wall weights (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Mark the route from the top-left to the bottom-right room.
    #[arg(long)]
    pub solve: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Building, carving or solving the maze failed.
    #[error(transparent)]
    Maze(#[from] MazeError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct CarveSummary {
    /// The carved maze.
    pub maze: Maze,
    /// Seed that reproduces this maze.
    pub seed: u64,
    /// Number of walls removed.
    pub removed: usize,
    /// Route from entrance to exit, when requested.
    pub route: Option<Vec<Room>>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the maze cannot be built, carved or solved.
///
/// # Examples
/// ```
/// # use labyrinth_cli::cli::{CarveCommand, Cli, Command, run_cli};
/// let cli = Cli {
///     command: Command::Carve(CarveCommand {
///         width: 4,
///         height: 3,
///         seed: Some(7),
///         solve: true,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.removed, 11);
/// assert!(summary.route.is_some());
/// # Ok::<(), labyrinth_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<CarveSummary, CliError> {
    match cli.command {
        Command::Carve(carve) => {
            Span::current().record("command", field::display("carve"));
            run_carve(&carve)
        }
    }
}

#[instrument(
    name = "cli.carve",
    err,
    skip(command),
    fields(width = command.width, height = command.height, seed = field::Empty),
)]
pub(super) fn run_carve(command: &CarveCommand) -> Result<CarveSummary, CliError> {
    let mut maze = Maze::grid(command.width, command.height)?;
    let seed = command.seed.unwrap_or_else(rand::random);
    Span::current().record("seed", seed);

    let removed = KruskalCarver::seeded(seed).carve(&mut maze)?;
    let route = if command.solve {
        Some(solve(&maze)?)
    } else {
        None
    };

    info!(
        removed,
        route = route.as_ref().map(Vec::len),
        "command completed"
    );
    Ok(CarveSummary {
        maze,
        seed,
        removed,
        route,
    })
}

/// Renders `summary` to `writer`: the maze as ASCII art followed by a
/// one-line summary.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &CarveSummary, mut writer: impl Write) -> io::Result<()> {
    let route = summary.route.as_deref().unwrap_or_default();
    write!(writer, "{}", render(&summary.maze, route))?;
    write!(
        writer,
        "{}x{} maze, seed {}, {} walls removed",
        summary.maze.width(),
        summary.maze.height(),
        summary.seed,
        summary.removed,
    )?;
    if let Some(route) = &summary.route {
        write!(writer, ", route of {} rooms", route.len())?;
    }
    writeln!(writer)
}
