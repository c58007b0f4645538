//! ASCII rendering.

use std::collections::HashSet;

use super::{Maze, Room};

const ROOM: &str = "   ";
const ROUTE: &str = " * ";

/// Draws `maze` as ASCII art, marking every room in `route` with `*`.
///
/// # Examples
/// ```
/// use labyrinth_cli::maze::{Maze, render};
///
/// let maze = Maze::grid(2, 1)?;
/// assert_eq!(render(&maze, &[]), "+---+---+\n|   |   |\n+---+---+\n");
/// # Ok::<(), labyrinth_cli::maze::MazeError>(())
/// ```
#[must_use]
pub fn render(maze: &Maze, route: &[Room]) -> String {
    let mut east = HashSet::new();
    let mut south = HashSet::new();
    for wall in maze.passages() {
        if wall.is_vertical() {
            east.insert(wall.room1);
        } else {
            south.insert(wall.room1);
        }
    }
    let marked: HashSet<Room> = route.iter().copied().collect();
    let (width, height) = (maze.width(), maze.height());

    let mut out = String::from("+");
    out.push_str(&"---+".repeat(width));
    out.push('\n');

    for row in 0..height {
        out.push('|');
        for col in 0..width {
            let room = Room::new(row, col);
            out.push_str(if marked.contains(&room) { ROUTE } else { ROOM });
            out.push(if east.contains(&room) { ' ' } else { '|' });
        }
        out.push_str("\n+");
        for col in 0..width {
            let room = Room::new(row, col);
            out.push_str(if south.contains(&room) { "   +" } else { "---+" });
        }
        out.push('\n');
    }
    out
}
