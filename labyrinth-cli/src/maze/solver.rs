//! Shortest route through a carved maze.

use labyrinth_core::{Edge, Graph};
use tracing::{debug, instrument};

use super::{Maze, MazeError, Room};

/// Finds the route from the top-left room to the bottom-right room through
/// the maze's open passages.
///
/// The returned rooms start at the entrance and end at the exit; a
/// single-room maze yields just that room.
///
/// # Errors
/// Returns [`MazeError::Graph`] wrapping
/// [`labyrinth_core::GraphError::NoPathExists`] when the passages do not
/// connect the entrance to the exit.
#[instrument(name = "maze.solve", level = "debug", err, skip_all)]
pub fn solve(maze: &Maze) -> Result<Vec<Room>, MazeError> {
    let entrance = Room::new(0, 0);
    let exit = Room::new(maze.height() - 1, maze.width() - 1);

    let graph = Graph::new(maze.rooms().collect(), maze.passages().cloned().collect())?;
    let path = graph.find_shortest_path_between(&entrance, &exit)?;

    let route: Vec<Room> = std::iter::once(entrance)
        .chain(path.iter().scan(entrance, |current, wall| {
            let next = *wall.other_vertex(current)?;
            *current = next;
            Some(next)
        }))
        .collect();
    debug!(rooms = route.len(), "maze solved");
    Ok(route)
}
