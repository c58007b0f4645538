//! Rectangular grid mazes built on top of the core graph algorithms.
//!
//! A [`Maze`] starts with every interior wall standing. Carving removes the
//! walls chosen by a minimum spanning tree over randomly weighted walls,
//! which yields a perfect maze: exactly one passage between any two rooms.

mod carver;
mod render;
mod solver;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use labyrinth_core::{Edge, GraphError};
use thiserror::Error;

pub use self::{carver::KruskalCarver, render::render, solver::solve};

/// Errors raised while building, carving or solving a maze.
#[derive(Debug, Error, PartialEq)]
pub enum MazeError {
    /// Mazes need at least one room in each direction.
    #[error("maze dimensions must be positive (got {width}x{height})")]
    InvalidDimensions {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
    /// A wall index did not name an interior wall of the maze.
    #[error("wall {index} is out of range for a maze with {walls} walls")]
    UnknownWall {
        /// The rejected wall index.
        index: usize,
        /// Number of interior walls in the maze.
        walls: usize,
    },
    /// A graph algorithm failed while carving or solving.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A cell of the grid, addressed by row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Room {
    /// Zero-based row, counted from the top.
    pub row: usize,
    /// Zero-based column, counted from the left.
    pub col: usize,
}

impl Room {
    /// Creates a room at `row`, `col`.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An interior wall separating two orthogonally adjacent rooms.
///
/// Walls double as graph edges: the distance between the centres of the two
/// rooms is the edge weight.
///
/// `room1` is always the room to the west of (or north of) `room2`.
#[derive(Clone, Debug)]
pub struct Wall {
    room1: Room,
    room2: Room,
    distance: f64,
}

impl Wall {
    fn between(room1: Room, room2: Room) -> Self {
        Self {
            room1,
            room2,
            distance: 1.0,
        }
    }

    /// Returns `true` when the wall separates horizontally adjacent rooms.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.room1.row == self.room2.row
    }
}

impl Edge for Wall {
    type Vertex = Room;

    #[rustfmt::skip]
    fn vertex1(&self) -> &Room { &self.room1 }

    #[rustfmt::skip]
    fn vertex2(&self) -> &Room { &self.room2 }

    #[rustfmt::skip]
    fn weight(&self) -> f64 { self.distance }
}

impl PartialEq for Wall {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Wall {}

impl Ord for Wall {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.room1.cmp(&other.room1))
            .then_with(|| self.room2.cmp(&other.room2))
    }
}

impl PartialOrd for Wall {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Wall {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.room1.hash(state);
        self.room2.hash(state);
        self.distance.to_bits().hash(state);
    }
}

/// A `width` x `height` grid of rooms and the interior walls between them.
#[derive(Clone, Debug)]
pub struct Maze {
    width: usize,
    height: usize,
    walls: Vec<Wall>,
    open: Vec<bool>,
}

impl Maze {
    /// Creates a grid with every interior wall standing.
    ///
    /// # Errors
    /// Returns [`MazeError::InvalidDimensions`] when either dimension is
    /// zero.
    pub fn grid(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        let mut walls = Vec::new();
        for row in 0..height {
            for col in 0..width {
                let here = Room::new(row, col);
                if col + 1 < width {
                    walls.push(Wall::between(here, Room::new(row, col + 1)));
                }
                if row + 1 < height {
                    walls.push(Wall::between(here, Room::new(row + 1, col)));
                }
            }
        }

        let open = vec![false; walls.len()];
        Ok(Self {
            width,
            height,
            walls,
            open,
        })
    }

    /// Number of columns.
    #[must_use]
    #[rustfmt::skip]
    pub fn width(&self) -> usize { self.width }

    /// Number of rows.
    #[must_use]
    #[rustfmt::skip]
    pub fn height(&self) -> usize { self.height }

    /// Every room, row by row.
    pub fn rooms(&self) -> impl Iterator<Item = Room> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Room::new(row, col)))
    }

    /// Every interior wall, whether standing or removed.
    #[must_use]
    #[rustfmt::skip]
    pub fn walls(&self) -> &[Wall] { &self.walls }

    /// The walls that have been removed, in wall order.
    pub fn passages(&self) -> impl Iterator<Item = &Wall> + '_ {
        self.walls
            .iter()
            .zip(&self.open)
            .filter_map(|(wall, open)| open.then_some(wall))
    }

    /// Returns `true` when the wall between `room1` and `room2` is removed.
    #[must_use]
    pub fn is_open(&self, room1: Room, room2: Room) -> bool {
        self.walls
            .iter()
            .zip(&self.open)
            .any(|(wall, open)| {
                *open
                    && ((wall.room1 == room1 && wall.room2 == room2)
                        || (wall.room1 == room2 && wall.room2 == room1))
            })
    }

    /// Removes the walls at the given indices into [`Maze::walls`].
    ///
    /// # Errors
    /// Returns [`MazeError::UnknownWall`] for an index past the last wall; no
    /// wall is removed in that case.
    pub fn remove_walls(&mut self, indices: &[usize]) -> Result<(), MazeError> {
        if let Some(&index) = indices.iter().find(|&&index| index >= self.walls.len()) {
            return Err(MazeError::UnknownWall {
                index,
                walls: self.walls.len(),
            });
        }
        for &index in indices {
            self.open[index] = true;
        }
        Ok(())
    }
}
