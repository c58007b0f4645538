//! Randomised Kruskal carving.

use std::cmp::Ordering;

use labyrinth_core::{Edge, Graph, GraphError};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use super::{Maze, MazeError, Room, Wall};

/// A maze wall paired with a throwaway random weight.
///
/// The carver never touches the maze's own walls; it spans the rooms with
/// these copies and reads the chosen wall indices back out.
#[derive(Debug)]
struct RandomWall<'m> {
    index: usize,
    wall: &'m Wall,
    weight: f64,
}

impl Edge for RandomWall<'_> {
    type Vertex = Room;

    fn vertex1(&self) -> &Room {
        self.wall.vertex1()
    }

    fn vertex2(&self) -> &Room {
        self.wall.vertex2()
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

impl PartialEq for RandomWall<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RandomWall<'_> {}

impl Ord for RandomWall<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for RandomWall<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Carves perfect mazes by removing the walls of a random spanning tree.
#[derive(Debug)]
pub struct KruskalCarver {
    rng: SmallRng,
}

impl KruskalCarver {
    /// Creates a carver whose output is fully determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Removes `rooms - 1` walls from `maze` so that every room is reachable
    /// from every other room along exactly one route.
    ///
    /// Returns the number of walls removed.
    ///
    /// # Errors
    /// Returns [`MazeError::Graph`] if the spanning tree cannot be built.
    #[instrument(
        name = "maze.carve",
        level = "debug",
        err,
        skip_all,
        fields(width = maze.width(), height = maze.height()),
    )]
    pub fn carve(&mut self, maze: &mut Maze) -> Result<usize, MazeError> {
        let chosen = self.choose_walls(maze)?;
        maze.remove_walls(&chosen)?;
        debug!(removed = chosen.len(), "maze carved");
        Ok(chosen.len())
    }

    fn choose_walls(&mut self, maze: &Maze) -> Result<Vec<usize>, GraphError> {
        let weighted = maze
            .walls()
            .iter()
            .enumerate()
            .map(|(index, wall)| RandomWall {
                index,
                wall,
                weight: self.rng.r#gen::<f64>(),
            })
            .collect();
        let graph = Graph::new(maze.rooms().collect(), weighted)?;
        let tree = graph.find_minimum_spanning_tree()?;
        Ok(tree.edges().iter().map(|wall| wall.index).collect())
    }
}
