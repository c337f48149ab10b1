use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;

use super::grid::Grid;
use super::state::Position;

/// Random draws attempted before falling back to scanning for free cells
const MAX_RANDOM_ATTEMPTS: usize = 64;

/// The single piece of food on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Place food on a free cell, or `None` if every cell is occupied
    pub fn spawn<R: Rng>(
        occupied: &HashSet<Position>,
        grid: &Grid,
        rng: &mut R,
    ) -> Option<Self> {
        pick_free_cell(occupied, grid, rng).map(Self::new)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move the food to a uniformly chosen cell outside `occupied`.
    ///
    /// Returns the new position, or `None` (leaving the food where it was)
    /// when the board has no free cell.
    pub fn respawn<R: Rng>(
        &mut self,
        occupied: &HashSet<Position>,
        grid: &Grid,
        rng: &mut R,
    ) -> Option<Position> {
        let position = pick_free_cell(occupied, grid, rng)?;
        self.position = position;
        Some(position)
    }
}

fn pick_free_cell<R: Rng>(
    occupied: &HashSet<Position>,
    grid: &Grid,
    rng: &mut R,
) -> Option<Position> {
    if grid.cell_count() == 0 {
        return None;
    }

    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let candidate = grid.random_position(rng);
        if !occupied.contains(&candidate) {
            return Some(candidate);
        }
    }

    // Crowded board: choose among the cells that are actually free
    grid.positions()
        .filter(|pos| !occupied.contains(pos))
        .choose(rng)
}
