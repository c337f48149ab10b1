use rand::Rng;

use super::state::Position;

/// The playable area, cells `0..width` by `0..height`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Every cell, row by row
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// A uniformly random cell. The grid must not be empty.
    pub fn random_position<R: Rng>(&self, rng: &mut R) -> Position {
        let x = rng.gen_range(0..self.width) as i32;
        let y = rng.gen_range(0..self.height) as i32;
        Position::new(x, y)
    }
}
