use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Spawn attempts before giving up on finding a free cell.
const MAX_SPAWN_ATTEMPTS: u32 = 10_000;

/// A single food pellet on the grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Places food on a uniformly random cell not occupied by the snake.
    ///
    /// Draws are rejected until a free cell turns up. After
    /// `MAX_SPAWN_ATTEMPTS` rejections the last draw is accepted as-is,
    /// so on a saturated grid the pellet may land on the snake rather
    /// than loop forever.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Self {
        let mut position = Self::random_cell(rng, bounds);
        let mut attempts = 0;
        while snake.occupies(position) && attempts < MAX_SPAWN_ATTEMPTS {
            position = Self::random_cell(rng, bounds);
            attempts += 1;
        }
        Self { position }
    }

    fn random_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
        Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        }
    }
}
