use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::{Direction, direction_change_is_valid};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighboring position one cell toward `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// What killed the snake. Wall checks run before self-collision checks, so
/// a corner case that is both reports the wall.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Mutable snake state: ordered body, heading, and deferred growth.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_growth: u32,
    alive: bool,
}

impl Snake {
    /// Creates the starting snake: three cells laid out horizontally around
    /// the grid center, heading right.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        debug_assert!(bounds.width >= 3 && bounds.height >= 1);

        let mid = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        let body = VecDeque::from([
            mid,
            Position {
                x: mid.x - 1,
                y: mid.y,
            },
            Position {
                x: mid.x - 2,
                y: mid.y,
            },
        ]);

        Self {
            body,
            direction: Direction::Right,
            pending_growth: 0,
            alive: true,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_growth: 0,
            alive: true,
        }
    }

    /// Reinitializes to the starting state for `bounds`.
    pub fn reset(&mut self, bounds: GridSize) {
        *self = Self::new(bounds);
    }

    /// Points the snake toward `direction` unless that would reverse it
    /// straight into its neck. Ignored once the snake is dead.
    ///
    /// The check runs against the snake's current heading, not against any
    /// earlier change made since the last tick, so several changes may land
    /// between ticks and the last valid one wins.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.alive && direction_change_is_valid(self.direction, direction) {
            self.direction = direction;
        }
    }

    /// Advances one cell in the current direction.
    ///
    /// Leaving `bounds` or entering any currently occupied body cell
    /// (including the tail cell about to be vacated) kills the snake and
    /// leaves the body untouched; the returned reason says which. On a
    /// survivable move the new head is pushed and either one unit of
    /// pending growth is consumed or the tail is dropped. Does nothing
    /// once dead.
    pub fn advance(&mut self, bounds: GridSize) -> Option<DeathReason> {
        if !self.alive {
            return None;
        }
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        let next = self.head().step(self.direction);
        if !next.is_within_bounds(bounds) {
            self.alive = false;
            return Some(DeathReason::WallCollision);
        }
        if self.body.contains(&next) {
            self.alive = false;
            return Some(DeathReason::SelfCollision);
        }

        self.body.push_front(next);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            let _ = self.body.pop_back();
        }
        None
    }

    /// Schedules `segments` ticks of tail retention; the body lengthens by
    /// one cell on each of the next `segments` moves.
    pub fn grow(&mut self, segments: u32) {
        self.pending_growth += segments;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of queued growth ticks.
    #[must_use]
    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// Returns true while the snake has not collided.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
