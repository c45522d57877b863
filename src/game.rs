use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GridSize;
use crate::food::Food;
use crate::input::{Direction, GameInput};
use crate::snake::{DeathReason, Snake};
use crate::timing;

/// Lifecycle of a round. A session is always in exactly one of these.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// Things a tick can make happen, reported so the shell can react
/// (play a sound, stop the ambience) without peeking at state deltas.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    AteFood,
    Died(DeathReason),
}

/// One complete game session: simulation state plus the RNG that feeds
/// food placement. Holds no terminal or clock handles, so tests can
/// drive it tick by tick.
#[derive(Debug)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    /// True when the round that just ended beat the stored high score.
    pub new_record: bool,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Fresh session with an entropy-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Fresh session whose food placement replays deterministically.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::new(bounds);
        let food = Food::spawn(&mut rng, bounds, &snake);
        Self {
            snake,
            food,
            score: 0,
            high_score: 0,
            status: GameStatus::Running,
            death_reason: None,
            new_record: false,
            bounds,
            rng,
        }
    }

    /// Runs one simulation step: move, then resolve death or eating.
    ///
    /// Paused and finished sessions ignore ticks. A death freezes the
    /// board and folds the score into the session high score; an eaten
    /// pellet scores a point, queues one segment of growth, and respawns
    /// the food clear of the post-move body.
    pub fn tick(&mut self) -> Option<GameEvent> {
        if self.status != GameStatus::Running {
            return None;
        }

        if let Some(reason) = self.snake.advance(self.bounds) {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(reason);
            self.new_record = self.score > self.high_score;
            if self.new_record {
                self.high_score = self.score;
            }
            return Some(GameEvent::Died(reason));
        }

        if self.snake.head() == self.food.position {
            self.score += 1;
            self.snake.grow(1);
            self.food = Food::spawn(&mut self.rng, self.bounds, &self.snake);
            return Some(GameEvent::AteFood);
        }

        None
    }

    /// Routes the inputs the simulation cares about. Shell concerns (grid
    /// overlay, volume, quit) are ignored here.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.steer(direction),
            GameInput::Pause => self.toggle_pause(),
            GameInput::Restart => self.restart(),
            GameInput::ToggleGrid
            | GameInput::VolumeUp
            | GameInput::VolumeDown
            | GameInput::Quit => {}
        }
    }

    /// Requests a direction change for the next tick. Reversals and input
    /// after death are dropped; steering while paused is kept so the turn
    /// applies on resume.
    pub fn steer(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    /// Flips between `Running` and `Paused`. Does nothing once the round
    /// is over; only a restart leaves `GameOver`.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::GameOver => GameStatus::GameOver,
        };
    }

    /// Starts a new round in place: starting snake, fresh pellet, score
    /// zero. Only available once the previous round is over; the high
    /// score and the RNG stream both carry over.
    pub fn restart(&mut self) {
        if self.status != GameStatus::GameOver {
            return;
        }
        self.snake.reset(self.bounds);
        self.food = Food::spawn(&mut self.rng, self.bounds, &self.snake);
        self.score = 0;
        self.status = GameStatus::Running;
        self.death_reason = None;
        self.new_record = false;
    }

    /// Movement rate implied by the current score.
    #[must_use]
    pub fn current_speed(&self) -> f32 {
        timing::moves_per_second(self.score)
    }

    /// Playfield dimensions this session was created with.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}
