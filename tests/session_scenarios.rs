use arcade_snake::config::GridSize;
use arcade_snake::game::{GameEvent, GameState, GameStatus};
use arcade_snake::input::{Direction, GameInput};
use arcade_snake::snake::{DeathReason, Position, Snake};

fn body_of(state: &GameState) -> Vec<Position> {
    state.snake.segments().copied().collect()
}

#[test]
fn stepwise_eat_grow_die_and_restart() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 6,
            height: 4,
        },
        42,
    );
    state.snake = Snake::from_segments(
        vec![Position { x: 1, y: 1 }, Position { x: 0, y: 1 }],
        Direction::Right,
    );
    state.food.position = Position { x: 2, y: 1 };

    assert_eq!(state.tick(), Some(GameEvent::AteFood));
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.head(), Position { x: 2, y: 1 });
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.snake.pending_growth(), 1);

    // Park the respawned pellet out of this script's path.
    state.food.position = Position { x: 0, y: 3 };

    state.apply_input(GameInput::Direction(Direction::Up));
    assert_eq!(state.tick(), None);
    assert_eq!(state.snake.head(), Position { x: 2, y: 0 });
    assert_eq!(state.snake.len(), 3);

    // Next step up leaves the grid; the body must survive untouched.
    assert_eq!(
        state.tick(),
        Some(GameEvent::Died(DeathReason::WallCollision))
    );
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
    assert_eq!(
        body_of(&state),
        vec![
            Position { x: 2, y: 0 },
            Position { x: 2, y: 1 },
            Position { x: 1, y: 1 },
        ]
    );

    // Finished rounds ignore further ticks.
    assert_eq!(state.tick(), None);
    assert_eq!(state.snake.head(), Position { x: 2, y: 0 });

    state.apply_input(GameInput::Restart);
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.high_score, 1);
    assert_eq!(state.death_reason, None);
    assert_eq!(
        body_of(&state),
        vec![
            Position { x: 3, y: 2 },
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
        ]
    );
    assert_eq!(state.snake.direction(), Direction::Right);
}

#[test]
fn growth_is_realized_head_first_after_an_eat() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 5,
            height: 5,
        },
        9,
    );
    state.food.position = Position { x: 3, y: 2 };

    assert_eq!(state.tick(), Some(GameEvent::AteFood));
    state.food.position = Position { x: 0, y: 0 };

    assert_eq!(state.tick(), None);
    assert_eq!(
        body_of(&state),
        vec![
            Position { x: 4, y: 2 },
            Position { x: 3, y: 2 },
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
        ]
    );
}

#[test]
fn climbing_off_the_top_ends_the_round_without_mutation() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 4,
            height: 4,
        },
        6,
    );
    state.snake = Snake::from_segments(
        vec![
            Position { x: 1, y: 1 },
            Position { x: 1, y: 2 },
            Position { x: 1, y: 3 },
        ],
        Direction::Up,
    );
    state.food.position = Position { x: 3, y: 3 };

    assert_eq!(state.tick(), None);
    assert_eq!(state.snake.head(), Position { x: 1, y: 0 });

    assert_eq!(
        state.tick(),
        Some(GameEvent::Died(DeathReason::WallCollision))
    );
    assert_eq!(
        body_of(&state),
        vec![
            Position { x: 1, y: 0 },
            Position { x: 1, y: 1 },
            Position { x: 1, y: 2 },
        ]
    );
}

#[test]
fn reversals_are_ignored_from_any_heading() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 8,
            height: 8,
        },
        7,
    );
    state.snake = Snake::from_segments(
        vec![
            Position { x: 4, y: 4 },
            Position { x: 3, y: 4 },
            Position { x: 2, y: 4 },
        ],
        Direction::Right,
    );
    state.food.position = Position { x: 0, y: 0 };

    state.apply_input(GameInput::Direction(Direction::Left));
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 5, y: 4 });

    state.apply_input(GameInput::Direction(Direction::Up));
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 5, y: 3 });

    state.apply_input(GameInput::Direction(Direction::Down));
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 5, y: 2 });
}

#[test]
fn pause_freezes_the_board_and_keeps_steering() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 10,
            height: 10,
        },
        3,
    );
    state.food.position = Position { x: 0, y: 0 };
    let head = state.snake.head();

    state.apply_input(GameInput::Pause);
    assert_eq!(state.status, GameStatus::Paused);

    for _ in 0..3 {
        assert_eq!(state.tick(), None);
    }
    assert_eq!(state.snake.head(), head);
    assert_eq!(state.score, 0);

    state.apply_input(GameInput::Direction(Direction::Down));
    state.apply_input(GameInput::Pause);
    assert_eq!(state.status, GameStatus::Running);

    state.tick();
    assert_eq!(
        state.snake.head(),
        Position {
            x: head.x,
            y: head.y + 1,
        }
    );
}

#[test]
fn speed_rises_with_score_and_saturates() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 10,
            height: 10,
        },
        1,
    );

    assert_eq!(state.current_speed(), 8.0);

    state.score = 5;
    assert!((state.current_speed() - 8.8).abs() < 1e-4);

    state.score = 10;
    assert!((state.current_speed() - 9.68).abs() < 1e-4);

    state.score = 95;
    assert_eq!(state.current_speed(), 45.0);
}

#[test]
fn an_eating_run_grows_one_segment_per_pellet() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 12,
            height: 3,
        },
        11,
    );
    state.snake = Snake::from_segments(
        vec![Position { x: 1, y: 1 }, Position { x: 0, y: 1 }],
        Direction::Right,
    );

    for x in 2..=8 {
        state.food.position = Position { x, y: 1 };
        assert_eq!(state.tick(), Some(GameEvent::AteFood));
    }

    assert_eq!(state.score, 7);
    // The last pellet's growth is still pending by one tick.
    assert_eq!(
        state.snake.len() + state.snake.pending_growth() as usize,
        2 + 7
    );
    assert_eq!(state.snake.pending_growth(), 1);
}
