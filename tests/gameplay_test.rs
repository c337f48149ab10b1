use rand::{rngs::StdRng, Rng, SeedableRng};
use snake_tui::game::{
    Direction, Food, GameConfig, GameEngine, GameInput, GameOverReason, GameState, Position, Snake,
};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn engine_with(
    segments: Vec<Position>,
    direction: Direction,
    food: Position,
) -> GameEngine<StdRng> {
    GameEngine::from_parts(
        GameConfig::small(),
        StdRng::seed_from_u64(0x5EED),
        Snake::from_segments(segments, direction),
        Food::new(food),
    )
}

#[test]
fn test_eating_grows_scores_and_respawns() {
    let mut engine = engine_with(vec![Position::new(5, 5)], Direction::Right, Position::new(6, 5));

    let result = engine.tick();

    assert!(result.ate_food);
    assert_eq!(engine.snake().head(), Position::new(6, 5));
    assert_eq!(engine.score(), 1);
    assert_eq!(engine.snake().len(), 2);
    assert_eq!(
        engine.snake().segments(),
        &[Position::new(6, 5), Position::new(5, 5)]
    );

    let food = engine.food().position();
    assert_ne!(food, Position::new(5, 5));
    assert_ne!(food, Position::new(6, 5));
    assert!(engine.snapshot().grid.contains(food));
}

#[test]
fn test_reverse_request_is_ignored() {
    let mut engine = engine_with(
        vec![Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)],
        Direction::Right,
        Position::new(9, 9),
    );

    engine.push_input(GameInput::Turn(Direction::Left));
    engine.tick();

    assert_eq!(engine.snake().direction(), Direction::Right);
    assert_eq!(engine.state(), GameState::Running);
}

#[test]
fn test_leaving_the_grid_ends_the_game() {
    let mut engine = engine_with(vec![Position::new(0, 5)], Direction::Left, Position::new(9, 9));

    let result = engine.tick();

    assert_eq!(engine.snake().head(), Position::new(-1, 5));
    assert_eq!(engine.state(), GameState::GameOver);
    assert_eq!(result.game_over, Some(GameOverReason::Wall));

    // Frozen for display
    engine.push_input(GameInput::Turn(Direction::Up));
    engine.tick();
    assert_eq!(engine.snake().head(), Position::new(-1, 5));
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_restart_restores_initial_game() {
    let config = GameConfig {
        initial_snake_length: 4,
        points_per_food: 5,
        ..GameConfig::small()
    };
    let mut engine = GameEngine::with_rng(config, StdRng::seed_from_u64(17)).unwrap();
    let initial = engine.snake().clone();

    engine.push_input(GameInput::Turn(Direction::Down));
    while engine.state() == GameState::Running {
        engine.tick();
    }

    engine.push_input(GameInput::Restart);
    assert!(engine.tick().restarted);

    assert_eq!(engine.state(), GameState::Running);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.snake(), &initial);
    assert!(!engine.snake().occupies(engine.food().position()));
}

/// Drive many random games and check the invariants after every tick
#[test]
fn test_invariants_hold_over_random_play() {
    let mut driver = StdRng::seed_from_u64(99);

    for seed in 0..40 {
        let config = GameConfig {
            initial_snake_length: 3,
            ..GameConfig::new(8, 6)
        };
        let mut engine = GameEngine::with_rng(config, StdRng::seed_from_u64(seed)).unwrap();

        for _ in 0..400 {
            if engine.state() == GameState::GameOver {
                break;
            }

            let before_len = engine.snake().len();
            let before_dir = engine.snake().direction();
            let before_score = engine.score();
            let food_before = engine.food().position();
            let requested = DIRECTIONS[driver.gen_range(0..4)];

            engine.push_input(GameInput::Turn(requested));
            let result = engine.tick();
            let snake = engine.snake();

            // Never reverses in one step
            assert_ne!(snake.direction(), before_dir.opposite());

            // Grows by exactly one iff food was eaten
            if result.ate_food {
                assert_eq!(snake.len(), before_len + 1);
                assert_eq!(snake.head(), food_before);
                assert_eq!(engine.score(), before_score + 1);
            } else {
                assert_eq!(snake.len(), before_len);
                assert_eq!(engine.score(), before_score);
            }

            match result.game_over {
                None => {
                    let grid = engine.snapshot().grid;
                    assert!(grid.contains(snake.head()));
                    assert!(!snake.check_self_collision());
                    assert!(!snake.occupies(engine.food().position()));
                }
                Some(GameOverReason::Wall) => {
                    assert!(!engine.snapshot().grid.contains(snake.head()));
                }
                Some(GameOverReason::SelfCollision) => {
                    assert!(snake.check_self_collision());
                }
                Some(GameOverReason::BoardFilled) => {
                    assert_eq!(snake.len(), 8 * 6);
                }
            }
        }
    }
}
