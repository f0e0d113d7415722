use log::{debug, info};

use super::{
    collision::{self, CollisionType},
    config::GameConfig,
    direction::Direction,
    fruit::FruitSpawner,
    state::{GameState, StopReason},
};

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the snake ate fruit this step
    pub ate_fruit: bool,
    /// Collision that ended the game this step, if any
    pub collision: Option<CollisionType>,
    /// Whether the session is stopped after this step
    pub terminated: bool,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    spawner: FruitSpawner,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: &GameConfig) -> Self {
        let spawner = match config.seed {
            Some(seed) => FruitSpawner::seeded(seed),
            None => FruitSpawner::new(),
        };

        Self { spawner }
    }

    /// Start a fresh session with the first fruit already placed
    pub fn reset(&mut self) -> GameState {
        let mut state = GameState::default();
        self.ensure_fruit(&mut state);
        state
    }

    /// Spawn fruit if the board has none
    pub fn ensure_fruit(&mut self, state: &mut GameState) {
        if state.has_fruit() {
            return;
        }

        let fruit = self.spawner.spawn(&state.board, state.snake.segments());
        debug!("Fruit spawned at ({}, {})", fruit.x, fruit.y);
        state.fruit = Some(fruit);
    }

    /// Forward a direction request to the snake, applied on the next step
    pub fn steer(&mut self, state: &mut GameState, direction: Direction) -> bool {
        let accepted = state.snake.steer(direction);
        if !accepted {
            debug!(
                "Ignored {:?}: reverses heading {:?}",
                direction,
                state.snake.heading()
            );
        }
        accepted
    }

    /// Stop the session at the player's request
    pub fn quit(&mut self, state: &mut GameState) {
        if state.is_running() {
            info!("Quit requested, final score {}", state.score);
        }
        state.stop(StopReason::Quit);
    }

    /// Execute one tick of the game
    ///
    /// Fruit is tested against the head before the snake moves, so fruit
    /// reached on this tick is eaten on the next one.
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if !state.is_running() {
            return StepResult {
                ate_fruit: false,
                collision: None,
                terminated: true,
            };
        }

        self.ensure_fruit(state);

        let head = state.snake.head();
        let ate_fruit = state
            .fruit
            .is_some_and(|fruit| collision::fruit_collision(head, fruit));

        if ate_fruit {
            state.score.on_fruit_eaten();
            state.fruit = None;
            debug!("Fruit eaten, score {}", state.score);
        }

        state.snake.advance(ate_fruit);
        state.ticks += 1;

        let collision = collision::detect(
            state.snake.head(),
            state.snake.body_without_head(),
            &state.board,
        );

        if let Some(collision_type) = collision {
            state.stop(StopReason::Collision(collision_type));
            info!(
                "Game over after {} ticks ({:?}), final score {}",
                state.ticks, collision_type, state.score
            );
        }

        StepResult {
            ate_fruit,
            collision,
            terminated: collision.is_some(),
        }
    }
}
