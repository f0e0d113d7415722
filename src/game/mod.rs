//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Collisions are plain equality and containment checks on [`Position`] and [`Board`].

pub mod board;
pub mod collision;
pub mod config;
pub mod direction;
pub mod engine;
pub mod fruit;
pub mod score;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use board::{Board, CELL_SIZE, Position};
pub use collision::CollisionType;
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, StepResult};
pub use fruit::FruitSpawner;
pub use score::Score;
pub use snake::Snake;
pub use state::{GameState, SessionStatus, StopReason};
