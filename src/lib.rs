//! Snake Grid - the classic Snake arcade game in the terminal
//!
//! This library provides:
//! - Core game logic (game module), free of any I/O or rendering
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
