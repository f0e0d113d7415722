use super::board::{Board, Position};
use super::collision::CollisionType;
use super::score::Score;
use super::snake::Snake;

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The snake hit a wall or itself
    Collision(CollisionType),
    /// The player asked to quit
    Quit,
}

/// Lifecycle of a session. There is no way back from `Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Stopped(StopReason),
}

/// Complete state of one game session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Current fruit, `None` until the next tick spawns one
    pub fruit: Option<Position>,
    pub board: Board,
    pub score: Score,
    pub ticks: u32,
    pub status: SessionStatus,
}

impl GameState {
    /// Create a new session around `snake`, with no fruit yet
    pub fn new(snake: Snake) -> Self {
        Self {
            snake,
            fruit: None,
            board: Board::STANDARD,
            score: Score::new(),
            ticks: 0,
            status: SessionStatus::Running,
        }
    }

    pub fn has_fruit(&self) -> bool {
        self.fruit.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// Stop a running session. A session that already stopped keeps its
    /// original reason.
    pub fn stop(&mut self, reason: StopReason) {
        if self.is_running() {
            self.status = SessionStatus::Stopped(reason);
        }
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        match self.status {
            SessionStatus::Running => None,
            SessionStatus::Stopped(reason) => Some(reason),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Snake::initial())
    }
}
