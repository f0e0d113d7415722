use std::collections::VecDeque;

use super::board::Position;
use super::direction::Direction;

/// The snake in the game
///
/// Segments are stored tail first: the front of the deque is the tail and the
/// back is the head.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    /// Direction the snake travelled on its last advance
    heading: Direction,
    /// Accepted steer request, applied on the next advance
    pending: Option<Direction>,
}

impl Snake {
    /// Create a snake from its segments, tail first
    ///
    /// Returns `None` if `segments` is empty.
    pub fn new(segments: impl IntoIterator<Item = Position>, heading: Direction) -> Option<Self> {
        let body: VecDeque<Position> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }

        Some(Self {
            body,
            heading,
            pending: None,
        })
    }

    /// The four-segment snake every session starts with, heading right
    pub fn initial() -> Self {
        let body = [(70, 50), (80, 50), (90, 50), (100, 50)]
            .into_iter()
            .map(|(x, y)| Position::new(x, y))
            .collect();

        Self {
            body,
            heading: Direction::Right,
            pending: None,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        // The body is never empty, see `new`
        self.body[self.body.len() - 1]
    }

    /// Get the tail position
    pub fn tail(&self) -> Position {
        self.body[0]
    }

    /// All segments, tail first
    pub fn segments(&self) -> impl Iterator<Item = &Position> + Clone {
        self.body.iter()
    }

    /// Segments excluding the head, tail first
    pub fn body_without_head(&self) -> impl Iterator<Item = &Position> + Clone {
        self.body.iter().take(self.body.len() - 1)
    }

    /// Check if position is occupied by any segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Direction the snake is currently travelling in
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Direction the snake will travel in on the next advance
    pub fn next_heading(&self) -> Direction {
        self.pending.unwrap_or(self.heading)
    }

    /// Request a direction change for the next advance
    ///
    /// Requests that reverse the current heading are rejected and return
    /// false. The check is made against the heading, not an earlier pending
    /// request, so a batch such as Up then Left while heading Right cannot
    /// turn the snake back onto itself.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.heading.is_opposite(direction) {
            return false;
        }
        self.pending = Some(direction);
        true
    }

    /// Move one cell in the next heading, keeping the tail if `grew` is true
    pub fn advance(&mut self, grew: bool) {
        if let Some(direction) = self.pending.take() {
            self.heading = direction;
        }

        let new_head = self.head().moved_in_direction(self.heading);
        self.body.push_back(new_head);

        if !grew {
            self.body.pop_front();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false, a snake has at least one segment
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::initial()
    }
}
