//! Pure collision checks on board positions

use super::board::{Board, Position};

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// True iff the head sits on the fruit
pub fn fruit_collision(head: Position, fruit: Position) -> bool {
    head == fruit
}

/// True iff the head overlaps any of the other segments
pub fn body_collision<'a>(
    head: Position,
    body_excluding_head: impl IntoIterator<Item = &'a Position>,
) -> bool {
    body_excluding_head.into_iter().any(|segment| *segment == head)
}

/// True iff the head lies outside the board
pub fn edge_collision(head: Position, board: &Board) -> bool {
    !board.contains(head)
}

/// Which collision, if any, ends the game. Walls are checked first.
pub fn detect<'a>(
    head: Position,
    body_excluding_head: impl IntoIterator<Item = &'a Position>,
    board: &Board,
) -> Option<CollisionType> {
    if edge_collision(head, board) {
        return Some(CollisionType::Wall);
    }
    if body_collision(head, body_excluding_head) {
        return Some(CollisionType::SelfCollision);
    }
    None
}

pub fn is_game_over<'a>(
    head: Position,
    body_excluding_head: impl IntoIterator<Item = &'a Position>,
    board: &Board,
) -> bool {
    detect(head, body_excluding_head, board).is_some()
}
