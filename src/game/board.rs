use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Side length of one cell, in board units
pub const CELL_SIZE: i32 = 10;

/// Side length of the board, in board units
pub const BOARD_SIZE: i32 = 500;

/// A grid-aligned position on the board, in board units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position of the top-left corner of the cell at (column, row)
    pub fn from_cell(column: i32, row: i32) -> Self {
        Self::new(column * CELL_SIZE, row * CELL_SIZE)
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * CELL_SIZE, dy * CELL_SIZE)
    }
}

/// The playing field: the half-open rectangle [0, width) x [0, height)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
}

impl Board {
    /// The fixed 500x500 board every session is played on
    pub const STANDARD: Board = Board {
        width: BOARD_SIZE,
        height: BOARD_SIZE,
    };

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cell columns
    pub fn columns(&self) -> i32 {
        self.width / CELL_SIZE
    }

    /// Number of cell rows
    pub fn rows(&self) -> i32 {
        self.height / CELL_SIZE
    }

    /// A cell at `pos` lies entirely on the board
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(50, 50);
        assert_eq!(pos.moved_in_direction(Direction::Right), Position::new(60, 50));
        assert_eq!(pos.moved_in_direction(Direction::Left), Position::new(40, 50));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(50, 60));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(50, 40));
    }

    #[test]
    fn test_from_cell() {
        assert_eq!(Position::from_cell(0, 0), Position::new(0, 0));
        assert_eq!(Position::from_cell(49, 7), Position::new(490, 70));
    }

    #[test]
    fn test_standard_board_dimensions() {
        let board = Board::STANDARD;
        assert_eq!(board.width(), 500);
        assert_eq!(board.height(), 500);
        assert_eq!(board.columns(), 50);
        assert_eq!(board.rows(), 50);
    }

    #[test]
    fn test_bounds_checking() {
        let board = Board::STANDARD;

        assert!(board.contains(Position::new(0, 0)));
        assert!(board.contains(Position::new(490, 490)));
        assert!(!board.contains(Position::new(500, 50)));
        assert!(!board.contains(Position::new(50, 500)));
        assert!(!board.contains(Position::new(-10, 0)));
        assert!(!board.contains(Position::new(0, -10)));
    }
}
