use derive_more::Display;

use crate::board::direction::Direction;
use crate::error::{EngineError, Result};

pub const BOARD_SIZE: usize = 8;

/// A coordinate on the 8x8 grid, row 0 at the top.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("[{row}, {col}]")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Result<Position> {
        if Self::on_board(row, col) {
            Ok(Position { row: row as usize, col: col as usize })
        } else {
            Err(EngineError::OutOfBounds { row, col })
        }
    }
    pub fn on_board(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }
    /// Only dark squares, where `row + col` is even, ever hold a piece.
    pub fn is_playable(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }
    pub fn offset(&self, direction: Direction, distance: i32) -> Option<Position> {
        let (row_step, col_step) = direction.value();
        Position::new(self.row as i32 + row_step * distance, self.col as i32 + col_step * distance).ok()
    }
    pub fn midpoint(&self, other: Position) -> Position {
        Position { row: (self.row + other.row) / 2, col: (self.col + other.col) / 2 }
    }
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}
