use std::fmt::Display;
use std::hash::{Hash, Hasher};

use crate::board::piece::Player;
use crate::board::position::Position;
use crate::board::Grid;

/// A single piece relocation. Legality is checked by the board, not here.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    player: Player,
    from: Position,
    to: Position,
    is_capture: bool,
}

impl Move {
    pub fn new(player: Player, from_row: usize, from_col: usize, target_row: usize, target_col: usize) -> Move {
        Move::between(player, Position { row: from_row, col: from_col }, Position { row: target_row, col: target_col })
    }
    pub fn between(player: Player, from: Position, to: Position) -> Move {
        Move {
            player,
            from,
            to,
            is_capture: from.row.abs_diff(to.row) == 2,
        }
    }
    pub fn player(&self) -> Player {
        self.player
    }
    pub fn from(&self) -> Position {
        self.from
    }
    pub fn to(&self) -> Position {
        self.to
    }
    pub fn is_capture(&self) -> bool {
        self.is_capture
    }
    /// The jumped square, if this move is a capture.
    pub fn captured_position(&self) -> Option<Position> {
        self.is_capture.then(|| self.from.midpoint(self.to))
    }
    /// Whether playing this move on `grid` crowns the moving man.
    pub fn promotes(&self, grid: &Grid) -> bool {
        let Some(&piece) = grid.get(self.from.row).and_then(|row| row.get(self.from.col)) else {
            return false;
        };
        match piece.player() {
            Some(player) => !piece.is_king() && self.to.row == player.promotion_row(),
            None => false,
        }
    }
}

// Equality and hashing compare coordinates only, never the mover.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}
impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.player, self.from, self.to)?;
        if let Some(captured) = self.captured_position() {
            write!(f, " capture at {}", captured)?;
        }
        Ok(())
    }
}
