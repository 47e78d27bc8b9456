use arrayvec::ArrayVec;

use crate::board::direction::Direction;
use crate::board::piece::Player;
use crate::board::piece_move::Move;
use crate::board::position::Position;
use crate::board::Grid;

/// Every square holding a piece with four diagonal options each.
pub const MAX_MOVES: usize = 256;

pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// Enumerates the moves `player` may make on `grid`.
///
/// Squares are visited row by row, left to right. For each piece the four
/// capture candidates are emitted before the four single steps, both in
/// [`Direction::all`] order. Captures are not mandatory: simple moves stay
/// legal even when a jump is available.
pub fn legal_moves(grid: &Grid, player: Player) -> MoveList {
    let mut moves = MoveList::new();

    for from in Position::all() {
        if !grid[from.row][from.col].belongs_to(player) {
            continue;
        }
        for direction in Direction::all() {
            if let Some(to) = capture_target(grid, player, from, direction) {
                moves.push(Move::between(player, from, to));
            }
        }
        for direction in Direction::all() {
            if let Some(to) = step_target(grid, player, from, direction) {
                moves.push(Move::between(player, from, to));
            }
        }
    }
    moves
}

pub fn has_legal_moves(grid: &Grid, player: Player) -> bool {
    !legal_moves(grid, player).is_empty()
}

/// Number of jumps `player` could make on `grid`.
pub fn count_captures(grid: &Grid, player: Player) -> usize {
    legal_moves(grid, player).iter().filter(|mov| mov.is_capture()).count()
}

/// Landing square of a jump from `from` in `direction`, if the jump is legal.
fn capture_target(grid: &Grid, player: Player, from: Position, direction: Direction) -> Option<Position> {
    let jumped = from.offset(direction, 1)?;
    let landing = from.offset(direction, 2)?;

    if !grid[landing.row][landing.col].is_empty() {
        return None;
    }
    if !grid[jumped.row][jumped.col].belongs_to(player.opponent()) {
        return None;
    }
    if !grid[from.row][from.col].is_king() && !direction.is_forward(player) {
        return None;
    }
    Some(landing)
}

fn step_target(grid: &Grid, player: Player, from: Position, direction: Direction) -> Option<Position> {
    let to = from.offset(direction, 1)?;

    if !grid[to.row][to.col].is_empty() {
        return None;
    }
    if !grid[from.row][from.col].is_king() && !direction.is_forward(player) {
        return None;
    }
    Some(to)
}
