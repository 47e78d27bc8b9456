use std::fmt::{Display, Formatter};
use std::ops::Add;

use crate::board::piece_move::Move;
use crate::board::{Board, GameState};
use crate::error::Result;

/// Leaf statistics of the move tree below a position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerftResult {
    pub nodes: u64,
    pub captures: u64,
    pub promotions: u64,
    pub wins: u64,
}

impl Add for PerftResult {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            nodes: self.nodes + rhs.nodes,
            captures: self.captures + rhs.captures,
            promotions: self.promotions + rhs.promotions,
            wins: self.wins + rhs.wins,
        }
    }
}

impl Display for PerftResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Nodes: {}", self.nodes)?;
        writeln!(f, "Captures: {}", self.captures)?;
        writeln!(f, "Promotions: {}", self.promotions)?;
        writeln!(f, "Wins: {}", self.wins)
    }
}

/// Walks every line of play `depth` moves deep. A capture keeps the same
/// player on move, so one ply is one applied move rather than one turn.
/// Finished games are leaves regardless of the remaining depth.
pub fn perft(board: &Board, depth: u32) -> Result<PerftResult> {
    let mut result = PerftResult::default();
    if depth == 0 || board.state().is_over() {
        return Ok(result);
    }
    for mov in board.legal_moves() {
        let promotes = mov.promotes(board.squares());
        let mut child = board.clone();
        let state = child.apply_move(mov)?;

        let subtree = if depth == 1 { move_info(mov, promotes, state) } else { perft(&child, depth - 1)? };
        result = result + subtree;
    }
    Ok(result)
}

/// Leaf count below each root move, in generation order.
pub fn divide(board: &Board, depth: u32) -> Result<Vec<(Move, u64)>> {
    let mut counts = Vec::new();
    for mov in board.legal_moves() {
        let mut child = board.clone();
        child.apply_move(mov)?;
        let nodes = if depth <= 1 { 1 } else { perft(&child, depth - 1)?.nodes };
        counts.push((mov, nodes));
    }
    Ok(counts)
}

fn move_info(mov: Move, promotes: bool, state: GameState) -> PerftResult {
    PerftResult {
        nodes: 1,
        captures: mov.is_capture() as u64,
        promotions: promotes as u64,
        wins: state.is_over() as u64,
    }
}
