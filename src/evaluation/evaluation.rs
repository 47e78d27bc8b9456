use tracing::{debug, trace};

use crate::board::piece::Player;
use crate::board::piece_move::Move;
use crate::board::position::Position;
use crate::board::board::make_move;
use crate::board::{Board, Grid};
use crate::error::{EngineError, Result};
use crate::move_generation::count_captures;

/// Heuristic weights, all applied from the mover's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub man: i32,
    pub king: i32,
    /// Extra value of a man standing in the opponent's half.
    pub advanced_man: i32,
    /// Reward per further jump available after a capture.
    pub chain_capture: i32,
    /// Penalty per jump handed to the opponent by a quiet move.
    pub exposed_capture: i32,
    pub promotion: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            man: 10,
            king: 20,
            advanced_man: 5,
            chain_capture: 20,
            exposed_capture: 30,
            promotion: 20,
        }
    }
}

/// One-ply static evaluator used to pick a move for the computer player.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator {
    weights: Weights,
}

impl Evaluator {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    /// Picks the highest scoring legal move for the player to move. Ties go to
    /// the candidate generated first.
    pub fn best_move(&self, board: &Board) -> Result<Move> {
        if board.state().is_over() {
            return Err(EngineError::InvalidState("the game is already over"));
        }

        let mut best: Option<(Move, i32)> = None;
        for mov in board.legal_moves() {
            let score = self.score_move(board.squares(), mov)?;
            trace!(%mov, score, "scored candidate");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mov, score));
            }
        }

        let (mov, score) = best.ok_or(EngineError::InvalidState("no legal moves to choose from"))?;
        debug!(%mov, score, "selected move");
        Ok(mov)
    }

    /// Scores the position reached by playing `mov` on a copy of `grid`.
    /// Legality is not checked, but both endpoints must lie on the board.
    pub fn score_move(&self, grid: &Grid, mov: Move) -> Result<i32> {
        for end in [mov.from(), mov.to()] {
            Position::new(end.row as i32, end.col as i32)?;
        }
        let mover = mov.player();
        let promotes = mov.promotes(grid);

        let mut after = *grid;
        make_move(&mut after, mov);

        let mut score = self.material(&after, mover);
        if mov.is_capture() {
            score += self.weights.chain_capture * count_captures(&after, mover) as i32;
        } else {
            score -= self.weights.exposed_capture * count_captures(&after, mover.opponent()) as i32;
        }
        if promotes {
            score += self.weights.promotion;
        }
        Ok(score)
    }

    fn material(&self, grid: &Grid, mover: Player) -> i32 {
        let mut eval = 0;
        for position in Position::all() {
            let square = grid[position.row][position.col];
            let Some(owner) = square.player() else {
                continue;
            };
            let value = if square.is_king() {
                self.weights.king
            } else if owner.is_advanced(position.row) {
                self.weights.man + self.weights.advanced_man
            } else {
                self.weights.man
            };
            eval += if owner == mover { value } else { -value };
        }
        eval
    }
}

/// [`Evaluator::best_move`] with the default weights.
pub fn best_move(board: &Board) -> Result<Move> {
    Evaluator::default().best_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(layout: &str, to_move: Player) -> Board {
        Board::from_layout(layout, to_move).unwrap()
    }

    #[test]
    fn prefers_the_only_capture() {
        let board = board(
            "........
             ........
             ........
             ...d....
             ..l.....
             ........
             ......l.
             ........",
            Player::Light,
        );
        let evaluator = Evaluator::default();
        let moves = board.legal_moves();
        let scores: Vec<i32> = moves.iter().map(|mov| evaluator.score_move(board.squares(), *mov).unwrap()).collect();

        assert_eq!(
            moves.as_slice(),
            &[
                Move::new(Player::Light, 4, 2, 2, 4),
                Move::new(Player::Light, 4, 2, 3, 1),
                Move::new(Player::Light, 6, 6, 5, 7),
                Move::new(Player::Light, 6, 6, 5, 5),
            ]
        );
        // Capture: 15 for the advanced man plus 10, nothing left to take.
        // Stepping to (3, 1): 15 + 10 - 10. Moving the back man leaves (4, 2) en prise: 10 + 10 - 10 - 30.
        assert_eq!(scores, vec![25, 15, -20, -20]);
        assert_eq!(evaluator.best_move(&board), Ok(Move::new(Player::Light, 4, 2, 2, 4)));
    }
    #[test]
    fn rewards_capture_chains() {
        let board = board(
            "........
             ........
             ....d...
             ........
             ..d.....
             .l......
             ........
             ........",
            Player::Light,
        );
        let evaluator = Evaluator::default();
        // 15 - 10 material, one more jump from (3, 3) over (2, 4).
        assert_eq!(evaluator.score_move(board.squares(), Move::new(Player::Light, 5, 1, 3, 3)), Ok(25));
        // 10 - 15 - 10 material, no jumps conceded.
        assert_eq!(evaluator.score_move(board.squares(), Move::new(Player::Light, 5, 1, 4, 0)), Ok(-15));
        assert_eq!(best_move(&board), Ok(Move::new(Player::Light, 5, 1, 3, 3)));
    }
    #[test]
    fn rewards_promotion() {
        let board = board(
            "........
             .l......
             ........
             ........
             ........
             ........
             ........
             .......D",
            Player::Light,
        );
        let promotion = Move::new(Player::Light, 1, 1, 0, 0);
        assert_eq!(Evaluator::default().score_move(board.squares(), promotion), Ok(20));

        let no_bonus = Evaluator::new(Weights { promotion: 0, ..Weights::default() });
        assert_eq!(no_bonus.score_move(board.squares(), promotion), Ok(0));
    }
    #[test]
    fn off_board_moves_are_rejected() {
        let board = board(Board::STARTING_LAYOUT, Player::Light);
        let evaluator = Evaluator::default();
        assert_eq!(
            evaluator.score_move(board.squares(), Move::new(Player::Light, 5, 7, 4, 8)),
            Err(EngineError::OutOfBounds { row: 4, col: 8 })
        );
        assert_eq!(
            evaluator.score_move(board.squares(), Move::new(Player::Dark, 9, 1, 10, 2)),
            Err(EngineError::OutOfBounds { row: 9, col: 1 })
        );
    }
    #[test]
    fn ties_keep_the_first_candidate() {
        let board = board(Board::STARTING_LAYOUT, Player::Light);
        let first = board.legal_moves()[0];
        assert_eq!(first, Move::new(Player::Light, 5, 1, 4, 2));
        assert_eq!(best_move(&board), Ok(first));
    }
    #[test]
    fn scoring_does_not_touch_the_board() {
        let board = Board::from_seed(3);
        let before = board.clone();
        best_move(&board).unwrap();
        assert_eq!(board, before);
    }
    #[test]
    fn fails_without_legal_moves() {
        let board = board(
            "........
             ........
             ........
             ........
             ....l...
             ........
             d.......
             .l......",
            Player::Dark,
        );
        assert!(board.legal_moves().is_empty());
        assert!(matches!(best_move(&board), Err(EngineError::InvalidState(_))));
    }
}
