//! Rules engine for English draughts.
//!
//! [`Board`] owns the position and applies moves, [`move_generation::legal_moves`]
//! enumerates what a player may do on any grid snapshot, and
//! [`evaluation::Evaluator`] picks a move for a computer opponent with a
//! one-ply static evaluation.
//!
//! ```
//! use checkers_engine::{best_move, Board, GameState};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let mut board = Board::with_rng(&mut rng);
//! let mov = best_move(&board).unwrap();
//! assert_eq!(board.apply_move(mov).unwrap(), GameState::Ongoing);
//! assert_eq!(board.history(), &[mov]);
//! ```

pub mod board;
pub mod error;
pub mod evaluation;
pub mod move_generation;
pub mod perft;

pub use board::piece::{PieceKind, Player, Square};
pub use board::piece_move::Move;
pub use board::position::Position;
pub use board::{Board, GameState, Grid, PieceCounts};
pub use error::{EngineError, Result};
pub use evaluation::{best_move, Evaluator, Weights};
pub use move_generation::{legal_moves, MoveList};
