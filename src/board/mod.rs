pub mod board;
pub mod direction;
pub mod piece;
pub mod piece_move;
pub mod position;
pub use board::*;
