pub mod move_generation;
pub use move_generation::*;
