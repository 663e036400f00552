//! Core board types.
//!
//! - `Piece`, `PieceKind` and `Side` - what occupies a square
//! - `Square` - an in-bounds board coordinate
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList};
pub use piece::{Piece, PieceKind, Side};
pub use square::Square;
