//! Board representation, move generation, evaluation and search.
//!
//! Positions are immutable values: applying a move returns a fresh copy, so
//! search branches never see each other's changes.
//!
//! # Example
//! ```
//! use chess_suggest::board::{generate_moves, Position, Side};
//!
//! let position = Position::starting();
//! let moves = generate_moves(&position, Side::White);
//! println!("Starting position has {} moves", moves.len());
//! ```

mod builder;
mod error;
mod eval;
mod fen;
mod movegen;
mod position;
pub mod prelude;
mod search;
mod text;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{ApplyError, BoardTextError, FenError, MoveParseError, SquareError};
pub use eval::evaluate;
pub use fen::parse_fen;
pub use movegen::{generate_moves, generate_piece_moves};
pub use position::Position;
pub use types::{Move, MoveList, Piece, PieceKind, Side, Square};

pub use search::{
    minimax, search, LogLogger, SearchContext, SearchInfo, SearchLogger, SearchResult,
    SearchStats, StdoutLogger, DEFAULT_SEARCH_DEPTH, INFINITY,
};
