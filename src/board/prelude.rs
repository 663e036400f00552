//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_suggest::board::prelude::*;
//!
//! let position = Position::starting();
//! assert!(!generate_moves(&position, Side::White).is_empty());
//! ```

pub use super::{
    evaluate, generate_moves, search, Move, MoveList, Piece, PieceKind, Position,
    PositionBuilder, SearchResult, Side, Square, INFINITY,
};
