pub mod board;
pub mod engine;

pub use board::{Move, Piece, PieceKind, Position, Side, Square};
pub use engine::{suggest_move, MoveSuggestionService, SuggestConfig};
