//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_suggest::board::{Piece, PieceKind, PositionBuilder, Side, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square::at(4, 0), Piece::new(Side::White, PieceKind::King))
//!     .piece(Square::at(4, 7), Piece::new(Side::Black, PieceKind::King))
//!     .piece(Square::at(0, 1), Piece::new(Side::White, PieceKind::Pawn))
//!     .build();
//! assert_eq!(position.count(Side::White), 2);
//! ```

use super::{Piece, PieceKind, Position, Side, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A fluent builder for `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    position: Position,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub const fn new() -> Self {
        PositionBuilder {
            position: Position::empty(),
        }
    }

    /// Start from an existing position.
    #[must_use]
    pub const fn from_position(position: Position) -> Self {
        PositionBuilder { position }
    }

    /// Create a builder holding the standard initial setup.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for side in Side::BOTH {
            let back = side.back_rank() as usize;
            let pawns = side.pawn_start_rank() as usize;
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                builder = builder
                    .piece(Square::at(file, back), Piece::new(side, kind))
                    .piece(Square::at(file, pawns), Piece::new(side, PieceKind::Pawn));
            }
        }
        builder
    }

    /// Place a piece, replacing whatever was on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.position.set(square, Some(piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.position.set(square, None);
        self
    }

    #[must_use]
    pub fn build(self) -> Position {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_matches_fen() {
        let built = PositionBuilder::starting_position().build();
        assert_eq!(
            built.to_fen_placement(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }

    #[test]
    fn test_piece_replaces_existing() {
        let sq = Square::at(3, 3);
        let pos = PositionBuilder::new()
            .piece(sq, Piece::new(Side::White, PieceKind::Knight))
            .piece(sq, Piece::new(Side::Black, PieceKind::Bishop))
            .build();
        assert_eq!(
            pos.piece_at(sq),
            Some(Piece::new(Side::Black, PieceKind::Bishop))
        );
        assert_eq!(pos.count(Side::White), 0);
    }

    #[test]
    fn test_clear() {
        let pos = PositionBuilder::starting_position()
            .clear(Square::at(4, 1))
            .build();
        assert!(pos.is_empty(Square::at(4, 1)));
        assert_eq!(pos.count(Side::White), 15);
    }
}
