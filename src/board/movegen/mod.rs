//! Pseudo-legal move generation.
//!
//! A move is produced when it follows the piece's movement pattern and its
//! destination is empty or holds an enemy piece. Nothing is filtered for
//! king safety, and there is no castling, en passant or promotion.
//!
//! Ordering is fixed: squares are visited in scan order (rank 8 down to
//! rank 1, files a to h), and each piece emits its moves in a fixed
//! per-direction order. Search tie-breaking depends on it.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Move, MoveList, PieceKind, Position, Side, Square};

/// Moves to each in-bounds `from + offset` that is empty or an enemy.
fn step_targets(position: &Position, from: Square, side: Side, offsets: &[(i8, i8)]) -> MoveList {
    let mut moves = MoveList::new();
    for &(df, dr) in offsets {
        if let Some(to) = from.offset(df, dr) {
            if position.is_empty(to) || position.is_enemy(to, side) {
                moves.push(Move::new(from, to));
            }
        }
    }
    moves
}

/// All pseudo-legal moves for `side`, in generation order.
#[must_use]
pub fn generate_moves(position: &Position, side: Side) -> MoveList {
    let mut moves = MoveList::new();
    for (from, piece) in position.pieces() {
        if piece.side == side {
            moves.extend_from(position.generate_kind_moves(from, side, piece.kind));
        }
    }
    moves
}

/// Moves of whichever piece stands on `from`; empty if the square is.
#[must_use]
pub fn generate_piece_moves(position: &Position, from: Square) -> MoveList {
    match position.piece_at(from) {
        Some(piece) => position.generate_kind_moves(from, piece.side, piece.kind),
        None => MoveList::new(),
    }
}

impl Position {
    /// Shorthand for [`generate_moves`].
    #[must_use]
    pub fn moves_for(&self, side: Side) -> MoveList {
        generate_moves(self, side)
    }

    fn generate_kind_moves(&self, from: Square, side: Side, kind: PieceKind) -> MoveList {
        match kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, side),
            PieceKind::Knight => self.generate_knight_moves(from, side),
            PieceKind::Bishop => self.generate_slider_moves(from, side, SliderType::Bishop),
            PieceKind::Rook => self.generate_slider_moves(from, side, SliderType::Rook),
            PieceKind::Queen => self.generate_slider_moves(from, side, SliderType::Queen),
            PieceKind::King => self.generate_king_moves(from, side),
        }
    }
}
