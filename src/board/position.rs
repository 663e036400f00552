use std::fmt;

use once_cell::sync::Lazy;

use super::builder::PositionBuilder;
use super::error::ApplyError;
use super::{Move, Piece, Side, Square};

static STARTING_POSITION: Lazy<Position> =
    Lazy::new(|| PositionBuilder::starting_position().build());

/// An immutable snapshot of all 64 squares.
///
/// A square holds at most one piece. Nothing is assumed about kings or
/// check. Operations that change the board return a new `Position`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    squares: [Option<Piece>; 64],
}

impl Position {
    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Position {
            squares: [None; 64],
        }
    }

    /// The standard initial setup.
    #[must_use]
    pub fn starting() -> Self {
        *STARTING_POSITION
    }

    /// Build from a grid indexed `[rank][file]`, rank 0 being White's back
    /// rank.
    #[must_use]
    pub fn from_grid(grid: [[Option<Piece>; 8]; 8]) -> Self {
        let mut squares = [None; 64];
        for (rank, row) in grid.iter().enumerate() {
            for (file, piece) in row.iter().enumerate() {
                squares[rank * 8 + file] = *piece;
            }
        }
        Position { squares }
    }

    /// The grid view, indexed `[rank][file]`.
    #[must_use]
    pub fn to_grid(&self) -> [[Option<Piece>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for (idx, piece) in self.squares.iter().enumerate() {
            grid[idx / 8][idx % 8] = *piece;
        }
        grid
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// True if `square` holds a piece of the other side.
    #[inline]
    #[must_use]
    pub fn is_enemy(&self, square: Square, side: Side) -> bool {
        matches!(self.piece_at(square), Some(p) if p.side != side)
    }

    /// Occupied squares in scan order (rank 8 first, files a to h).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::scan_order().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Number of pieces owned by `side`.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|p| p.side == side)
            .count()
    }

    /// Play `mv` on a copy of this position.
    ///
    /// Whatever stands on the destination is replaced. The receiver is never
    /// modified.
    ///
    /// # Panics
    /// Panics if the origin square is empty.
    #[must_use]
    pub fn apply(&self, mv: Move) -> Position {
        match self.try_apply(mv) {
            Ok(next) => next,
            Err(e) => panic!("cannot apply {mv}: {e}"),
        }
    }

    /// Like [`Position::apply`], reporting an empty origin as an error.
    pub fn try_apply(&self, mv: Move) -> Result<Position, ApplyError> {
        let piece = self.piece_at(mv.from()).ok_or(ApplyError::EmptyOrigin {
            square: mv.from(),
        })?;
        let mut next = *self;
        next.squares[mv.from().index()] = None;
        next.squares[mv.to().index()] = Some(piece);
        Ok(next)
    }

    /// Mirror the board top to bottom and hand every piece to the other side.
    #[must_use]
    pub fn swap_colors(&self) -> Position {
        let mut swapped = Position::empty();
        for (sq, piece) in self.pieces() {
            swapped.squares[sq.flip_vertical().index()] = Some(piece.recolored());
        }
        swapped
    }

    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_fen_placement())
    }
}

/// Prints the board text format.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_board_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    #[test]
    fn test_starting_position_counts() {
        let pos = Position::starting();
        assert_eq!(pos.count(Side::White), 16);
        assert_eq!(pos.count(Side::Black), 16);
        assert_eq!(
            pos.piece_at(Square::at(4, 0)),
            Some(Piece::new(Side::White, PieceKind::King))
        );
        assert_eq!(
            pos.piece_at(Square::at(3, 7)),
            Some(Piece::new(Side::Black, PieceKind::Queen))
        );
    }

    #[test]
    fn test_apply_moves_piece_and_captures() {
        let pos = PositionBuilder::new()
            .piece(Square::at(0, 0), Piece::new(Side::White, PieceKind::Rook))
            .piece(Square::at(0, 6), Piece::new(Side::Black, PieceKind::Pawn))
            .build();
        let next = pos.apply("a1a7".parse().unwrap());
        assert!(next.is_empty(Square::at(0, 0)));
        assert_eq!(
            next.piece_at(Square::at(0, 6)),
            Some(Piece::new(Side::White, PieceKind::Rook))
        );
        assert_eq!(next.count(Side::Black), 0);
    }

    #[test]
    fn test_try_apply_empty_origin() {
        let pos = Position::empty();
        let err = pos.try_apply("e2e4".parse().unwrap()).unwrap_err();
        assert_eq!(
            err,
            ApplyError::EmptyOrigin {
                square: Square::at(4, 1)
            }
        );
    }

    #[test]
    #[should_panic(expected = "cannot apply e2e4")]
    fn test_apply_empty_origin_panics() {
        let _ = Position::empty().apply("e2e4".parse().unwrap());
    }

    #[test]
    fn test_grid_roundtrip() {
        let pos = Position::starting();
        assert_eq!(Position::from_grid(pos.to_grid()), pos);
    }

    #[test]
    fn test_swap_colors_of_start_is_start() {
        let pos = Position::starting();
        assert_eq!(pos.swap_colors(), pos);
    }

    #[test]
    fn test_pieces_follow_scan_order() {
        let first = Position::starting().pieces().next().unwrap();
        assert_eq!(first.0.to_string(), "a8");
        assert_eq!(first.1, Piece::new(Side::Black, PieceKind::Rook));
    }
}
