use super::super::{MoveList, Position, Side, Square};
use super::step_targets;

/// King steps, in generation order. No castling.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, 0),
    (1, -1),
];

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, side: Side) -> MoveList {
        step_targets(self, from, side, &KING_OFFSETS)
    }
}
