use super::super::{MoveList, Position, Side, Square};
use super::step_targets;

/// Knight jumps, in generation order.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
];

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, side: Side) -> MoveList {
        step_targets(self, from, side, &KNIGHT_OFFSETS)
    }
}
