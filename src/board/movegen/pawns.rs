use super::super::{Move, MoveList, Position, Side, Square};

impl Position {
    /// Single push, double push from the start rank, then diagonal captures
    /// toward the a-file side and the h-file side. No en passant and no
    /// promotion: a pawn on the last rank has nothing to do.
    pub(crate) fn generate_pawn_moves(&self, from: Square, side: Side) -> MoveList {
        let mut moves = MoveList::new();
        let dir = side.pawn_direction();

        if let Some(one) = from.offset(0, dir) {
            if self.is_empty(one) {
                moves.push(Move::new(from, one));
                if from.rank() == side.pawn_start_rank() as usize {
                    if let Some(two) = one.offset(0, dir) {
                        if self.is_empty(two) {
                            moves.push(Move::new(from, two));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(to) = from.offset(df, dir) {
                if self.is_enemy(to, side) {
                    moves.push(Move::new(from, to));
                }
            }
        }

        moves
    }
}
