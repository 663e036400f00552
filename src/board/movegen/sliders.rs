use super::super::{Move, MoveList, Position, Side, Square};

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// Bishop rays first, then rook rays.
pub(crate) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 1),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
];

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    const fn directions(self) -> &'static [(i8, i8)] {
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

impl Position {
    /// Walk each ray until the edge. An enemy piece ends the ray and is
    /// included; a friendly piece ends it and is not.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        side: Side,
        slider: SliderType,
    ) -> MoveList {
        let mut moves = MoveList::new();
        for &(df, dr) in slider.directions() {
            let mut current = from;
            while let Some(to) = current.offset(df, dr) {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(piece) => {
                        if piece.side != side {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
        moves
    }
}
