use super::Position;

/// Material balance, positive when White is ahead.
///
/// Each piece counts its [`PieceKind::value`](super::PieceKind::value),
/// added for White and subtracted for Black. There are no positional terms,
/// so swapping colors negates the score.
#[must_use]
pub fn evaluate(position: &Position) -> i32 {
    position.pieces().map(|(_, piece)| piece.signed_value()).sum()
}

impl Position {
    /// Shorthand for [`evaluate`].
    #[must_use]
    pub fn material(&self) -> i32 {
        evaluate(self)
    }
}
