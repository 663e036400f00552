use super::error::FenError;
use super::{Piece, Position, Side, Square};

/// Parse a FEN string into a position and the side to move.
///
/// Only the placement field is required. The side field defaults to White;
/// castling, en passant and move counters are accepted and ignored.
pub fn parse_fen(fen: &str) -> Result<(Position, Side), FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    let Some(placement) = parts.first() else {
        return Err(FenError::Empty);
    };
    let position = parse_placement(placement)?;

    let side = match parts.get(1).copied() {
        None | Some("w") => Side::White,
        Some("b") => Side::Black,
        Some(other) => {
            return Err(FenError::InvalidSideToMove {
                found: other.to_string(),
            })
        }
    };

    Ok((position, side))
}

fn parse_placement(placement: &str) -> Result<Position, FenError> {
    let mut position = Position::empty();
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
            } else {
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                position.set(Square::at(file, 7 - rank_idx), Some(piece));
                file += 1;
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }
        if file < 8 {
            return Err(FenError::TooFewFiles {
                rank: rank_idx,
                files: file,
            });
        }
    }

    Ok(position)
}

impl Position {
    /// Parse the placement (and ignore the rest) of a FEN string.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen).map(|(position, _)| position)
    }

    /// Parse a FEN string, panicking on malformed input. Intended for
    /// literals in tests and benchmarks.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        match Self::try_from_fen(fen) {
            Ok(position) => position,
            Err(e) => panic!("invalid FEN '{fen}': {e}"),
        }
    }

    /// The FEN placement field of this position.
    #[must_use]
    pub fn to_fen_placement(&self) -> String {
        let mut fen = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square::at(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }
        fen
    }
}
