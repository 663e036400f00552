//! Plain-text board dump.
//!
//! Eight lines, rank 8 first. Each line holds eight space-separated tokens:
//! `.` for an empty square or `<side>_<kind>` such as `white_knight`.
//!
//! ```text
//! black_rook black_knight black_bishop black_queen black_king black_bishop black_knight black_rook
//! black_pawn black_pawn black_pawn black_pawn black_pawn black_pawn black_pawn black_pawn
//! . . . . . . . .
//! ...
//! ```

use super::error::BoardTextError;
use super::{Piece, PieceKind, Position, Side, Square};

fn parse_token(token: &str, row: usize) -> Result<Option<Piece>, BoardTextError> {
    if token == "." {
        return Ok(None);
    }
    let invalid = || BoardTextError::InvalidToken {
        row,
        token: token.to_string(),
    };
    let (side, kind) = token.split_once('_').ok_or_else(invalid)?;
    let side = match side {
        "white" => Side::White,
        "black" => Side::Black,
        _ => return Err(invalid()),
    };
    let kind = PieceKind::from_name(kind).ok_or_else(invalid)?;
    Ok(Some(Piece::new(side, kind)))
}

impl Position {
    /// Render the board text format, one newline-terminated line per rank.
    #[must_use]
    pub fn to_board_text(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            let row: Vec<String> = (0..8)
                .map(|file| match self.piece_at(Square::at(file, rank)) {
                    Some(piece) => piece.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            out.push_str(&row.join(" "));
            out.push('\n');
        }
        out
    }

    /// Parse the board text format. Blank lines are ignored.
    pub fn from_board_text(text: &str) -> Result<Self, BoardTextError> {
        let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        if rows.len() != 8 {
            return Err(BoardTextError::WrongRowCount { found: rows.len() });
        }

        let mut position = Position::empty();
        for (row, line) in rows.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 8 {
                return Err(BoardTextError::WrongColumnCount {
                    row,
                    found: tokens.len(),
                });
            }
            for (file, token) in tokens.iter().enumerate() {
                position.set(Square::at(file, 7 - row), parse_token(token, row)?);
            }
        }
        Ok(position)
    }
}
