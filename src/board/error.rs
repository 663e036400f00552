//! Error types for board parsing and move application.

use std::fmt;

use super::Square;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string is empty
    Empty,
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Too few files in a rank
    TooFewFiles { rank: usize, files: usize },
    /// Placement field does not describe eight ranks
    WrongRankCount { found: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "FEN string is empty"),
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error returned by `Position::try_apply`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// There is no piece on the origin square
    EmptyOrigin { square: Square },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyError::EmptyOrigin { square } => {
                write!(f, "No piece on origin square {square}")
            }
        }
    }
}

impl std::error::Error for ApplyError {}

/// Error type for the plain-text board format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardTextError {
    /// Board must have exactly 8 non-empty lines
    WrongRowCount { found: usize },
    /// Each row must have exactly 8 tokens
    WrongColumnCount { row: usize, found: usize },
    /// Token is neither `.` nor `<side>_<kind>`
    InvalidToken { row: usize, token: String },
}

impl fmt::Display for BoardTextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardTextError::WrongRowCount { found } => {
                write!(f, "Board must have 8 rows, found {found}")
            }
            BoardTextError::WrongColumnCount { row, found } => {
                write!(f, "Row {row} must have 8 squares, found {found}")
            }
            BoardTextError::InvalidToken { row, token } => {
                write!(f, "Invalid square '{token}' in row {row}")
            }
        }
    }
}

impl std::error::Error for BoardTextError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_wrong_rank_count() {
        let err = FenError::WrongRankCount { found: 7 };
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains('8'));
    }

    #[test]
    fn test_fen_error_invalid_side() {
        let err = FenError::InvalidSideToMove {
            found: "X".to_string(),
        };
        assert!(err.to_string().contains("'X'"));
    }

    #[test]
    fn test_move_error_invalid_length() {
        let err = MoveParseError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_square_error_file_bounds() {
        let err = SquareError::FileOutOfBounds { file: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_apply_error_names_square() {
        let err = ApplyError::EmptyOrigin {
            square: Square::at(4, 1),
        };
        assert!(err.to_string().contains("e2"));
    }

    #[test]
    fn test_board_text_error_token() {
        let err = BoardTextError::InvalidToken {
            row: 2,
            token: "green_pawn".to_string(),
        };
        assert!(err.to_string().contains("green_pawn"));
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn test_error_clone() {
        let err = FenError::InvalidPiece { char: 'x' };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
