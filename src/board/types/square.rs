//! Square type and scan order.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, addressed by file (0 = a) and rank (0 = rank 1).
///
/// Squares can only be built in bounds, so every `Square` value is a valid
/// index into a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Create a square from coordinates known to be on the board.
    ///
    /// # Panics
    /// Panics if either coordinate is outside `0..8`.
    #[must_use]
    pub const fn at(file: usize, rank: usize) -> Self {
        assert!(file < 8 && rank < 8, "square coordinates out of range");
        Square {
            file: file as u8,
            rank: rank as u8,
        }
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.file as usize
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.rank as usize
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square::at(idx % 8, idx / 8)
    }

    /// Flip the square vertically (e.g., a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square {
            file: self.file,
            rank: 7 - self.rank,
        }
    }

    /// The square `(df, dr)` away, or `None` past the board edge.
    #[inline]
    #[must_use]
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares in scan order: rank 8 down to rank 1, files a to h
    /// within each rank.
    pub fn scan_order() -> impl Iterator<Item = Square> {
        (0..8usize)
            .rev()
            .flat_map(|rank| (0..8usize).map(move |file| Square::at(file, rank)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file + b'a') as char, self.rank + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    /// Converts `(file, rank)`.
    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square::at(file, rank))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => (b - b'1') as usize,
            _ => return Err(invalid()),
        };
        Ok(Square::at(file, rank))
    }
}
