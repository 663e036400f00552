//! Board module tests.
//!
//! - `movegen.rs` - per-piece generation rules and ordering
//! - `eval.rs` - material evaluation
//! - `apply.rs` - copy-on-apply behaviour
//! - `search.rs` - alpha-beta and minimax scenarios
//! - `proptest.rs` - property-based tests

mod apply;
mod eval;

use crate::board::{Move, Square};

/// Shorthand for coordinate-notation literals in tests.
pub(super) fn mv(text: &str) -> Move {
    text.parse().expect("valid move literal")
}

pub(super) fn sq(text: &str) -> Square {
    text.parse().expect("valid square literal")
}
