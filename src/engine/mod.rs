//! Move suggestion front end over the board search.
//!
//! `MoveSuggestionService` is the entry point a user interface calls: it is
//! handed a `Position` and a side and answers with the move to highlight.

mod config;
mod suggest;

pub use config::{ConfigError, Perspective, SuggestConfig, MAX_SEARCH_DEPTH};
pub use suggest::{suggest_move, MoveSuggestionService, SearchReport};
