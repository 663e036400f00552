//! Suggestion settings.
//!
//! Settings are changed by name, the way a UCI `setoption` command would,
//! so front ends can forward user-supplied `name=value` pairs unchanged.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::DEFAULT_SEARCH_DEPTH;

/// Deepest search the options accept.
pub const MAX_SEARCH_DEPTH: u32 = 8;

/// Which score the root of a suggestion search pushes up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Perspective {
    /// The root always maximizes the White-positive material score,
    /// whichever side is to move.
    #[default]
    FixedWhite,
    /// The root maximizes for White and minimizes for Black.
    SideToMove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SuggestConfig {
    pub depth: u32,
    /// Use alpha-beta; `false` falls back to full-width minimax
    pub pruning: bool,
    pub perspective: Perspective,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            depth: DEFAULT_SEARCH_DEPTH,
            pruning: true,
            perspective: Perspective::FixedWhite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No option with this name
    UnknownOption { name: String },
    /// Option needs a value but none was given
    MissingValue { name: String },
    /// Value could not be parsed for this option
    InvalidValue { name: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            ConfigError::MissingValue { name } => write!(f, "Option '{name}' needs a value"),
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl SuggestConfig {
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth.min(MAX_SEARCH_DEPTH);
        self
    }

    /// Set an option by name. Names are case-insensitive.
    ///
    /// - `depth`: `0..=MAX_SEARCH_DEPTH`, larger values are clamped
    /// - `pruning`: `true` or `false`
    /// - `perspective`: `white` or `side`
    pub fn apply_option(&mut self, name: &str, value: Option<&str>) -> Result<(), ConfigError> {
        let normalized = name.trim().to_ascii_lowercase();
        let value = value.map(str::trim).ok_or_else(|| ConfigError::MissingValue {
            name: normalized.clone(),
        })?;
        let invalid = || ConfigError::InvalidValue {
            name: normalized.clone(),
            value: value.to_string(),
        };

        match normalized.as_str() {
            "depth" => {
                let depth = value.parse::<u32>().map_err(|_| invalid())?;
                if depth > MAX_SEARCH_DEPTH {
                    log::warn!("depth {depth} clamped to {MAX_SEARCH_DEPTH}");
                }
                self.depth = depth.min(MAX_SEARCH_DEPTH);
            }
            "pruning" => {
                self.pruning = match value.to_ascii_lowercase().as_str() {
                    "true" | "on" => true,
                    "false" | "off" => false,
                    _ => return Err(invalid()),
                };
            }
            "perspective" => {
                self.perspective = match value.to_ascii_lowercase().as_str() {
                    "white" => Perspective::FixedWhite,
                    "side" => Perspective::SideToMove,
                    _ => return Err(invalid()),
                };
            }
            _ => {
                return Err(ConfigError::UnknownOption {
                    name: normalized.clone(),
                })
            }
        }
        Ok(())
    }

    /// Apply a `name=value` pair.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), ConfigError> {
        match assignment.split_once('=') {
            Some((name, value)) => self.apply_option(name, Some(value)),
            None => self.apply_option(assignment, None),
        }
    }
}
