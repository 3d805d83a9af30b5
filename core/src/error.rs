//! Error types.

use std::path::PathBuf;
use thiserror::Error;

/// Rejected interaction intent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    /// No field parameter card at this index.
    #[error("unknown field parameter #{index} (have {available})")]
    UnknownParam {
        /// Requested index.
        index: usize,
        /// Number of cards.
        available: usize,
    },
    /// No abundance group at this display index.
    #[error("unknown taxon group #{index} (have {available})")]
    UnknownGroup {
        /// Requested index.
        index: usize,
        /// Number of groups.
        available: usize,
    },
    /// No glossary entry at this index.
    #[error("unknown glossary entry #{index} (have {available})")]
    UnknownGlossaryEntry {
        /// Requested index.
        index: usize,
        /// Number of entries.
        available: usize,
    },
}

/// Invalid or unreadable page configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Not valid TOML or wrong shape.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Visibility threshold outside (0, 1].
    #[error("reveal threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),
    /// Counter increment rounds to zero or is negative.
    #[error("counter increment rounds to zero tenths, got {0}")]
    InvalidIncrement(f64),
    /// Counter target is negative or not a number.
    #[error("counter target must be a non-negative number, got {0}")]
    InvalidTarget(f64),
    /// Tick period of zero would spin.
    #[error("counter tick period must be greater than zero")]
    ZeroTickPeriod,
}
