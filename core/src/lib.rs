//! # diebra-core
//!
//! Headless interaction model for the Diebra stream monitoring page.
//!
//! The page itself is mostly static copy. What is left once the markup is
//! stripped away lives here, independent of any UI toolkit:
//!
//! - [`disclosure`] - single-open (glossary) and multi-open (table) toggles
//! - [`abundance`] - taxon groups, stable descending sort, row derivation
//! - [`visibility`] - one-shot threshold reveal over a pluggable observer
//! - [`counter`] - delayed interval score counter with cancellable timers
//! - [`session`] - root composition state: overlays, intents, snapshots
//! - [`fixtures`] - compiled-in campaign data
//! - [`config`] - TOML page configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! // requires the `testing` feature
//! use diebra_core::testing::ManualClock;
//! use diebra_core::{Intent, Overlay, PageConfig, PageSession};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut session = PageSession::new(&PageConfig::default(), clock.clone()).unwrap();
//!
//! session.dispatch(Intent::OpenResults).unwrap();
//! assert_eq!(session.snapshot().overlay, Overlay::Results);
//!
//! clock.advance(Duration::from_secs(3));
//! assert_eq!(session.snapshot().score.to_string(), "8.5");
//! ```
//!
//! Timers and visibility watchers are modelled as RAII [`CancelHandle`]s:
//! whoever owns the handle owns the timer, and dropping it cancels.

#![warn(missing_docs)]

pub mod abundance;
pub mod config;
pub mod counter;
pub mod disclosure;
pub mod error;
pub mod fixtures;
pub mod scheduler;
pub mod score;
pub mod session;
pub mod visibility;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use abundance::{AbundanceRow, AbundanceTable, TaxonGroup, TaxonItem};
pub use config::PageConfig;
pub use counter::{CounterConfig, CounterPhase, ScoreCounter};
pub use disclosure::{MultiOpen, SingleOpen};
pub use error::{ConfigError, PageError};
pub use scheduler::{CancelHandle, Scheduler};
pub use score::Score;
pub use session::{Intent, Overlay, PageSession, PageView};
pub use visibility::{RevealTrigger, Threshold, VisibilityObserver};
