//! # happiness
//!
//! A short questionnaire that turns a handful of numeric answers into a
//! happiness index on a 0-10 scale. Front-end agnostic.
//!
//! ## Usage
//!
//! ```rust
//! use happiness::{Calculator, Catalog, EntryMode, ScriptedFrontend};
//!
//! let score = Calculator::new(Catalog::age_groups())
//!     .entry(EntryMode::Bounded)
//!     .run(
//!         ScriptedFrontend::new()
//!             .select_group(happiness::AgeGroup::Kid)
//!             .value(3)
//!             .value(10)
//!             .value(12)
//!             .value(6),
//!     )
//!     .unwrap();
//!
//! assert_eq!(score.map(|s| s.value()), Some(8.75));
//! ```
//!
//! ## Front-ends
//!
//! Front-ends are separate crates that implement `Frontend`:
//! - `happiness-ratatui-keypad` - TUI with an on-screen keypad
//! - `happiness-dialoguer-wizard` - CLI prompts with bounded number input
//!
//! `ScriptedFrontend` in this crate replays gestures without user
//! interaction.

// Re-export all types from happiness-types
pub use happiness_types::*;

pub mod config;
pub use config::{CatalogChoice, Config, ConfigError};

// Scripted front-end for running sessions without user interaction
mod scripted;
pub use scripted::{ScriptError, ScriptedFrontend, Step, Transcript};

/// Entry point pairing a catalog with an entry mode.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    catalog: Catalog,
    entry: EntryMode,
}

impl Calculator {
    /// Create a calculator for `catalog` with keypad entry.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            entry: EntryMode::default(),
        }
    }

    /// Create a calculator from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.catalog()).entry(config.entry)
    }

    /// Set the entry mode.
    pub fn entry(mut self, entry: EntryMode) -> Self {
        self.entry = entry;
        self
    }

    /// Create a fresh session.
    pub fn session(&self) -> Session {
        Session::new(self.catalog.clone(), self.entry)
    }

    /// Run a fresh session on `frontend` and return the last score.
    pub fn run<F: Frontend>(self, frontend: F) -> Result<Option<HappinessIndex>, FrontendError> {
        let mut session = self.session();
        run_frontend(&frontend, &mut session)
    }
}
