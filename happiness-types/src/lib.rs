//! Core types for the happiness index calculator.
//!
//! This crate provides the presentation-agnostic pieces:
//! - `QuestionDef`, `QuestionSet` and `Catalog` - The static question data
//! - `Session` - The state machine driving one questionnaire run
//! - `HappinessIndex` and `Classification` - Scoring and the result message
//! - `Frontend` trait - For implementing user interfaces

mod question;
pub use question::{QuestionDef, QuestionSet, WEIGHT_SUM_TOLERANCE};

mod catalog;
pub use catalog::{AgeGroup, Catalog};

mod keypad;
pub use keypad::{KeypadBuffer, MAX_KEYPAD_DIGITS};

mod session;
pub use session::{EntryMode, Phase, Session};

mod score;
pub use score::{HappinessIndex, round2};

mod classification;
pub use classification::{AMAZING_THRESHOLD, Classification, OKAY_THRESHOLD, Tier, classify};

mod error;
pub use error::{CatalogError, SessionError};

mod traits;
pub use traits::{Frontend, FrontendError, run_frontend};
