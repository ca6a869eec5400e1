//! # happiness-dialoguer-wizard
//!
//! Dialoguer wizard front-end for the happiness index calculator.
//!
//! Questions are asked one at a time with a number input that only accepts
//! values inside the question's range, in a classic CLI wizard style.
//!
//! ## Example
//!
//! ```rust,ignore
//! use happiness::{Calculator, Catalog, EntryMode};
//! use happiness_dialoguer_wizard::DialoguerWizard;
//!
//! fn main() -> anyhow::Result<()> {
//!     let score = Calculator::new(Catalog::age_groups())
//!         .entry(EntryMode::Bounded)
//!         .run(DialoguerWizard::new())?;
//!     println!("{score:?}");
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerError, DialoguerWizard};
