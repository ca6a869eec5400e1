//! Ratatui keypad front-end for the happiness index calculator.
//!
//! Presents one question at a time on a calculator-style screen with an
//! on-screen keypad. Digits can be typed directly or picked with the arrow
//! keys and Space.

mod backend;

pub use backend::{PadKey, RatatuiError, RatatuiKeypad, Theme};
