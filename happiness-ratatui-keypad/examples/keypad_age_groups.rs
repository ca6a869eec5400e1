//! The Kid / Student / Adult catalog on the keypad TUI, with a custom theme.
//!
//! Run with: cargo run -p happiness-ratatui-keypad --example keypad_age_groups

use happiness::{Calculator, Catalog};
use happiness_ratatui_keypad::{RatatuiKeypad, Theme};
use ratatui::style::Color;

fn main() -> anyhow::Result<()> {
    let theme = Theme {
        primary: Color::Magenta,
        highlight: Color::LightYellow,
        ..Theme::default()
    };
    let frontend = RatatuiKeypad::new()
        .with_title("How happy are you?")
        .with_theme(theme);

    if let Some(score) = Calculator::new(Catalog::age_groups()).run(frontend)? {
        println!("{}  Happiness Index: {score}", score.classification().emoji);
    }

    Ok(())
}
