//! The standard five-question calculator on the keypad TUI.
//!
//! Run with: cargo run -p happiness-ratatui-keypad --example keypad

use happiness::{Calculator, Catalog};
use happiness_ratatui_keypad::RatatuiKeypad;

fn main() -> anyhow::Result<()> {
    let frontend = RatatuiKeypad::new();

    match Calculator::new(Catalog::standard()).run(frontend)? {
        Some(score) => {
            let class = score.classification();
            println!("{}  Happiness Index: {score}", class.emoji);
            println!("   {}", class.message);
        }
        None => println!("No calculation finished."),
    }

    Ok(())
}
