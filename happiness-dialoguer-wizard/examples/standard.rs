//! Fixed question list with bounded number input. Run with: cargo run --example standard

use happiness::{Calculator, Catalog, EntryMode};
use happiness_dialoguer_wizard::DialoguerWizard;

fn main() -> anyhow::Result<()> {
    let score = Calculator::new(Catalog::standard())
        .entry(EntryMode::Bounded)
        .run(DialoguerWizard::new())?;
    if let Some(score) = score {
        println!("Final happiness index: {score}");
    }
    Ok(())
}
