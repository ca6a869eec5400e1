//! Kid / Student / Adult questions. Run with: cargo run --example age_groups

use happiness::{Calculator, Catalog, EntryMode};
use happiness_dialoguer_wizard::DialoguerWizard;

fn main() -> anyhow::Result<()> {
    let score = Calculator::new(Catalog::age_groups())
        .entry(EntryMode::Bounded)
        .run(DialoguerWizard::plain())?;
    println!("{score:?}");
    Ok(())
}
