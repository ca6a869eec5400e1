use anyhow::{Context, Result};
use clap::Parser;
use happiness::{Calculator, Config, EntryMode, HappinessIndex};
use happiness_dialoguer_wizard::DialoguerWizard;
use happiness_ratatui_keypad::RatatuiKeypad;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.apply(load_config(&cli)?);
    tracing::info!(entry = %config.entry, "starting calculator");

    let calculator = Calculator::from_config(&config);
    let result = match config.entry {
        EntryMode::Bounded => {
            let wizard = if cli.plain {
                DialoguerWizard::plain()
            } else {
                DialoguerWizard::new()
            };
            calculator.run(wizard)
        }
        EntryMode::Keypad => calculator.run(RatatuiKeypad::new()),
    };

    match result {
        Ok(Some(score)) => println!("{}", result_line(score)),
        Ok(None) => tracing::info!("no calculation completed"),
        Err(err) if err.is_cancelled() => eprintln!("{err}"),
        Err(err) => return Err(err).context("Calculator failed"),
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(path) = &cli.config {
        return Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = Config::discover(&cwd).context("Failed to load config")?;
    Ok(config.unwrap_or_default())
}

fn result_line(score: HappinessIndex) -> String {
    let class = score.classification();
    format!("{} Happiness Index: {score} - {}", class.emoji, class.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use happiness::{Catalog, ScriptedFrontend};

    #[test]
    fn result_line_format() {
        let score = Calculator::new(Catalog::standard())
            .run(
                ScriptedFrontend::new()
                    .keypad_answer("13000")
                    .keypad_answer("5")
                    .keypad_answer("7")
                    .keypad_answer("6")
                    .keypad_answer("8"),
            )
            .unwrap()
            .unwrap();
        assert_eq!(
            result_line(score),
            "🙂 Happiness Index: 5.48 / 10 - You're doing okay!"
        );
    }
}
