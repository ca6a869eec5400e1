use clap::{ArgAction, Parser, ValueEnum};
use happiness::{CatalogChoice, Config, EntryMode};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Entry {
    /// On-screen keypad in a terminal UI
    Keypad,
    /// Bounded number prompts
    Bounded,
}

impl From<Entry> for EntryMode {
    fn from(entry: Entry) -> Self {
        match entry {
            Entry::Keypad => EntryMode::Keypad,
            Entry::Bounded => EntryMode::Bounded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogArg {
    /// Five questions for everybody
    Standard,
    /// Separate questions for kids, students and adults
    AgeGroups,
}

impl From<CatalogArg> for CatalogChoice {
    fn from(catalog: CatalogArg) -> Self {
        match catalog {
            CatalogArg::Standard => CatalogChoice::Standard,
            CatalogArg::AgeGroups => CatalogChoice::AgeGroups,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "happiness")]
#[command(about = "Answer a few questions and get a happiness index from 0 to 10", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./happiness.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How answers are entered
    #[arg(short, long, value_enum)]
    pub entry: Option<Entry>,

    /// Which questions to ask
    #[arg(long, value_enum)]
    pub catalog: Option<CatalogArg>,

    /// Disable colors (bounded prompts only; the keypad TUI ignores it)
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply command-line values on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(entry) = self.entry {
            config.entry = entry.into();
        }
        if let Some(catalog) = self.catalog {
            config.catalog = catalog.into();
        }
        config
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use happiness::Catalog;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("happiness").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_keep_config() {
        let cli = parse(&[]);
        let config = Config {
            entry: EntryMode::Bounded,
            catalog: CatalogChoice::AgeGroups,
        };
        assert_eq!(cli.apply(config.clone()), config);
        assert_eq!(cli.log_filter(), "warn");
        assert!(!cli.plain);
    }

    #[test]
    fn flags_override_config() {
        let cli = parse(&["--entry", "keypad", "--catalog", "age-groups"]);
        let config = Config {
            entry: EntryMode::Bounded,
            catalog: CatalogChoice::Standard,
        };
        let merged = cli.apply(config);
        assert_eq!(merged.entry, EntryMode::Keypad);
        assert_eq!(merged.catalog(), Catalog::age_groups());
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(parse(&["-v"]).log_filter(), "info");
        assert_eq!(parse(&["-vv"]).log_filter(), "debug");
        assert_eq!(parse(&["-vvvv"]).log_filter(), "trace");
    }

    #[test]
    fn config_path_and_plain() {
        let cli = parse(&["--config", "custom.toml", "--plain", "-e", "bounded"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.plain);
        assert_eq!(cli.entry, Some(Entry::Bounded));
    }

    #[test]
    fn plain_help_names_bounded_prompts() {
        use clap::CommandFactory;
        let command = Cli::command();
        let plain = command
            .get_arguments()
            .find(|arg| arg.get_id() == "plain")
            .unwrap();
        let help = plain.get_help().unwrap().to_string();
        assert!(help.contains("bounded prompts only"));
    }

    #[test]
    fn rejects_unknown_catalog() {
        let result = Cli::try_parse_from(["happiness", "--catalog", "teens"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
