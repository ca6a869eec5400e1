//! Configuration file support.
//!
//! The calculator reads `happiness.toml` from the working directory when it
//! exists. Every key is optional:
//!
//! ```toml
//! entry = "bounded"          # or "keypad" (default)
//! catalog = "age-groups"     # or "standard" (default)
//!
//! # ...or a custom catalog:
//! [catalog.custom]
//! kind = "single"
//! questions = [
//!     { prompt = "How rested are you?", min = 0, max = 10, weight = 0.5 },
//!     { prompt = "How calm are you?", min = 0, max = 10, weight = 0.5 },
//! ]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use happiness_types::{Catalog, CatalogError, EntryMode, Session};
use serde::{Deserialize, Serialize};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "happiness.toml";

/// Which question catalog to use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogChoice {
    /// The fixed five-question catalog.
    #[default]
    Standard,
    /// The Kid / Student / Adult catalog.
    AgeGroups,
    /// A catalog defined inline in the configuration file.
    Custom(Catalog),
}

impl CatalogChoice {
    /// Build the catalog this choice names.
    pub fn build(&self) -> Catalog {
        match self {
            Self::Standard => Catalog::standard(),
            Self::AgeGroups => Catalog::age_groups(),
            Self::Custom(catalog) => catalog.clone(),
        }
    }
}

/// Calculator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How answers are entered.
    pub entry: EntryMode,

    /// Which catalog to ask.
    pub catalog: CatalogChoice,
}

/// Error type for loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

impl Config {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.catalog.build().validate()?;
        Ok(config)
    }

    /// Load configuration from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), entry = %config.entry, "loaded config");
        Ok(config)
    }

    /// Load `happiness.toml` from `dir` if it exists.
    ///
    /// A missing file is not an error; any other read or parse failure is.
    pub fn discover(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        match Self::load(&path) {
            Ok(config) => Ok(Some(config)),
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Build the configured catalog.
    pub fn catalog(&self) -> Catalog {
        self.catalog.build()
    }

    /// Create a fresh session for this configuration.
    pub fn session(&self) -> Session {
        Session::new(self.catalog(), self.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use happiness_types::AgeGroup;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.entry, EntryMode::Keypad);
        assert_eq!(config.catalog(), Catalog::standard());
    }

    #[test]
    fn named_catalog_and_entry() {
        let config = Config::from_toml_str(
            r#"
            entry = "bounded"
            catalog = "age-groups"
            "#,
        )
        .unwrap();
        assert_eq!(config.entry, EntryMode::Bounded);
        assert!(config.catalog().is_grouped());
    }

    #[test]
    fn custom_single_catalog() {
        let config = Config::from_toml_str(
            r#"
            [catalog.custom]
            kind = "single"
            questions = [
                { prompt = "How rested are you?", min = 0, max = 10, weight = 0.5 },
                { prompt = "How calm are you?", min = 0, max = 10, weight = 0.5 },
            ]
            "#,
        )
        .unwrap();
        let catalog = config.catalog();
        let set = catalog.questions(None).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.questions()[0].prompt(), "How rested are you?");
    }

    #[test]
    fn custom_catalog_with_full_i64_range_scores() {
        let config = Config::from_toml_str(
            r#"
            entry = "bounded"

            [catalog.custom]
            kind = "single"
            questions = [
                { prompt = "Anything?", min = -9223372036854775808, max = 9223372036854775807, weight = 1.0 },
            ]
            "#,
        )
        .unwrap();
        let mut session = config.session();
        session.submit_value(0).unwrap();
        assert_eq!(session.score().map(|s| s.value()), Some(5.0));
    }

    #[test]
    fn custom_grouped_catalog() {
        let config = Config::from_toml_str(
            r#"
            [catalog.custom]
            kind = "grouped"

            [catalog.custom.groups]
            Kid = [{ prompt = "Fun?", min = 0, max = 5, weight = 1.0 }]
            Adult = [{ prompt = "Rest?", min = 0, max = 8, weight = 1.0 }]
            "#,
        )
        .unwrap();
        assert_eq!(
            config.catalog().groups(),
            vec![AgeGroup::Kid, AgeGroup::Adult]
        );
    }

    #[test]
    fn unbalanced_custom_catalog_is_rejected() {
        let err = Config::from_toml_str(
            r#"
            [catalog.custom]
            kind = "single"
            questions = [{ prompt = "q", min = 0, max = 10, weight = 0.4 }]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("must sum to 1.0"));
    }

    #[test]
    fn empty_grouped_catalog_is_rejected() {
        let err = Config::from_toml_str(
            r#"
            [catalog.custom]
            kind = "grouped"
            groups = {}
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Catalog(CatalogError::NoGroups)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            Config::from_toml_str("colour = \"red\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn discover_missing_file() {
        let dir = std::env::temp_dir().join("happiness-config-missing");
        assert!(Config::discover(&dir).unwrap().is_none());
    }
}
