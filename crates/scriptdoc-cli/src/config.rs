//! Settings file and the command-line flags that override it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use scriptdoc::RuleSources;
use serde::Deserialize;
use thiserror::Error;

/// Settings file read when `--config` is not given.
const DEFAULT_SETTINGS: &str = "settings.toml";
const DEFAULT_RULES: &str = "statements";
const DEFAULT_OUTPUT: &str = "output";

/// Contents of a `settings.toml` file.
///
/// ```toml
/// game_path = "/games/Europa Universalis IV"
/// game = "eu4"
/// rules = "statements"
/// output = "output"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub game_path: Option<PathBuf>,
    pub game: Option<String>,
    pub rules: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Errors in the run configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read settings file '{path}'")]
    #[diagnostic(code(scriptdoc::config::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file '{path}'")]
    #[diagnostic(code(scriptdoc::config::parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no {field} configured")]
    #[diagnostic(
        code(scriptdoc::config::missing),
        help("set `{field}` in settings.toml or pass --{flag}")
    )]
    Missing {
        field: &'static str,
        flag: &'static str,
    },
}

impl Settings {
    /// Parses settings from TOML text.
    pub fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads a settings file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Overrides every field that is also given as a flag.
    pub fn merge(self, args: &SourceArgs) -> Self {
        Settings {
            game_path: args.game_path.clone().or(self.game_path),
            game: args.game.clone().or(self.game),
            rules: args.rules.clone().or(self.rules),
            output: self.output,
        }
    }

    /// Where to load rule tables from.
    pub fn rule_sources(&self) -> Result<RuleSources, ConfigError> {
        let game_dir = self.game_path.clone().ok_or(ConfigError::Missing {
            field: "game_path",
            flag: "game-path",
        })?;
        let game = self.game.clone().ok_or(ConfigError::Missing {
            field: "game",
            flag: "game",
        })?;
        let rules_dir = self
            .rules
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RULES));
        Ok(RuleSources::builder()
            .rules_dir(rules_dir)
            .game_dir(game_dir)
            .game(game.to_lowercase())
            .build())
    }

    /// Directory rendered documents are written to.
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}

/// Flags that locate the game and the rule files.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SourceArgs {
    /// Settings file (TOML); defaults to ./settings.toml when present
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Root of the game installation
    #[arg(long, env = "SCRIPTDOC_GAME_PATH")]
    pub game_path: Option<PathBuf>,

    /// Game identifier selecting the rule set (e.g. eu4)
    #[arg(long)]
    pub game: Option<String>,

    /// Directory containing the statement rules
    #[arg(long)]
    pub rules: Option<PathBuf>,
}

impl SourceArgs {
    /// Reads the settings file, if any, and applies the flags on top.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let file = match &self.config {
            Some(path) => Settings::load(path)?,
            None if Path::new(DEFAULT_SETTINGS).is_file() => {
                Settings::load(Path::new(DEFAULT_SETTINGS))?
            }
            None => Settings::default(),
        };
        Ok(file.merge(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_values() {
        let file = Settings::parse(
            Path::new("settings.toml"),
            "game_path = \"/games/eu4\"\ngame = \"EU4\"\n",
        )
        .unwrap();
        let args = SourceArgs {
            game: Some("hoi4".to_string()),
            ..SourceArgs::default()
        };
        let merged = file.merge(&args);
        assert_eq!(merged.game.as_deref(), Some("hoi4"));
        assert_eq!(merged.game_path, Some(PathBuf::from("/games/eu4")));
    }

    #[test]
    fn missing_game_path_is_reported() {
        let settings = Settings {
            game: Some("eu4".to_string()),
            ..Settings::default()
        };
        let error = settings.rule_sources().unwrap_err();
        assert_eq!(error.to_string(), "no game_path configured");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = Settings::parse(Path::new("settings.toml"), "path = \"/games\"\n");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn game_is_lower_cased() {
        let settings = Settings {
            game_path: Some(PathBuf::from("/games/eu4")),
            game: Some("EU4".to_string()),
            ..Settings::default()
        };
        let sources = settings.rule_sources().unwrap();
        assert_eq!(sources.game(), "eu4");
        assert_eq!(sources.rules_dir(), Path::new("statements"));
    }
}
