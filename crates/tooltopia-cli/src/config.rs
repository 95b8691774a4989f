//! User configuration (`config.toml`)
//!
//! Lookup order: the `--config` flag, then `TOOLTOPIA_CONFIG`, then
//! `<config_dir>/tooltopia/config.toml`. The first two name a file that
//! must exist. The default location is optional.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tooltopia_catalog::DEFAULT_POPULAR_LIMIT;

use crate::error::{CliError, Result};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "TOOLTOPIA_CONFIG";

fn default_popular_limit() -> usize {
    DEFAULT_POPULAR_LIMIT
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// When to emit ANSI colours
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Apply to the `colored` crate. `Auto` keeps its own terminal detection.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Default size of the popular list
    #[serde(default = "default_popular_limit")]
    pub popular_limit: usize,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            popular_limit: default_popular_limit(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub color: ColorMode,

    /// Log filter used when `RUST_LOG` is unset (e.g., "warn", "tooltopia_tools=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogSection,

    #[serde(default)]
    pub output: OutputSection,
}

impl Config {
    /// Parse TOML content; `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::config(path, e.message()))
    }

    /// Load configuration. `explicit` comes from `--config` or
    /// `TOOLTOPIA_CONFIG` (clap merges the two).
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let content = std::fs::read_to_string(path)
                .map_err(|e| CliError::config(path, format!("cannot read file ({e})")))?;
            tracing::debug!(path = %path.display(), "Loaded config");
            return Self::parse(&content, path);
        }

        let Some(path) = default_path() else {
            return Ok(Self::default());
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                Self::parse(&content, &path)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(CliError::config(&path, format!("cannot read file ({e})"))),
        }
    }
}

/// `<config_dir>/tooltopia/config.toml`, when the platform has a config dir
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tooltopia").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_parse_empty_gives_defaults() {
        let config = Config::parse("", Path::new("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.catalog.popular_limit, 8);
        assert_eq!(config.output.log_level, "warn");
    }

    #[test]
    fn test_parse_full() {
        let content = r#"
[catalog]
popular_limit = 3

[output]
color = "never"
log_level = "debug"
"#;
        let config = Config::parse(content, Path::new("config.toml")).unwrap();
        assert_eq!(config.catalog.popular_limit, 3);
        assert_eq!(config.output.color, ColorMode::Never);
        assert_eq!(config.output.log_level, "debug");
    }

    #[test]
    fn test_parse_rejects_bad_color() {
        let err = Config::parse("[output]\ncolor = \"rainbow\"\n", Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
        assert!(err.to_string().starts_with("Config error in c.toml"));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[catalog]\npopular_limit = 5").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.catalog.popular_limit, 5);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(CliError::Config { .. })
        ));
    }
}
