//! `povgen.toml` loading.
//!
//! Every key is optional; a missing file or section falls back to the
//! defaults below.

use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// File looked for in the working directory by [`Config::discover`].
pub const CONFIG_FILE: &str = "povgen.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("parsing {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub log: LogConfig,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load `./povgen.toml` when it exists, else the defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        Self::discover_in(".")
    }

    pub fn discover_in(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = dir.as_ref().join(CONFIG_FILE);

        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

///
/// GeneratorConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub output: PathBuf,
    pub indent: String,
    pub divider_width: usize,
    pub wrap_width: usize,
    pub check_syntax: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("classes.rs"),
            indent: "    ".to_string(),
            divider_width: 80,
            wrap_width: 77,
            check_syntax: true,
        }
    }
}

///
/// LogConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// An `EnvFilter` directive, e.g. `info` or `povgen_build=debug`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = Config::parse(
            r#"
            [generator]
            divider_width = 100
            indent = "\t"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.generator.divider_width, 100);
        assert_eq!(config.generator.indent, "\t");
        assert_eq!(config.generator.wrap_width, 77);
        assert!(config.generator.check_syntax);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::parse("[generator]\ndivider = 3\n").is_err());
        assert!(Config::parse("[render]\nwidth = 3\n").is_err());
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(Config::parse("[generator]\ncheck_syntax = \"yes\"\n").is_err());
    }

    #[test]
    fn load_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[generator\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));

        let missing = Config::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }

    #[test]
    fn discover_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::discover_in(dir.path()).unwrap(), Config::default());

        fs::write(
            dir.path().join(CONFIG_FILE),
            "[generator]\noutput = \"out/gen.rs\"\n",
        )
        .unwrap();
        let config = Config::discover_in(dir.path()).unwrap();
        assert_eq!(config.generator.output, PathBuf::from("out/gen.rs"));
    }
}
