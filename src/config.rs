//! Application configuration management.
//!
//! The directory layout is resolved in layers, later layers winning:
//!
//! 1. Built-in defaults (`DATA/trun`, `DATA/hash_unique`, `DATA/active`)
//! 2. TOML config file (`--config FILE`, or `./hashcluster.toml` if present)
//! 3. `HASHCLUSTER_*` environment variables
//! 4. CLI flags
//!
//! Input and output directories are joined onto `data_root`; an absolute
//! directory replaces the root entirely.

use anyhow::{bail, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "hashcluster.toml";

/// Prefix of the environment variables read by [`Config::load`].
pub const ENV_PREFIX: &str = "HASHCLUSTER_";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the other three directories are relative to.
    pub data_root: PathBuf,
    /// Per-item hash files.
    pub input_dir: PathBuf,
    /// Destination for single-member clusters.
    pub unique_dir: PathBuf,
    /// Destination for clusters with two or more members.
    pub active_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("DATA"),
            input_dir: PathBuf::from("trun"),
            unique_dir: PathBuf::from("hash_unique"),
            active_dir: PathBuf::from("active"),
        }
    }
}

/// Fully resolved input and output directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    /// Directory of per-item hash files.
    pub input_dir: PathBuf,
    /// Destination for unique clusters.
    pub unique_dir: PathBuf,
    /// Destination for active clusters.
    pub active_dir: PathBuf,
}

impl Config {
    /// Load the configuration from defaults, the config file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given config file does not exist, or
    /// if the file or environment contain values of the wrong shape.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Config::default()));

        let figment = match config_file {
            Some(path) => {
                if !path.is_file() {
                    bail!("Config file not found: {}", path.display());
                }
                log::debug!("Loading config file {}", path.display());
                figment.merge(Toml::file(path))
            }
            None => figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
        };

        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Extract a configuration from an assembled figment.
    ///
    /// # Errors
    ///
    /// Returns an error describing the offending key if extraction fails.
    pub fn extract(figment: Figment) -> Result<Self> {
        figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))
    }

    /// Apply CLI flags on top of the loaded configuration.
    #[must_use]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(root) = &cli.data_root {
            self.data_root = root.clone();
        }
        if let Some(dir) = &cli.input_dir {
            self.input_dir = dir.clone();
        }
        if let Some(dir) = &cli.unique_dir {
            self.unique_dir = dir.clone();
        }
        if let Some(dir) = &cli.active_dir {
            self.active_dir = dir.clone();
        }
        self
    }

    /// Resolve the three directories against the data root.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout {
            input_dir: self.data_root.join(&self.input_dir),
            unique_dir: self.data_root.join(&self.unique_dir),
            active_dir: self.data_root.join(&self.active_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_layout_matches_data_directory() {
        let layout = Config::default().layout();
        assert_eq!(layout.input_dir, Path::new("DATA").join("trun"));
        assert_eq!(layout.unique_dir, Path::new("DATA").join("hash_unique"));
        assert_eq!(layout.active_dir, Path::new("DATA").join("active"));
    }

    #[test]
    fn test_absolute_dir_replaces_root() {
        let config = Config {
            active_dir: PathBuf::from("/tmp/active"),
            ..Config::default()
        };
        assert_eq!(config.layout().active_dir, PathBuf::from("/tmp/active"));
    }

    #[test]
    fn test_cli_overrides_apply_last() {
        let cli = Cli::try_parse_from(["hashcluster", "--data-root", "/srv", "--unique", "u"])
            .unwrap();
        let config = Config::default().with_overrides(&cli);

        assert_eq!(config.data_root, PathBuf::from("/srv"));
        assert_eq!(config.unique_dir, PathBuf::from("u"));
        assert_eq!(config.input_dir, PathBuf::from("trun"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::string("data_root = \"/var/hashes\""));
        let config = Config::extract(figment).unwrap();

        assert_eq!(config.data_root, PathBuf::from("/var/hashes"));
        assert_eq!(config.active_dir, PathBuf::from("active"));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::string("data_root = [\"a\", \"b\"]"));
        assert!(Config::extract(figment).is_err());
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let result = Config::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(result.is_err());
    }
}
