//! Configuration file handling
//!
//! Single JSON object; every field optional. Missing fields take the
//! defaults below. Command-line overrides are applied before validation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::datagen::GeneratorConfig;
use crate::observability::Severity;

use super::args::SourceArgs;
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Partitions to generate (default 4)
    #[serde(default = "default_node_count")]
    pub node_count: usize,

    /// Users to generate (default 100)
    #[serde(default = "default_num_users")]
    pub num_users: u64,

    /// Orders to generate (default 200)
    #[serde(default = "default_num_orders")]
    pub num_orders: u64,

    /// Generator seed; a random seed is drawn and logged when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Load the store from this snapshot instead of generating it
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Rows printed by `run` (default 10)
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,

    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_node_count() -> usize {
    4
}
fn default_num_users() -> u64 {
    100
}
fn default_num_orders() -> u64 {
    200
}
fn default_preview_rows() -> usize {
    10
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_count: default_node_count(),
            num_users: default_num_users(),
            num_orders: default_num_orders(),
            seed: None,
            data_file: None,
            preview_rows: default_preview_rows(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Builds the effective configuration for a command: the config file
    /// (or defaults) with command-line overrides applied.
    pub fn resolve(source: &SourceArgs) -> CliResult<Self> {
        let mut config = match &source.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(seed) = source.seed {
            config.seed = Some(seed);
        }
        if let Some(data) = &source.data {
            config.data_file = Some(data.clone());
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.node_count == 0 {
            return Err(CliError::config_error("node_count must be > 0"));
        }

        if self.num_orders > 0 && self.num_users == 0 {
            return Err(CliError::config_error(
                "num_users must be > 0 when num_orders > 0",
            ));
        }

        self.log_severity()?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn log_severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| CliError::config_error(format!("Invalid log_level: {}", e)))
    }

    /// Generator parameters
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            node_count: self.node_count,
            num_users: self.num_users,
            num_orders: self.num_orders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("shardplan.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{}");

        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.node_count, 4);
        assert_eq!(config.num_users, 100);
        assert_eq!(config.num_orders, 200);
        assert_eq!(config.preview_rows, 10);
    }

    #[test]
    fn test_load_overrides_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{"node_count": 2, "seed": 9, "preview_rows": 0, "log_level": "warn"}"#,
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.node_count, 2);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.preview_rows, 0);
        assert_eq!(config.log_severity().unwrap(), Severity::Warn);
    }

    #[test]
    fn test_zero_nodes_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"node_count": 0}"#);

        let err = Config::load(&path).unwrap_err();
        assert_eq!(err.code_str(), "SHARD_CLI_CONFIG_ERROR");
        assert!(err.message().contains("node_count"));
    }

    #[test]
    fn test_orders_without_users_rejected() {
        let config = Config {
            num_users: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            num_users: 0,
            num_orders: 0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let config = Config {
            log_level: "loud".into(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"nodes": 3}"#);
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::load(Path::new("/nonexistent/shardplan.json")).unwrap_err();
        assert_eq!(err.code_str(), "SHARD_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_resolve_applies_overrides() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"seed": 1}"#);

        let source = SourceArgs {
            config: Some(path),
            seed: Some(77),
            data: Some(PathBuf::from("store.json")),
        };
        let config = Config::resolve(&source).unwrap();
        assert_eq!(config.seed, Some(77));
        assert_eq!(config.data_file, Some(PathBuf::from("store.json")));
    }

    #[test]
    fn test_resolve_without_file() {
        let config = Config::resolve(&SourceArgs::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_generator_config() {
        let generator = Config::default().generator_config();
        assert_eq!(generator, GeneratorConfig::default());
    }
}
