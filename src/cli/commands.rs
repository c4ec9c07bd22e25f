//! CLI command implementations
//!
//! `start` loads the configuration, seeds the in-memory store, and hands off
//! to the server loop. `check` validates the same inputs and exits.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::http_server::{ApiServer, HttpServerConfig};
use crate::observability::Logger;
use crate::store::MemoryQuoteStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Path to a JSON array of quote records used to seed the store.
    /// When absent the server starts with an empty collection.
    #[serde(default)]
    pub quotes_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            quotes_path: None,
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

    fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        if let Some(path) = &self.quotes_path {
            if path.trim().is_empty() {
                return Err(CliError::config_error("quotes_path must not be empty"));
            }
        }

        Ok(())
    }
}

/// Parse arguments and dispatch; the entrypoint for main
pub fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Start { config } => start(&config),
        Command::Check { config } => check(&config),
    }
}

/// Seed the store from config, honoring an absent quotes_path
fn seed_store(config: &Config) -> CliResult<MemoryQuoteStore> {
    match &config.quotes_path {
        Some(path) => MemoryQuoteStore::load_from_file(Path::new(path))
            .map_err(|e| CliError::seed_error(e.to_string())),
        None => {
            Logger::warn("SEED_SKIPPED", &[("reason", "no quotes_path configured")]);
            Ok(MemoryQuoteStore::new())
        }
    }
}

/// Start the server and serve until the process exits
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = seed_store(&config)?;

    let server = ApiServer::new(config.server.clone(), Arc::new(store));

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.serve())
        .map_err(|e| CliError::boot_failed(e.to_string()))
}

/// Validate config and seed file, print the quote count, exit
pub fn check(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = seed_store(&config)?;

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to start runtime: {}", e)))?;

    let count = runtime
        .block_on(async {
            use crate::store::DocumentCount;
            store.estimated_document_count().await
        })
        .map_err(|e| CliError::seed_error(e.to_string()))?;

    println!("config ok: {} quotes, serving on {}", count, config.server.socket_addr());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("quotegarden.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_minimal_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "{}");

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 4000);
        assert!(config.quotes_path.is_none());
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"{ "server": { "port": 8080 }, "quotes_path": "./quotes.json" }"#,
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.quotes_path.as_deref(), Some("./quotes.json"));
    }

    #[test]
    fn test_invalid_json_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "{ not json");

        let err = Config::load(&path).unwrap_err();
        assert_eq!(err.code(), &super::super::errors::CliErrorCode::ConfigError);
    }

    #[test]
    fn test_empty_quotes_path_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{ "quotes_path": "  " }"#);

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let err = Config::load(Path::new("/no/such/config.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
