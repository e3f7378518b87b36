//! Configuration resolution for fnd-ui
//!
//! Multi-tier resolution with CLI → environment → TOML → default
//! priority. The CLI and environment tiers arrive together through clap
//! (env fallthrough); the TOML tier reads `~/.config/fnd/fnd-ui.toml`.

use std::path::PathBuf;

use fnd_common::{Error, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::client::DEFAULT_BACKEND_URL;

/// Default listen port for the widget service.
pub const DEFAULT_PORT: u16 = 5731;

/// Optional settings from the TOML config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub backend_url: Option<String>,
    pub port: Option<u16>,
}

/// Effective configuration after resolution.
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub backend_url: String,
    pub port: u16,
}

/// Platform config file location (`~/.config/fnd/fnd-ui.toml` on Linux).
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fnd").join("fnd-ui.toml"))
}

/// Load the TOML tier; a missing file is not an error.
pub fn load_toml_config() -> Result<TomlConfig> {
    let Some(path) = config_file_path() else {
        return Ok(TomlConfig::default());
    };
    if !path.exists() {
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("Read TOML failed: {}", e)))?;
    toml::from_str(&content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
}

/// Resolve the effective configuration from CLI/env values and the TOML
/// tier. Logs which tier supplied each setting.
pub fn resolve(cli_backend_url: Option<String>, cli_port: Option<u16>) -> Result<UiConfig> {
    let toml_config = match load_toml_config() {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring unreadable config file: {}", e);
            TomlConfig::default()
        }
    };
    Ok(resolve_with(toml_config, cli_backend_url, cli_port))
}

/// Pure resolution step, separated for testing.
pub fn resolve_with(
    toml_config: TomlConfig,
    cli_backend_url: Option<String>,
    cli_port: Option<u16>,
) -> UiConfig {
    let (backend_url, source) = match (cli_backend_url, toml_config.backend_url) {
        (Some(url), _) => (url, "command line / environment"),
        (None, Some(url)) => (url, "TOML config"),
        (None, None) => (DEFAULT_BACKEND_URL.to_string(), "default"),
    };
    info!("Backend endpoint loaded from {}: {}", source, backend_url);

    let (port, source) = match (cli_port, toml_config.port) {
        (Some(port), _) => (port, "command line / environment"),
        (None, Some(port)) => (port, "TOML config"),
        (None, None) => (DEFAULT_PORT, "default"),
    };
    info!("Listen port loaded from {}: {}", source, port);

    UiConfig { backend_url, port }
}
