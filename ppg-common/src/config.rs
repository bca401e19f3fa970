//! Configuration loading and listen-port resolution

use crate::{Error, Result};
use std::path::PathBuf;

/// Default listen port for the speech analysis service
pub const DEFAULT_PORT: u16 = 5000;

/// Listen-port resolution, priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file (`port` key)
/// 4. Compiled default (fallback)
pub fn resolve_port(cli_arg: Option<u16>, env_var_name: &str, default: u16) -> u16 {
    // Priority 1: Command-line argument
    if let Some(port) = cli_arg {
        return port;
    }

    // Priority 2: Environment variable
    if let Ok(value) = std::env::var(env_var_name) {
        if let Ok(port) = value.parse::<u16>() {
            return port;
        }
        tracing::warn!("Ignoring non-numeric {}={}", env_var_name, value);
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = find_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(port) = config.get("port").and_then(|v| v.as_integer()) {
                    if let Ok(port) = u16::try_from(port) {
                        return port;
                    }
                }
            }
        }
    }

    // Priority 4: Compiled default
    default
}

/// Get configuration file path for the platform
///
/// Linux checks ~/.config/ppg/config.toml then /etc/ppg/config.toml;
/// macOS and Windows use the platform config directory.
fn find_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        let user_config = dirs::config_dir().map(|d| d.join("ppg").join("config.toml"));
        let system_config = PathBuf::from("/etc/ppg/config.toml");

        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config("No config file found".to_string()));
    }

    let path = dirs::config_dir()
        .map(|d| d.join("ppg").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if path.exists() {
        Ok(path)
    } else {
        Err(Error::Config(format!("Config file not found: {:?}", path)))
    }
}
