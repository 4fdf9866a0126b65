//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.scout/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScoutConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cities: Vec<CityEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_city: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
}

/// One option of the city selector. `value` goes on the wire, `label` is
/// what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CityEntry {
    pub value: String,
    pub label: Option<String>,
}

impl CityEntry {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
        }
    }

    /// Explicit label, or the value with its first letter upper-cased.
    pub fn display_label(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        let mut chars = self.value.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Cities the stock backend accepts.
pub const DEFAULT_CITIES: &[&str] = &["jaipur", "mumbai", "delhi", "bangalore", "gurgaon"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub server_url: String,
    pub cities: Vec<CityEntry>,
    pub default_city: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.scout/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".scout").join("config.toml"))
}

/// Load config from `~/.scout/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ScoutConfig::default()`.
pub fn load_config() -> Result<ScoutConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ScoutConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`] but for an explicit path.
pub fn load_config_from(path: &Path) -> Result<ScoutConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ScoutConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ScoutConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Scout Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_city = "jaipur"              # Or set SCOUT_CITY / pass --city

# [server]
# base_url = "http://127.0.0.1:5000"   # Or set SCOUT_SERVER_URL / pass --server

# Replaces the built-in list when present.
# [[cities]]
# value = "jaipur"
# label = "Jaipur"

# [[cities]]
# value = "pune"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &ScoutConfig,
    cli_server: Option<&str>,
    cli_city: Option<&str>,
) -> ResolvedConfig {
    resolve_with_env(config, cli_server, cli_city, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &ScoutConfig,
    cli_server: Option<&str>,
    cli_city: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Server: CLI → env → config → default
    let server_url = cli_server
        .map(|s| s.to_string())
        .or_else(|| env("SCOUT_SERVER_URL"))
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

    let mut cities = if config.cities.is_empty() {
        DEFAULT_CITIES.iter().map(|c| CityEntry::new(*c)).collect()
    } else {
        config.cities.clone()
    };

    // City: CLI → env → config → first option
    let default_city = cli_city
        .map(|s| s.to_string())
        .or_else(|| env("SCOUT_CITY"))
        .or_else(|| config.general.default_city.clone())
        .or_else(|| cities.first().map(|c| c.value.clone()))
        .unwrap_or_default();

    // Unknown cities are passed through as-is, not rejected
    if !cities.iter().any(|c| c.value == default_city) {
        debug!("Adding {:?} to city list", default_city);
        cities.push(CityEntry::new(default_city.clone()));
    }

    ResolvedConfig {
        server_url,
        cities,
        default_city,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = ScoutConfig::default();
        assert!(config.cities.is_empty());
        assert!(config.server.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&ScoutConfig::default(), None, None, no_env);
        assert_eq!(resolved.server_url, DEFAULT_SERVER_URL);
        assert_eq!(resolved.cities.len(), DEFAULT_CITIES.len());
        assert_eq!(resolved.default_city, "jaipur");
    }

    #[test]
    fn test_resolve_precedence() {
        let config = ScoutConfig {
            server: ServerConfig {
                base_url: Some("http://from-file".to_string()),
            },
            general: GeneralConfig {
                default_city: Some("mumbai".to_string()),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "SCOUT_SERVER_URL" => Some("http://from-env".to_string()),
            "SCOUT_CITY" => Some("delhi".to_string()),
            _ => None,
        };

        let from_env = resolve_with_env(&config, None, None, env);
        assert_eq!(from_env.server_url, "http://from-env");
        assert_eq!(from_env.default_city, "delhi");

        let from_cli = resolve_with_env(&config, Some("http://from-cli"), Some("gurgaon"), env);
        assert_eq!(from_cli.server_url, "http://from-cli");
        assert_eq!(from_cli.default_city, "gurgaon");

        let from_file = resolve_with_env(&config, None, None, no_env);
        assert_eq!(from_file.server_url, "http://from-file");
        assert_eq!(from_file.default_city, "mumbai");
    }

    #[test]
    fn test_unknown_city_is_appended_not_rejected() {
        let resolved = resolve_with_env(&ScoutConfig::default(), None, Some("Pune"), no_env);
        assert_eq!(resolved.default_city, "Pune");
        assert_eq!(resolved.cities.last(), Some(&CityEntry::new("Pune")));
        assert_eq!(resolved.cities.len(), DEFAULT_CITIES.len() + 1);
    }

    #[test]
    fn test_configured_cities_replace_builtin_list() {
        let toml_str = r#"
[general]
default_city = "pune"

[server]
base_url = "http://192.168.1.10:5000"

[[cities]]
value = "pune"
label = "Pune (MH)"

[[cities]]
value = "goa"
"#;
        let config: ScoutConfig = toml::from_str(toml_str).unwrap();
        let resolved = resolve_with_env(&config, None, None, no_env);
        assert_eq!(resolved.server_url, "http://192.168.1.10:5000");
        assert_eq!(resolved.cities.len(), 2);
        assert_eq!(resolved.cities[0].display_label(), "Pune (MH)");
        assert_eq!(resolved.cities[1].display_label(), "Goa");
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[server]
base_url = "http://localhost:8080"
"#;
        let config: ScoutConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.base_url.as_deref(), Some("http://localhost:8080"));
        assert!(config.general.default_city.is_none());
        assert!(config.cities.is_empty());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("scout-config-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[server\nbase_url = 1").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = std::env::temp_dir().join(format!("scout-gen-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.cities.is_empty());
        assert!(path.exists());

        // The generated file is all comments, so it parses to defaults
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.server.base_url.is_none());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_display_label_capitalizes_value() {
        assert_eq!(CityEntry::new("bangalore").display_label(), "Bangalore");
        assert_eq!(CityEntry::new("").display_label(), "");
    }
}
