//! Configuration parsing from waymark.toml.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::discover::DEFAULT_EXTENSIONS;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Routing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Directory containing route files (default: "pages"). Must resolve
    /// to an absolute path by the time the server is built.
    #[serde(default = "default_root_dir")]
    pub root_dir: String,

    /// Extensions a route file may have (default: ts, js, jsx, tsx).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Keep serving when zero routes are discovered (default: false).
    /// The empty table is still reported loudly either way.
    #[serde(default = "default_false")]
    pub allow_empty: bool,
}

// Default values
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_root_dir() -> String {
    "pages".to_string()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

fn default_false() -> bool {
    false
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            extensions: default_extensions(),
            allow_empty: default_false(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Loads `waymark.toml` from the working directory, falling back to
    /// defaults when the file does not exist.
    pub fn load_default() -> Result<Self> {
        let path = Path::new("waymark.toml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.routing.root_dir, "pages");
        assert_eq!(config.routing.extensions, vec!["ts", "js", "jsx", "tsx"]);
        assert!(!config.routing.allow_empty);
    }

    #[test]
    fn partial_sections_fill_in() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8080

            [routing]
            root_dir = "/srv/pages"
            extensions = ["md"]
            allow_empty = true
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.routing.root_dir, "/srv/pages");
        assert_eq!(config.routing.extensions, vec!["md"]);
        assert!(config.routing.allow_empty);
    }
}
