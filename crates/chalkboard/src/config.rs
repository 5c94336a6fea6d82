//! Optional TOML configuration file (chalkboard.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct MenuConfig {
    /// Path to the menu YAML document
    #[serde(default = "default_menu_path")]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    /// Path of the generated HTML page
    #[serde(default = "default_output")]
    pub output: String,

    /// Minify the inline stylesheet
    #[serde(default = "default_minify")]
    pub minify: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            path: default_menu_path(),
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            minify: default_minify(),
        }
    }
}

fn default_menu_path() -> String {
    "menu/menu.yml".to_string()
}
fn default_output() -> String {
    "dist/index.html".to_string()
}
fn default_minify() -> bool {
    true
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
