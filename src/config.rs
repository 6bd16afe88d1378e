use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".wowchunksrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_api_file")]
    pub api_file: String,
    #[serde(default = "default_framexml_file")]
    pub framexml_file: String,
    #[serde(default = "default_widget_file", alias = "widgetsFile")]
    pub widget_file: String,
    #[serde(default = "default_events_file")]
    pub events_file: String,
}

fn default_api_file() -> String {
    "raw_api".to_string()
}

fn default_framexml_file() -> String {
    "raw_framexml".to_string()
}

fn default_widget_file() -> String {
    "raw_widget".to_string()
}

fn default_events_file() -> String {
    "raw_events".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_file: default_api_file(),
            framexml_file: default_framexml_file(),
            widget_file: default_widget_file(),
            events_file: default_events_file(),
        }
    }
}

impl Config {
    /// Resolve an input file name against the root directory.
    ///
    /// Absolute names are returned unchanged.
    pub fn resolve(root: &Path, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Result of loading configuration, including whether it came from a file.
pub struct ConfigResult {
    pub config: Config,
    pub from_file: bool,
}

/// Load `.wowchunksrc.json` from `root`, falling back to defaults when absent.
pub fn load_config(root: &Path) -> Result<ConfigResult> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(ConfigResult {
            config: Config::default(),
            from_file: false,
        });
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

    Ok(ConfigResult {
        config,
        from_file: true,
    })
}
