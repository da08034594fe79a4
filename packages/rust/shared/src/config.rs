//! Application configuration for ProfileKit.
//!
//! User config lives at `~/.profilekit/profilekit.toml`.
//! CLI flags override config file values, which override defaults.
//! The static profile content (`[profile]`) is opaque data — ProfileKit
//! never interprets it beyond the project/record join at merge time.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ProfileKitError, Result};
use crate::types::ProfileDocument;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "profilekit.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".profilekit";

// ---------------------------------------------------------------------------
// Config structs (matching profilekit.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scrape stage settings.
    #[serde(default)]
    pub scrape: ScrapeConfig,

    /// File handoff paths.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Static profile content merged into the final document.
    #[serde(default)]
    pub profile: ProfileDocument,
}

/// `[scrape]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Project site URLs to fetch, in order.
    #[serde(default = "default_urls")]
    pub urls: Vec<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            urls: default_urls(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_urls() -> Vec<String> {
    vec![
        "https://jmellolicsw.com/".into(),
        "https://locococostacos.com/".into(),
        "https://www.slip14.com/".into(),
        "https://acousineaulicsw.com/".into(),
    ]
}
fn default_timeout_secs() -> u64 {
    10
}

/// `[paths]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Intermediate file written by `scrape`, read by `merge`.
    #[serde(default = "default_records_file")]
    pub records_file: PathBuf,

    /// Final combined document written by `merge`.
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            records_file: default_records_file(),
            output_file: default_output_file(),
        }
    }
}

fn default_records_file() -> PathBuf {
    PathBuf::from("project_data.json")
}
fn default_output_file() -> PathBuf {
    PathBuf::from("personal_data.json")
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.profilekit/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ProfileKitError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.profilekit/profilekit.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ProfileKitError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        ProfileKitError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| ProfileKitError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| ProfileKitError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ProfileKitError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Check that the scrape stage has at least one URL to work with.
pub fn validate_scrape_config(config: &AppConfig) -> Result<()> {
    if config.scrape.urls.is_empty() {
        return Err(ProfileKitError::config(
            "no scrape URLs configured. Add entries under [scrape] urls in profilekit.toml.",
        ));
    }
    Ok(())
}
