use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for bump-version.
///
/// Everything is optional on disk; a missing configuration file yields the
/// built-in defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Repository owner used in the clipboard install command
    #[serde(default = "default_account")]
    pub account: String,

    /// Git remote that receives the pushed commits and tags
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Path to the package manifest
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Package manager used for the packaging script and install command
    #[serde(default = "default_package_manager")]
    pub package_manager: String,
}

fn default_account() -> String {
    "rogerpence".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_manifest() -> String {
    "package.json".to_string()
}

fn default_package_manager() -> String {
    "pnpm".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            account: default_account(),
            remote: default_remote(),
            manifest: default_manifest(),
            package_manager: default_package_manager(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumpversion.toml` in current directory
/// 3. `.bumpversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./bumpversion.toml").exists() {
        fs::read_to_string("./bumpversion.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".bumpversion.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
