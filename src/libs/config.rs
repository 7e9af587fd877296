//! Configuration management system for the upcheck application.
//!
//! Handles the update checker settings, backed by a JSON file in the
//! platform-specific application data directory. Supports both programmatic
//! configuration and an interactive setup wizard.
//!
//! ## Configuration Structure
//!
//! - **Checker Config**: Release endpoint override and request timeout
//!
//! Missing files are not an error. Reading a nonexistent configuration yields
//! the defaults, so the application runs with zero setup.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use upcheck::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Load existing configuration or create default
//! let config = Config::read()?;
//!
//! // Access the checker configuration
//! if let Some(checker) = &config.checker {
//!     println!("Request timeout: {}s", checker.request_timeout);
//! }
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Update checker configuration settings.
///
/// Controls where release metadata is fetched from and how long a check is
/// allowed to run before the request is abandoned.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CheckerConfig {
    /// Overrides the release list endpoint.
    ///
    /// When unset, the checker queries the GitHub releases API for the
    /// repository this binary was built from. Pointing this at another URL
    /// is mainly useful for private mirrors and testing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub releases_url: Option<String>,

    /// Request timeout in seconds for the release list fetch.
    ///
    /// Covers the whole request, connection included. When the timeout
    /// elapses the check fails with a transport error instead of hanging.
    pub request_timeout: u64,
}

/// Top-level application configuration.
///
/// Stored as pretty-printed JSON. Unset modules are omitted from the file
/// entirely so a hand-edited configuration stays minimal.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Update checker settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checker: Option<CheckerConfig>,
}

impl Default for CheckerConfig {
    /// Default checker settings: built-in endpoint, 10 second timeout.
    fn default() -> Self {
        CheckerConfig {
            releases_url: None,
            request_timeout: 10,
        }
    }
}

impl Default for Config {
    /// Creates a default configuration with all modules disabled.
    fn default() -> Self {
        Config { checker: None }
    }
}

impl Config {
    /// Reads configuration from the platform-specific data directory.
    ///
    /// Returns the default configuration if no file exists yet. Returns an
    /// error only when a file is present but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads configuration from an explicit path.
    pub fn read_from(path: &Path) -> Result<Config> {
        // If no configuration file exists, return default configuration
        // This allows the application to run with minimal setup
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration to the platform-specific data directory.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    /// Writes the configuration as pretty-printed JSON to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs an interactive configuration setup wizard.
    ///
    /// Loads the existing configuration so current values appear as prompt
    /// defaults, collects the checker settings, and returns the updated
    /// configuration for saving.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use upcheck::libs::config::Config;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = Config::init()?;
    /// config.save()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn init() -> Result<Self> {
        // Load existing configuration to use as defaults for the setup wizard
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let default = config.checker.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleChecker);

        // An empty URL keeps the built-in releases endpoint
        let releases_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptReleasesUrl.to_string())
            .default(default.releases_url.clone().unwrap_or_default())
            .interact_text()?;

        config.checker = Some(CheckerConfig {
            releases_url: match releases_url.trim() {
                "" => None,
                url => Some(url.to_string()),
            },
            request_timeout: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRequestTimeout.to_string())
                .default(default.request_timeout)
                .interact_text()?,
        });

        Ok(config)
    }
}
