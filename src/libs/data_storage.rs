//! Platform-specific application data directory resolution.
//!
//! All durable state (configuration, the update flag) lives under one
//! per-user directory following OS conventions:
//!
//! - **Windows**: `%LOCALAPPDATA%\upcheck-app\upcheck`
//! - **macOS**: `~/Library/Application Support/upcheck-app/upcheck`
//! - **Linux**: `~/.local/share/upcheck-app/upcheck`
//!
//! Setting `UPCHECK_DATA_DIR` relocates the whole directory, which is how
//! sandboxed environments and tests keep state out of the real home.

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "upcheck-app";
pub const APP_NAME: &str = "upcheck";

/// Environment variable overriding the resolved data directory.
pub const DATA_DIR_ENV: &str = "UPCHECK_DATA_DIR";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        if let Ok(explicit) = var(DATA_DIR_ENV) {
            return Self { base_path: PathBuf::from(explicit) };
        }

        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    /// Resolves `file_name` inside the data directory, creating the
    /// directory on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
