//! Persistent update-flag storage.
//!
//! Once a check discovers a newer release, that fact must survive process
//! restarts so later runs can skip the network entirely and the UI can keep
//! showing the update affordance. This module provides the capability trait
//! the checker is written against, the state document itself, and the
//! file-backed implementation the CLI uses.
//!
//! ## Storage Format
//!
//! [`FlagFile`] persists the state as a single JSON document
//! (`update_flag.json`) in the application data directory:
//!
//! ```json
//! {
//!   "update_available": true,
//!   "latest_version": [1, 1, 0],
//!   "discovered_at": "2026-08-12T10:03:00Z"
//! }
//! ```
//!
//! The flag and the version travel in one document and are written in one
//! call, so a reader can never observe `update_available = true` without the
//! version that justified it. A missing file reads as the default state,
//! mirroring how the configuration layer treats a missing config file.
//!
//! ## Lifecycle
//!
//! The checker reads the state at the start of every cycle and writes it at
//! most once, on the "newer version discovered" transition. It never clears
//! the flag; resetting after the user has installed the update belongs to the
//! embedding application (the `clear` subcommand in this binary).

use super::data_storage::DataStorage;
use crate::libs::version::Version;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the persisted flag document inside the data directory.
pub const FLAG_FILE_NAME: &str = "update_flag.json";

/// Durable two-key state consulted and written by the update checker.
///
/// `update_available` gates repeated checks; `latest_version` is meaningful
/// only while the flag is set. `discovered_at` records when the transition
/// happened and exists purely for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlagState {
    /// Whether a newer release has already been discovered and announced.
    #[serde(default)]
    pub update_available: bool,

    /// The discovered version, present exactly while the flag is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<Version>,

    /// When the discovery was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovered_at: Option<DateTime<Utc>>,
}

impl FlagState {
    /// Builds the "update discovered" state for `latest`, timestamped now.
    ///
    /// This is the only constructor that sets the flag, which keeps the
    /// flag/version pairing invariant in one place.
    pub fn flagged(latest: Version) -> Self {
        Self {
            update_available: true,
            latest_version: Some(latest),
            discovered_at: Some(Utc::now()),
        }
    }
}

/// Capability interface over the durable flag store.
///
/// The checker takes this as an injected dependency so tests can substitute
/// an in-memory store and assert pre/post state without touching the real
/// data directory.
pub trait FlagStore {
    /// Reads the current state; an absent store reads as the default state.
    fn read(&self) -> Result<FlagState>;

    /// Replaces the stored state with `state` as one logical transition.
    fn write(&mut self, state: &FlagState) -> Result<()>;
}

/// JSON-file-backed [`FlagStore`] used by the CLI.
#[derive(Debug, Clone)]
pub struct FlagFile {
    path: PathBuf,
}

impl FlagFile {
    /// Opens the flag file at its default location in the data directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: DataStorage::new().get_path(FLAG_FILE_NAME)?,
        })
    }

    /// Opens a flag file at an explicit path.
    ///
    /// Embedding applications and tests use this to keep the state wherever
    /// they keep the rest of their data.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FlagStore for FlagFile {
    fn read(&self) -> Result<FlagState> {
        // No file yet means no update has ever been discovered.
        if !self.path.exists() {
            return Ok(FlagState::default());
        }

        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write(&mut self, state: &FlagState) -> Result<()> {
        // The whole document goes out in a single write call; both keys of
        // the transition land together.
        fs::write(&self.path, serde_json::to_string_pretty(state)?)?;
        Ok(())
    }
}
