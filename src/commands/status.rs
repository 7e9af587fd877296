//! Update flag status command.
//!
//! Reads the persisted flag and reports whether an update is pending,
//! without touching the network.

use crate::libs::flag::{FlagFile, FlagStore};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;

/// Executes the status command.
pub fn cmd() -> Result<()> {
    let store = FlagFile::new()?;
    let state = store.read()?;

    if state.update_available {
        msg_print!(Message::StatusUpdatePending {
            latest: state.latest_version.map(|version| version.to_string()).unwrap_or_else(|| "unknown".to_string()),
            discovered_at: state.discovered_at.map(|when| when.format("%Y-%m-%d %H:%M UTC").to_string()),
        });
    } else {
        msg_print!(Message::StatusUpToDate);
    }

    Ok(())
}
