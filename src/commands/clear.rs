//! Update flag reset command.
//!
//! Clears the persisted update flag so the next check fetches the release
//! list again. Useful after installing the new version by hand.

use crate::libs::flag::{FlagFile, FlagState, FlagStore};
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use anyhow::Result;

/// Executes the clear command.
pub fn cmd() -> Result<()> {
    let mut store = FlagFile::new()?;
    let state = store.read()?;

    if !state.update_available {
        msg_warning!(Message::UpdateFlagAlreadyClear);
        return Ok(());
    }

    store.write(&FlagState::default())?;
    msg_success!(Message::UpdateFlagCleared);
    Ok(())
}
