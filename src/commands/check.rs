//! Update check command.
//!
//! Runs one check against the configured release endpoint and reports the
//! outcome. When a newer version is found the persistent flag is set and
//! the console notifier prints the update banner, so this command only adds
//! output for the other outcomes.

use crate::libs::checker::{CheckResult, UpdateChecker};
use crate::libs::config::Config;
use crate::libs::flag::FlagFile;
use crate::libs::messages::Message;
use crate::libs::notify::ConsoleNotifier;
use crate::{msg_error, msg_info};
use anyhow::Result;

/// Executes the update check command.
///
/// Check failures are reported on the console rather than propagated. The
/// command itself fails only when the local environment is broken, for
/// example when the data directory cannot be created.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?.checker.unwrap_or_default();
    let store = FlagFile::new()?;
    let mut checker = UpdateChecker::for_current_app(&config, store, ConsoleNotifier)?;

    match checker.check_for_updates().await {
        CheckResult::AlreadyFlagged { latest } => {
            msg_info!(Message::UpdateAlreadyFlagged {
                latest: latest.map(|version| version.to_string()),
            });
        }
        CheckResult::NoUpdate => {
            msg_info!(Message::NoUpdateAvailable);
        }
        CheckResult::UpdateAvailable(_) => {
            // The notifier already printed the banner.
        }
        CheckResult::Failed(err) => {
            msg_error!(Message::UpdateCheckFailed(err.to_string()));
        }
    }

    Ok(())
}
