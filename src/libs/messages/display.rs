//! Display implementation for upcheck application messages.
//!
//! Provides the `Display` trait implementation for the `Message` enum, turning
//! structured message data into human-readable text for terminal output. All
//! user-facing wording lives here, in one place, so the rest of the code never
//! embeds literal strings.
//!
//! ## Text Formatting Standards
//!
//! - **Sentence Case**: Natural capitalization for readability
//! - **Active Voice**: Clear, direct communication style
//! - **Specific Details**: Include relevant context and parameters
//! - **Action Guidance**: Clear next steps when applicable

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Converts a `Message` enum variant into human-readable text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upcheck::libs::messages::Message;
    ///
    /// // Automatic formatting through Display trait
    /// let message = Message::ConfigSaved;
    /// println!("{}", message); // "Configuration saved successfully"
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === UPDATE CHECK MESSAGES ===
            Message::UpdateAvailable { app_name, latest } => {
                format!(
                    "A new version of {} is available: v{}\nVisit the project releases page to download it.",
                    app_name, latest
                )
            }
            Message::UpdateAlreadyFlagged { latest } => match latest {
                Some(version) => format!("An update to v{} has already been flagged.", version),
                None => "An update has already been flagged.".to_string(),
            },
            Message::NoUpdateAvailable => "No update available. You are using the latest version!".to_string(),
            Message::UpdateCheckFailed(reason) => format!("Update check failed: {}", reason),

            // === STATUS MESSAGES ===
            Message::StatusUpdatePending { latest, discovered_at } => match discovered_at {
                Some(when) => format!("Update pending: v{} (discovered {})", latest, when),
                None => format!("Update pending: v{}", latest),
            },
            Message::StatusUpToDate => "No update pending.".to_string(),

            // === FLAG MESSAGES ===
            Message::UpdateFlagCleared => "Update flag cleared.".to_string(),
            Message::UpdateFlagAlreadyClear => "Update flag was already clear.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleChecker => "Update checker settings".to_string(),

            // === PROMPTS ===
            Message::PromptReleasesUrl => "Releases endpoint URL (leave empty for the default)".to_string(),
            Message::PromptRequestTimeout => "Request timeout (seconds)".to_string(),
        };

        write!(f, "{}", text)
    }
}
