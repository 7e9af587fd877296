//! Update announcement sinks.

use crate::libs::messages::Message;
use crate::libs::version::Version;
use crate::msg_info;
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// Receives the one-shot announcement that an update was found.
///
/// The checker calls this exactly once per flag transition, right after the
/// new state is persisted. Implementations decide how the news reaches the
/// user.
pub trait UpdateNotifier {
    fn notify(&mut self, latest: &Version);
}

/// Prints the update banner to the console.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl UpdateNotifier for ConsoleNotifier {
    fn notify(&mut self, latest: &Version) {
        msg_info!(
            Message::UpdateAvailable {
                app_name: APP_METADATA_NAME.to_string(),
                latest: latest.to_string(),
            },
            true
        );
    }
}
