#[derive(Debug, Clone)]
pub enum Message {
    // === UPDATE CHECK MESSAGES ===
    UpdateAvailable {
        app_name: String,
        latest: String,
    },
    UpdateAlreadyFlagged {
        latest: Option<String>,
    },
    NoUpdateAvailable,
    UpdateCheckFailed(String), // failure reason

    // === STATUS MESSAGES ===
    StatusUpdatePending {
        latest: String,
        discovered_at: Option<String>,
    },
    StatusUpToDate,

    // === FLAG MESSAGES ===
    UpdateFlagCleared,
    UpdateFlagAlreadyClear,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleChecker,

    // === PROMPTS ===
    PromptReleasesUrl,
    PromptRequestTimeout,
}
