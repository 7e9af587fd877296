//! Update check engine.
//!
//! Runs a single check against a release list endpoint: reads the persisted
//! flag, fetches the newest release tag, compares it with the installed
//! version, and on a newer release persists the flag and announces the
//! update through the notifier.
//!
//! The whole check is a total operation. `check_for_updates` never returns
//! an error; every failure is folded into [`CheckResult::Failed`] and logged,
//! so callers can fire a check from startup paths without error plumbing of
//! their own.

use crate::libs::config::CheckerConfig;
use crate::libs::flag::{FlagState, FlagStore};
use crate::libs::notify::UpdateNotifier;
use crate::libs::version::Version;
use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// Ways a single update check can fail.
///
/// Each variant names the stage that failed, so logs and tests can tell a
/// network problem from a bad payload or a version that does not parse.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Network-level failure: DNS, connect, TLS, timeout, or a broken body read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with something other than 200 OK.
    #[error("unexpected response status: {0}")]
    BadResponseStatus(StatusCode),

    /// The body was not the expected JSON release list.
    #[error("malformed release payload: {0}")]
    MalformedPayload(String),

    /// The running binary carries no version to compare against.
    #[error("installed version is unknown")]
    MissingInstalledVersion,

    /// A version string had a component that is not an unsigned integer.
    #[error("malformed version string: {0:?}")]
    MalformedVersion(String),

    /// Latest and installed versions have different numbers of components.
    #[error("version shapes differ: latest {latest} vs installed {installed}")]
    VersionShapeMismatch { latest: Version, installed: Version },

    /// The flag store failed to read or persist state.
    #[error("flag store error: {0}")]
    Store(anyhow::Error),
}

/// Outcome of one update check.
#[derive(Debug)]
pub enum CheckResult {
    /// A previous check already flagged an update; nothing was fetched.
    AlreadyFlagged { latest: Option<Version> },
    /// The newest release is not newer than the installed version.
    NoUpdate,
    /// A newer version was found, persisted, and announced.
    UpdateAvailable(Version),
    /// The check failed; persisted state is unchanged.
    Failed(CheckError),
}

/// The newest element of the release list payload.
///
/// The endpoint returns much more per release; only the tag matters here,
/// and only the first entry of the listing is deserialized this far. Later
/// entries are checked to be JSON objects and otherwise left alone.
#[derive(Deserialize, Debug)]
struct ReleaseRecord {
    tag_name: Option<String>,
}

/// Checks a release list endpoint for a version newer than the installed one.
///
/// The store and notifier are injected, so persistence and announcement
/// stay swappable. Fields are public for the same reason the URL is: a
/// caller wiring up a checker owns its parts.
pub struct UpdateChecker<S: FlagStore, N: UpdateNotifier> {
    pub client: Client,
    pub releases_url: String,
    pub installed_version: Option<String>,
    pub store: S,
    pub notifier: N,
}

impl<S: FlagStore, N: UpdateNotifier> UpdateChecker<S, N> {
    /// Creates a checker with an explicit endpoint and installed version.
    ///
    /// The timeout bounds the whole release list request, connection
    /// included.
    pub fn new(releases_url: impl Into<String>, installed_version: Option<String>, timeout: Duration, store: S, notifier: N) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            releases_url: releases_url.into(),
            installed_version,
            store,
            notifier,
        })
    }

    /// Creates a checker for this binary using its build-time metadata.
    ///
    /// The endpoint defaults to the GitHub releases API for the repository
    /// this application is published from, unless the configuration
    /// overrides it.
    pub fn for_current_app(config: &CheckerConfig, store: S, notifier: N) -> Result<Self> {
        let releases_url = config
            .releases_url
            .clone()
            .unwrap_or_else(|| format!("https://api.github.com/repos/{}/{}/releases", APP_METADATA_OWNER, APP_METADATA_NAME));

        Self::new(
            releases_url,
            Some(APP_METADATA_VERSION.to_string()),
            Duration::from_secs(config.request_timeout),
            store,
            notifier,
        )
    }

    /// Runs one complete update check.
    ///
    /// Reads the persisted flag first; a set flag short-circuits the check
    /// without any network traffic. Otherwise fetches the newest release
    /// tag, compares versions, and on a newer release persists the flag
    /// and notifies once.
    ///
    /// This method never returns an error. Failures become
    /// [`CheckResult::Failed`] and are logged at error level; successful
    /// outcomes are logged at info level.
    pub async fn check_for_updates(&mut self) -> CheckResult {
        let result = match self.run_check().await {
            Ok(result) => result,
            Err(err) => CheckResult::Failed(err),
        };

        match &result {
            CheckResult::AlreadyFlagged { .. } => tracing::info!("update already flagged, check skipped"),
            CheckResult::NoUpdate => tracing::info!("no update available"),
            CheckResult::UpdateAvailable(latest) => tracing::info!("update available: v{}", latest),
            CheckResult::Failed(err) => tracing::error!("update check failed: {}", err),
        }

        result
    }

    async fn run_check(&mut self) -> Result<CheckResult, CheckError> {
        // A set flag ends the check before any network traffic happens.
        let state = self.store.read().map_err(CheckError::Store)?;
        if state.update_available {
            return Ok(CheckResult::AlreadyFlagged {
                latest: state.latest_version,
            });
        }

        let latest_tag = self.fetch_latest_tag().await?;
        let latest = Version::from_tag(&latest_tag).ok_or(CheckError::MalformedVersion(latest_tag))?;

        let installed_raw = self.installed_version.as_deref().ok_or(CheckError::MissingInstalledVersion)?;
        let installed = Version::parse(installed_raw).ok_or_else(|| CheckError::MalformedVersion(installed_raw.to_string()))?;

        // Versions with different shapes are never compared or padded.
        if latest.component_count() != installed.component_count() {
            return Err(CheckError::VersionShapeMismatch { latest, installed });
        }

        if !latest.is_newer_than(&installed) {
            return Ok(CheckResult::NoUpdate);
        }

        // Persist before announcing. The store write carries both keys of
        // the transition in a single document.
        let flagged = FlagState::flagged(latest.clone());
        self.store.write(&flagged).map_err(CheckError::Store)?;
        self.notifier.notify(&latest);

        Ok(CheckResult::UpdateAvailable(latest))
    }

    /// Fetches the release list and returns the newest release's tag.
    ///
    /// The endpoint orders releases newest first, so only the first entry is
    /// read as a release record; the rest of the listing only has to be JSON
    /// objects. An empty list, a non-object entry, or a first release
    /// without a usable tag is a malformed payload.
    async fn fetch_latest_tag(&self) -> Result<String, CheckError> {
        let response = self.client.get(&self.releases_url).header("User-Agent", APP_METADATA_NAME).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CheckError::BadResponseStatus(status));
        }

        // The body is read as text first so a failed read stays a transport
        // error and only JSON problems count as a malformed payload.
        let body = response.text().await?;
        let releases: Vec<serde_json::Value> = serde_json::from_str(&body).map_err(|err| CheckError::MalformedPayload(err.to_string()))?;
        if let Some(position) = releases.iter().position(|entry| !entry.is_object()) {
            return Err(CheckError::MalformedPayload(format!("release list entry {} is not an object", position)));
        }

        let first = releases.first().ok_or_else(|| CheckError::MalformedPayload("release list is empty".to_string()))?;
        let record: ReleaseRecord = serde_json::from_value(first.clone()).map_err(|err| CheckError::MalformedPayload(err.to_string()))?;
        record
            .tag_name
            .ok_or_else(|| CheckError::MalformedPayload("first release has no tag name".to_string()))
    }
}
