//! # Upcheck - Application Update Checker
//!
//! A command-line utility that checks a release feed for a newer version
//! of the application and remembers the answer between runs.
//!
//! ## Features
//!
//! - **Update Checking**: Single-shot check against a GitHub-style release list
//! - **Durable Flag**: A found update is persisted until explicitly cleared
//! - **Version Comparison**: Strict component-wise comparison of dotted versions
//! - **Configuration**: Optional endpoint override and request timeout
//!
//! ## Usage
//!
//! ```rust,no_run
//! use upcheck::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
