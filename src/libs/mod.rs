//! Core library modules for the upcheck application.
//!
//! Serves as the main entry point for all upcheck library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Update Checking**: Release fetching, version comparison, notification
//! - **Flag Persistence**: Durable pending-update state between runs
//!
//! ## Usage
//!
//! ```rust,no_run
//! use upcheck::libs::flag::{FlagFile, FlagStore};
//!
//! # fn main() -> anyhow::Result<()> {
//! let store = FlagFile::new()?;
//! let state = store.read()?;
//! println!("update pending: {}", state.update_available);
//! # Ok(())
//! # }
//! ```

pub mod checker;
pub mod config;
pub mod data_storage;
pub mod flag;
pub mod messages;
pub mod notify;
pub mod version;
