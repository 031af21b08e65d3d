//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_text`], [`fetch_json`] - Network fetching via the Fetch API
//! - [`log`] - Console diagnostics
//! - [`format`] - Size and item-count labels

pub mod dom;
mod fetch;
pub mod format;
pub mod log;

pub use fetch::{fetch_json, fetch_text};
