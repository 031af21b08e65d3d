//! Core logic for the storage browser.
//!
//! This module provides:
//! - [`Navigator`] and [`ListingState`] for generation-checked navigation
//! - [`load_listing`] and [`load_preview`] for fetch-and-resolve flows
//! - [`error`] types shared by the fetch layer

mod browser;
pub mod error;
mod preview;

pub use browser::{Card, FileCard, ListingState, NavRequest, Navigator, build_cards, load_listing};
pub use preview::{PreviewContent, PreviewTarget, load_preview};
