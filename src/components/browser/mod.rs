//! Storage browser UI components.
//!
//! Components:
//! - [`StorageBrowser`] - Main browser view
//! - [`CardGrid`] - File and folder cards for the current folder
//! - [`PreviewOverlay`] - Modal preview of a single file

#[allow(clippy::module_inception)]
mod browser;
mod card_grid;
mod header;
mod pathbar;
mod preview;

pub use browser::StorageBrowser;
pub use card_grid::CardGrid;
pub use header::Header;
pub use pathbar::PathBar;
pub use preview::PreviewOverlay;
