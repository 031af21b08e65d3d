//! Preview overlay for a single file.
//!
//! The fetch logic lives in [`use_preview`]; [`PreviewOverlay`] is the modal
//! surface and [`PreviewBody`] renders the resolved content.

mod content;
mod hook;
mod overlay;

pub use content::PreviewBody;
pub use hook::{PreviewData, use_preview};
pub use overlay::PreviewOverlay;
