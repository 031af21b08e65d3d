//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`browser`] - Storage browser: cards, path bar, preview overlay
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;
pub mod router;

pub use router::AppRouter;
