//! PRISM storage browser.
//!
//! A client-side file browser over a static `storage/` tree described by
//! per-folder `files.json` manifests. Built with Leptos and compiled to
//! WebAssembly.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;
