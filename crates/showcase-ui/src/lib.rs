#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Showcase design-system Web UI.
//! This crate holds the DOM-free disclosure and theme controllers plus the Yew
//! components that render them in the browser.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

pub use crate::core::config::ShowcaseConfig;
pub use crate::core::disclosure::{DisclosureController, DisclosureOptions, DisclosureRole};
pub use crate::core::theme::{ThemeEnvironment, ThemeMode, ThemePreferenceController};
