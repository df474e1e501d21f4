//! Core, DOM-free primitives for the showcase components.
pub mod config;
pub mod disclosure;
pub mod ids;
pub mod theme;
