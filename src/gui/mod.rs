//! GUI module

pub mod app;
pub mod clipboard;
pub mod components;
pub mod dialog;
pub mod theme;
pub mod views;

// Re-export for convenience
pub use app::{AppFlags, ClipFetchApp, Message};
