//! # Antigravity Watcher
//!
//! This crate watches the Antigravity brain directory for newly created
//! screenshots and forwards them to the importer as events.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      Brain Watcher                         │
//! ├────────────────────────────────────────────────────────────┤
//! │  WatchConfig ──► BrainWatcher ──► ImageEvent (channel)     │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only creation events whose path matches the configured image
//! extensions are forwarded; everything else the platform watcher
//! reports is dropped at the source.

pub mod config;
pub mod error;
pub mod event;
pub mod watcher;

pub use config::WatchConfig;
pub use error::{Result, WatcherError};
pub use event::{FileEventKind, ImageEvent};
pub use watcher::BrainWatcher;
