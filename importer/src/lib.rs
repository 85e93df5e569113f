//! # Antigravity Importer
//!
//! This crate turns image creation events from the brain watcher into
//! copies inside the active project's destination folder.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       Mover Service                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  BrainWatcher ──► ImageEvent ──► ImageImporter ──► Outcome   │
//! │                                      │                       │
//! │                                      ▼                       │
//! │                       destination folder + Notifier          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is absorbed at the importer boundary: a bad event is
//! logged and dropped, and the watcher keeps running.

pub mod config;
pub mod error;
pub mod importer;
pub mod notifier;
pub mod service;
pub mod workspace;

pub use config::{CollisionPolicy, MoverConfig};
pub use error::{ImportError, Result};
pub use importer::{ImageImporter, ImportOutcome};
pub use notifier::{ConsoleNotifier, MemoryNotifier, Notifier};
pub use service::MoverService;
pub use workspace::Workspace;
