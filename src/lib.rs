//! Sigil - technical indicator and trading signal server

pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

// Re-export commonly used types
pub use services::{SignalService, TrackerStore};
pub use types::*;
