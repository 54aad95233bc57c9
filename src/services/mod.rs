//! Core services for signal evaluation and tracking.

pub mod signals;

pub use signals::{SignalService, TrackerStore};
