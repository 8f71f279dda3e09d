//! Optrix: technical-indicator signal engine for option-side trade decisions.
//!
//! One indicator snapshot goes in, a `BUY_CE` / `BUY_PE` / `HOLD` decision with a
//! confidence comes out. The engine keeps a bounded history of its decisions
//! and a running accuracy counter fed by external outcome reports.

pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod signals;
pub mod store;

pub use error::{EngineError, Result};
pub use signals::engine::SignalEngine;
