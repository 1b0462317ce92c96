//! Fusion Common - Shared utilities for the Fusion crates
//!
//! Currently this is logging setup; downstream binaries and integration
//! tests call `init_logging` before touching the engine.

pub mod logging;

pub use logging::{init_logging, init_logging_with, LogFormat};
