//! Fusion Core - Record types for OSINT/scan correlation
//!
//! This crate provides the data model shared across the Fusion engine:
//! - `OsintFinding`: A passively collected intelligence item
//! - `ScanResult`: An actively observed network service
//! - `RiskLevel`, `FindingKind`, `FindingCategory`: Core enums
//! - `Error`/`Result`: Error taxonomy

pub mod error;
pub mod osint;
pub mod risk;
pub mod scan;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use osint::{FindingCategory, FindingKind, OsintFinding};
pub use risk::RiskLevel;
pub use scan::ScanResult;
