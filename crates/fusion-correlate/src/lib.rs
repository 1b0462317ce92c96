//! Fusion Correlate - Correlation engine for recon data fusion
//!
//! This crate decides, for every (OSINT finding, scan result) pair,
//! whether the passive observation is corroborated by live network
//! evidence:
//! - Scores each pair with four fixed, additive signal rules
//! - Keeps pairs above the reporting threshold
//! - Derives a combined worst-case risk rating per pair
//!
//! Renderers and exporters consume the resulting `CorrelationRecord`s;
//! they are outside this crate.

pub mod correlator;
pub mod summary;

pub use correlator::{correlate, rank_by_score, CorrelationRecord, SCORE_THRESHOLD};
pub use summary::CorrelationSummary;
