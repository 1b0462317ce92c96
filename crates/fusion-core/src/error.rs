//! Error types for the Fusion engine

use thiserror::Error;

/// Result type alias using Fusion Error
pub type Result<T> = std::result::Result<T, Error>;

/// Fusion error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown risk level: {0:?} (expected Low, Medium, or High)")]
    UnknownRiskLevel(String),

    #[error("Invalid risk level {value:?} on OSINT finding {finding:?}")]
    InvalidOsintRisk { finding: String, value: String },

    #[error("Invalid risk level {value:?} on scan result {target}")]
    InvalidScanRisk { target: String, value: String },
}

impl Error {
    /// Get an error code for logging/metrics
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnknownRiskLevel(_) => "UNKNOWN_RISK_LEVEL",
            Error::InvalidOsintRisk { .. } => "INVALID_OSINT_RISK",
            Error::InvalidScanRisk { .. } => "INVALID_SCAN_RISK",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::UnknownRiskLevel("Severe".into()).code(),
            "UNKNOWN_RISK_LEVEL"
        );
        assert_eq!(
            Error::InvalidScanRisk {
                target: "10.0.0.1:22".into(),
                value: "critical".into(),
            }
            .code(),
            "INVALID_SCAN_RISK"
        );
    }

    #[test]
    fn test_error_display_names_the_record() {
        let err = Error::InvalidOsintRisk {
            finding: "admin.example.com".into(),
            value: "Severe".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("admin.example.com"));
        assert!(msg.contains("Severe"));
    }
}
