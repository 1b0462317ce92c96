//! Risk levels shared by OSINT findings and scan results

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Risk rating assigned upstream to a finding or scan result
///
/// The ordering follows the declaration order, so `Ord` comparisons and
/// `max` pick the worse of two ratings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskLevel {
    /// Low risk, informational exposure
    Low,
    /// Medium risk, worth triage
    Medium,
    /// High risk, prioritize for remediation
    High,
}

impl RiskLevel {
    /// Get numeric weight for distance/comparison (Low=1, Medium=2, High=3)
    pub fn as_number(&self) -> u8 {
        match self {
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
        }
    }

    /// Get display string
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Absolute distance between two ratings in risk tiers
    pub fn distance(self, other: RiskLevel) -> u8 {
        self.as_number().abs_diff(other.as_number())
    }

    /// Combine two ratings by taking the worse one, never averaging
    pub fn combined(self, other: RiskLevel) -> RiskLevel {
        self.max(other)
    }
}

impl FromStr for RiskLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(RiskLevel::Low),
            "Medium" => Ok(RiskLevel::Medium),
            "High" => Ok(RiskLevel::High),
            other => Err(Error::UnknownRiskLevel(other.to_string())),
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
