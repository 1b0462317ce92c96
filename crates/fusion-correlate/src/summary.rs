//! Aggregate statistics over a correlation run

use crate::correlator::CorrelationRecord;
use fusion_core::RiskLevel;
use serde::Serialize;

/// Counts and extremes over a set of correlation records
///
/// Feeds report headers and dashboard counters; it never re-scores or
/// reorders the records it summarizes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CorrelationSummary {
    /// Total records
    pub total: usize,
    /// Records rated High combined risk
    pub high: usize,
    /// Records rated Medium combined risk
    pub medium: usize,
    /// Records rated Low combined risk
    pub low: usize,
    /// Highest score seen, 0.0 when empty
    pub max_score: f64,
}

impl CorrelationSummary {
    /// Summarize a correlation run
    pub fn from_records(records: &[CorrelationRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };

        for record in records {
            match record.combined_risk {
                RiskLevel::High => summary.high += 1,
                RiskLevel::Medium => summary.medium += 1,
                RiskLevel::Low => summary.low += 1,
            }
            if record.score > summary.max_score {
                summary.max_score = record.score;
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlator::correlate;
    use fusion_core::{FindingCategory, FindingKind, OsintFinding, ScanResult};

    #[test]
    fn test_empty_summary() {
        let summary = CorrelationSummary::from_records(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.max_score, 0.0);
    }

    #[test]
    fn test_counts_by_combined_risk() {
        let findings = vec![
            OsintFinding::new("example.com", FindingKind::Domain, "DNS Record")
                .with_value("192.168.1.10")
                .with_risk("Low")
                .with_category(FindingCategory::Infrastructure),
            OsintFinding::new("example.com", FindingKind::Subdomain, "admin.example.com")
                .with_value("192.168.1.15")
                .with_risk("Medium"),
        ];
        let scans = vec![
            ScanResult::new("192.168.1.10", 80, "HTTP").with_risk("Low"),
            ScanResult::new("192.168.1.15", 3306, "MySQL").with_risk("High"),
        ];

        let records = correlate(&findings, &scans).unwrap();
        let summary = CorrelationSummary::from_records(&records);

        // DNS Record x HTTP (Low) and admin subdomain x MySQL (High)
        assert_eq!(summary.total, 2);
        assert_eq!(summary.low, 1);
        assert_eq!(summary.medium, 0);
        assert_eq!(summary.high, 1);
        assert_eq!(summary.max_score, 1.5);
    }
}
