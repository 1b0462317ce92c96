//! Correlation engine matching OSINT findings against network scan results
//!
//! For every (finding, scan) pair, four independent signal rules are
//! evaluated in a fixed order and their weights accumulated. Pairs whose
//! accumulated score strictly exceeds `SCORE_THRESHOLD` become
//! `CorrelationRecord`s, emitted in enumeration order (findings outer,
//! scans inner), so identical inputs always produce identical output.

use fusion_core::{
    Error, FindingCategory, FindingKind, OsintFinding, Result, RiskLevel, ScanResult,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Score contribution when a finding's value equals the scanned IP
pub const WEIGHT_IP_MATCH: f64 = 0.8;
/// Score contribution when a technology fingerprint appears in the scanned version string
pub const WEIGHT_TECHNOLOGY_MATCH: f64 = 0.9;
/// Score contribution when the two risk ratings are at most one tier apart
pub const WEIGHT_RISK_PROXIMITY: f64 = 0.3;
/// Score contribution when an Infrastructure finding meets a web service
pub const WEIGHT_INFRASTRUCTURE_SERVICE: f64 = 0.4;

/// Minimum accumulated score (exclusive) for a pair to be reported
///
/// High enough that risk proximity alone (0.3) never qualifies, low
/// enough that any single strong signal does.
pub const SCORE_THRESHOLD: f64 = 0.5;

/// Reason recorded when `finding.value` equals `scan.ip`
pub const REASON_IP_MATCH: &str = "Direct IP match";
/// Reason recorded when the technology label is a substring of the version
pub const REASON_TECHNOLOGY_MATCH: &str = "Technology version match";
/// Reason recorded when the risk ratings are within one tier
pub const REASON_RISK_PROXIMITY: &str = "Similar risk levels";
/// Reason recorded when an Infrastructure finding meets HTTP/HTTPS
pub const REASON_INFRASTRUCTURE_SERVICE: &str = "Infrastructure service match";

/// One corroborated (OSINT finding, scan result) pair
///
/// Pure function of the two inputs; records carry no identity of their
/// own and are rebuilt on every run. Consumers may re-sort or group
/// them but should not re-score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationRecord {
    /// Label of the matched OSINT finding
    pub osint_finding: String,
    /// Kind of the matched OSINT finding
    pub osint_kind: FindingKind,
    /// Risk rating of the OSINT side
    pub osint_risk: RiskLevel,
    /// Matched scan endpoint as `ip:port`
    pub scan_target: String,
    /// Service name on the scan side
    pub scan_service: String,
    /// Risk rating of the scan side
    pub scan_risk: RiskLevel,
    /// Accumulated signal score, rounded to 2 decimals
    pub score: f64,
    /// One reason per fired rule, in rule order
    pub reasons: Vec<String>,
    /// Worse of the two risk ratings
    pub combined_risk: RiskLevel,
}

/// Correlate OSINT findings with scan results
///
/// Every record's risk level is validated up front; an out-of-range
/// value fails the whole run with an error naming the offending record
/// rather than silently defaulting. Both inputs may be empty, in which
/// case the output is empty.
pub fn correlate(
    findings: &[OsintFinding],
    scans: &[ScanResult],
) -> Result<Vec<CorrelationRecord>> {
    let finding_risks = findings
        .iter()
        .map(|f| {
            f.risk_level
                .parse::<RiskLevel>()
                .map_err(|_| Error::InvalidOsintRisk {
                    finding: f.finding.clone(),
                    value: f.risk_level.clone(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let scan_risks = scans
        .iter()
        .map(|s| {
            s.risk_level
                .parse::<RiskLevel>()
                .map_err(|_| Error::InvalidScanRisk {
                    target: s.endpoint(),
                    value: s.risk_level.clone(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut records = Vec::new();

    for (finding, &osint_risk) in findings.iter().zip(&finding_risks) {
        for (scan, &scan_risk) in scans.iter().zip(&scan_risks) {
            let (score, reasons) = score_pair(finding, osint_risk, scan, scan_risk);

            if score > SCORE_THRESHOLD {
                debug!(
                    "Correlated {:?} with {} (score {:.2}: {})",
                    finding.finding,
                    scan.endpoint(),
                    score,
                    reasons.join(", ")
                );

                records.push(CorrelationRecord {
                    osint_finding: finding.finding.clone(),
                    osint_kind: finding.kind.clone(),
                    osint_risk,
                    scan_target: scan.endpoint(),
                    scan_service: scan.service.clone(),
                    scan_risk,
                    score: round2(score),
                    reasons: reasons.iter().map(|r| r.to_string()).collect(),
                    combined_risk: osint_risk.combined(scan_risk),
                });
            }
        }
    }

    info!(
        "Correlated {} of {} finding/scan pairs",
        records.len(),
        findings.len() * scans.len()
    );

    Ok(records)
}

/// Evaluate the four signal rules for one pair, in fixed order
fn score_pair(
    finding: &OsintFinding,
    osint_risk: RiskLevel,
    scan: &ScanResult,
    scan_risk: RiskLevel,
) -> (f64, Vec<&'static str>) {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    if finding.value == scan.ip {
        score += WEIGHT_IP_MATCH;
        reasons.push(REASON_IP_MATCH);
    }

    if finding.kind == FindingKind::Technology && scan.version.contains(finding.finding.as_str())
    {
        score += WEIGHT_TECHNOLOGY_MATCH;
        reasons.push(REASON_TECHNOLOGY_MATCH);
    }

    if osint_risk.distance(scan_risk) <= 1 {
        score += WEIGHT_RISK_PROXIMITY;
        reasons.push(REASON_RISK_PROXIMITY);
    }

    if finding.category == FindingCategory::Infrastructure
        && matches!(scan.service.as_str(), "HTTP" | "HTTPS")
    {
        score += WEIGHT_INFRASTRUCTURE_SERVICE;
        reasons.push(REASON_INFRASTRUCTURE_SERVICE);
    }

    (score, reasons)
}

/// Stable sort by descending score; enumeration order breaks ties
pub fn rank_by_score(records: &mut [CorrelationRecord]) {
    records.sort_by(|a, b| b.score.total_cmp(&a.score));
}

fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
