//! OSINT finding records as exported by passive reconnaissance tools

use serde::{Deserialize, Serialize};

/// A passively collected intelligence item about a target
///
/// Field names follow the SpiderFoot-style JSON export, so stored
/// exports deserialize directly. `risk_level` is kept as supplied and
/// validated by the correlation engine, which fails fast on anything
/// outside Low/Medium/High instead of defaulting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsintFinding {
    /// Domain under investigation
    pub target: String,

    /// Category of the observation
    #[serde(rename = "type")]
    pub kind: FindingKind,

    /// Human-readable label of what was found
    pub finding: String,

    /// Associated datum: an IP address, free-text evidence, etc.
    pub value: String,

    /// Provenance, informational only
    pub source: String,

    /// Assessed risk, expected to be "Low", "Medium", or "High"
    pub risk_level: String,

    /// Secondary classification
    pub category: FindingCategory,
}

impl OsintFinding {
    /// Create a finding with empty evidence fields and Low risk
    pub fn new(
        target: impl Into<String>,
        kind: FindingKind,
        finding: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            kind,
            finding: finding.into(),
            value: String::new(),
            source: String::new(),
            risk_level: String::from("Low"),
            category: FindingCategory::default(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_risk(mut self, risk_level: impl Into<String>) -> Self {
        self.risk_level = risk_level.into();
        self
    }

    pub fn with_category(mut self, category: FindingCategory) -> Self {
        self.category = category;
        self
    }
}

/// Kind of OSINT observation
///
/// The closed set matches what the upstream collectors emit today;
/// `Other` carries anything new through without rejecting it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FindingKind {
    Domain,
    Subdomain,
    Email,
    IpRange,
    Technology,
    Other(String),
}

impl FindingKind {
    pub fn as_str(&self) -> &str {
        match self {
            FindingKind::Domain => "Domain",
            FindingKind::Subdomain => "Subdomain",
            FindingKind::Email => "Email",
            FindingKind::IpRange => "IP Range",
            FindingKind::Technology => "Technology",
            FindingKind::Other(s) => s,
        }
    }
}

impl From<String> for FindingKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Domain" => FindingKind::Domain,
            "Subdomain" => FindingKind::Subdomain,
            "Email" => FindingKind::Email,
            "IP Range" => FindingKind::IpRange,
            "Technology" => FindingKind::Technology,
            _ => FindingKind::Other(s),
        }
    }
}

impl From<FindingKind> for String {
    fn from(kind: FindingKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Secondary classification of a finding
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FindingCategory {
    Infrastructure,
    AttackSurface,
    Credentials,
    TechnologyStack,
    Other(String),
}

impl FindingCategory {
    pub fn as_str(&self) -> &str {
        match self {
            FindingCategory::Infrastructure => "Infrastructure",
            FindingCategory::AttackSurface => "Attack Surface",
            FindingCategory::Credentials => "Credentials",
            FindingCategory::TechnologyStack => "Technology Stack",
            FindingCategory::Other(s) => s,
        }
    }
}

impl Default for FindingCategory {
    fn default() -> Self {
        FindingCategory::Other(String::new())
    }
}

impl From<String> for FindingCategory {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Infrastructure" => FindingCategory::Infrastructure,
            "Attack Surface" => FindingCategory::AttackSurface,
            "Credentials" => FindingCategory::Credentials,
            "Technology Stack" => FindingCategory::TechnologyStack,
            _ => FindingCategory::Other(s),
        }
    }
}

impl From<FindingCategory> for String {
    fn from(category: FindingCategory) -> Self {
        category.as_str().to_string()
    }
}

impl std::fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
