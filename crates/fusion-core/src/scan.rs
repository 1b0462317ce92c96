//! Network scan records as exported by active scanners

use serde::{Deserialize, Serialize};

/// One observed service on a host/port, as reported by an nmap-style scan
///
/// `state` is carried verbatim ("open", "filtered", ...) and is not
/// interpreted by the engine. `risk_level` is validated by the
/// correlation engine against Low/Medium/High.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Scanned IPv4/IPv6 address
    pub ip: String,

    /// Port number (1-65535)
    pub port: u16,

    /// Protocol/service name (e.g. "HTTP", "SSH", "MySQL")
    pub service: String,

    /// Free-text version string, may embed a technology fingerprint
    pub version: String,

    /// Scan outcome (e.g. "open")
    pub state: String,

    /// Raw service banner, informational
    pub banner: String,

    /// Assessed risk, expected to be "Low", "Medium", or "High"
    pub risk_level: String,

    /// Known vulnerability identifiers for this service
    #[serde(default)]
    pub vulnerabilities: Vec<String>,
}

impl ScanResult {
    /// Create a scan result for an open service with Low risk
    pub fn new(ip: impl Into<String>, port: u16, service: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            port,
            service: service.into(),
            version: String::new(),
            state: String::from("open"),
            banner: String::new(),
            risk_level: String::from("Low"),
            vulnerabilities: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    pub fn with_risk(mut self, risk_level: impl Into<String>) -> Self {
        self.risk_level = risk_level.into();
        self
    }

    pub fn with_vulnerability(mut self, cve_id: impl Into<String>) -> Self {
        self.vulnerabilities.push(cve_id.into());
        self
    }

    /// Compose the `ip:port` endpoint label used in correlation output
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let scan = ScanResult::new("192.168.1.15", 3306, "MySQL");
        assert_eq!(scan.endpoint(), "192.168.1.15:3306");
    }

    #[test]
    fn test_scan_construction() {
        let scan = ScanResult::new("192.168.1.15", 22, "SSH")
            .with_version("OpenSSH 7.6p1")
            .with_banner("SSH-2.0-OpenSSH_7.6p1")
            .with_risk("Medium")
            .with_vulnerability("CVE-2018-15473");

        assert_eq!(scan.state, "open");
        assert_eq!(scan.vulnerabilities, vec!["CVE-2018-15473"]);
    }

    #[test]
    fn test_deserializes_from_nmap_export() {
        let json = r#"{
            "ip": "192.168.1.10",
            "port": 80,
            "service": "HTTP",
            "version": "Apache 2.4.41",
            "state": "open",
            "banner": "Apache/2.4.41 (Ubuntu)",
            "risk_level": "Low",
            "vulnerabilities": []
        }"#;

        let scan: ScanResult = serde_json::from_str(json).unwrap();
        assert_eq!(scan.port, 80);
        assert_eq!(scan.endpoint(), "192.168.1.10:80");
        assert!(scan.vulnerabilities.is_empty());
    }

    #[test]
    fn test_missing_vulnerabilities_defaults_to_empty() {
        let json = r#"{
            "ip": "10.0.0.1",
            "port": 443,
            "service": "HTTPS",
            "version": "",
            "state": "open",
            "banner": "",
            "risk_level": "Low"
        }"#;

        let scan: ScanResult = serde_json::from_str(json).unwrap();
        assert!(scan.vulnerabilities.is_empty());
    }
}
