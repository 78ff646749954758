//! Company identity records.

use serde::{Deserialize, Serialize};

/// A listed company as identified by EDINET.
///
/// Created from the external lookup and never mutated afterwards. The EDINET
/// code (`E02367` style) is the stable identifier; the securities code is the
/// exchange ticker and may be absent for unlisted filers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyIdentity {
    /// EDINET code, e.g. `E02367`.
    pub code: String,

    /// Registered company name.
    pub name: String,

    /// Securities (ticker) code, if listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub securities_code: Option<String>,

    /// Industry classification label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl CompanyIdentity {
    /// Create an identity with only the mandatory fields.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            securities_code: None,
            industry: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_leaves_optional_fields_empty() {
        let company = CompanyIdentity::new("E02367", "任天堂株式会社");
        assert_eq!(company.code, "E02367");
        assert!(company.securities_code.is_none());
        assert!(company.industry.is_none());
    }

    #[test]
    fn test_serde_skips_absent_optionals() {
        let company = CompanyIdentity::new("E02367", "任天堂株式会社");
        let json = serde_json::to_string(&company).unwrap();
        assert!(!json.contains("securities_code"));
        assert!(!json.contains("industry"));
    }
}
