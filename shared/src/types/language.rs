//! Language negotiation types

use serde::{Deserialize, Serialize};

/// Policy used to pick a supported locale from the user's preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Full tag equality only: `en-US` never matches `en`
    Exact,
    /// Region-agnostic fallback on the primary subtag
    Compatible,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        MatchPolicy::Compatible
    }
}

impl MatchPolicy {
    /// Get the policy name as used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPolicy::Exact => "exact",
            MatchPolicy::Compatible => "compatible",
        }
    }
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" | "preferred" => Ok(MatchPolicy::Exact),
            "compatible" | "fallback" => Ok(MatchPolicy::Compatible),
            _ => Err(format!("Unsupported match policy: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_policy_from_str() {
        assert_eq!("exact".parse::<MatchPolicy>().unwrap(), MatchPolicy::Exact);
        assert_eq!("Compatible".parse::<MatchPolicy>().unwrap(), MatchPolicy::Compatible);
        assert_eq!("fallback".parse::<MatchPolicy>().unwrap(), MatchPolicy::Compatible);
        assert!("fuzzy".parse::<MatchPolicy>().is_err());
    }

    #[test]
    fn test_match_policy_properties() {
        assert_eq!(MatchPolicy::default(), MatchPolicy::Compatible);
        assert_eq!(MatchPolicy::Exact.to_string(), "exact");
    }

    #[test]
    fn test_match_policy_serde() {
        let json = serde_json::to_string(&MatchPolicy::Exact).unwrap();
        assert_eq!(json, "\"exact\"");
        let policy: MatchPolicy = serde_json::from_str("\"compatible\"").unwrap();
        assert_eq!(policy, MatchPolicy::Compatible);
    }
}
