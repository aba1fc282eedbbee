//! Data transfer objects for the locale endpoint

use hal_core::PreferenceList;
use hal_shared::MatchPolicy;
use serde::{Deserialize, Serialize};

/// Query parameters for GET /api/v1/locale
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocaleQuery {
    /// Tag that replaces the browser preferences for this request
    #[serde(default)]
    pub force: Option<String>,
}

/// Result of negotiating the request's locale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleResponse {
    /// Parsed `Accept-Language` preferences, or the forced override
    pub preferred_languages: PreferenceList,

    /// Exact-policy selection against the available locales
    pub exact_match: Option<String>,

    /// Region-agnostic selection against the available locales
    pub compatible_match: Option<String>,

    /// Locale chosen under the configured policy, defaulted when nothing matched
    pub locale: String,

    /// Configured matching policy
    pub policy: MatchPolicy,
}
