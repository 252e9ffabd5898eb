use serde::{Deserialize, Serialize};

/// Marker carried by profiles built without an access credential.
pub const MISSING_TOKEN_WARNING: &str = "MISSING_GITHUB_TOKEN";

/// A repository the account has chosen to feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedRepo {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub stars: u64,
    pub forks: u64,
    /// Primary language name.
    pub language: Option<String>,
    /// Primary language color as a hex string, e.g. `#dea584`.
    pub language_color: Option<String>,
    pub updated_at: Option<String>,
}

/// Contributions recorded on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub count: u64,
}

/// A repository from the most-recently-pushed listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentRepo {
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub pushed_at: Option<String>,
}

/// A project board owned by the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_contributions: u64,
}

/// The stable output document.
///
/// Every list is always present (possibly empty). `warning` is only set in degraded mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedProfile {
    pub pinned: Vec<PinnedRepo>,
    pub contributions: Vec<ContributionDay>,
    pub recent: Vec<RecentRepo>,
    pub projects: Vec<Project>,
    pub totals: Totals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl NormalizedProfile {
    /// Whether this profile was produced by the unauthenticated fallback.
    pub fn is_degraded(&self) -> bool {
        self.warning.as_deref() == Some(MISSING_TOKEN_WARNING)
    }
}
