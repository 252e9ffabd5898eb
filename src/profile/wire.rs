//! Serde mirrors of the upstream payloads. Every field is optional and every list element
//! nullable, because GitHub returns partial nulls for accounts with sparse data.

use serde::Deserialize;

/* ---------------- GraphQL ---------------- */

/// `{ nodes: [...] }` wrapper used by GraphQL connections.
#[derive(Deserialize)]
pub(crate) struct Connection<T> {
    pub(crate) nodes: Option<Vec<Option<T>>>,
}

impl<T> Connection<T> {
    /// Non-null nodes; an absent list is empty.
    pub(crate) fn into_nodes(self) -> impl Iterator<Item = T> {
        self.nodes.unwrap_or_default().into_iter().flatten()
    }
}

#[derive(Deserialize)]
pub(crate) struct User {
    #[serde(default, rename = "pinnedItems")]
    pub(crate) pinned_items: Option<Connection<PinnedNode>>,
    #[serde(default, rename = "contributionsCollection")]
    pub(crate) contributions_collection: Option<ContributionsCollection>,
    #[serde(default)]
    pub(crate) repositories: Option<Connection<RepoNode>>,
    #[serde(default, rename = "projectsV2")]
    pub(crate) projects_v2: Option<Connection<ProjectNode>>,
}

#[derive(Deserialize)]
pub(crate) struct PinnedNode {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[serde(default, rename = "stargazerCount")]
    pub(crate) stargazer_count: Option<u64>,
    #[serde(default, rename = "forkCount")]
    pub(crate) fork_count: Option<u64>,
    #[serde(default, rename = "primaryLanguage")]
    pub(crate) primary_language: Option<Language>,
    #[serde(default, rename = "updatedAt")]
    pub(crate) updated_at: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct Language {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) color: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct ContributionsCollection {
    #[serde(default, rename = "contributionCalendar")]
    pub(crate) contribution_calendar: Option<ContributionCalendar>,
}

#[derive(Deserialize)]
pub(crate) struct ContributionCalendar {
    #[serde(default, rename = "totalContributions")]
    pub(crate) total_contributions: Option<u64>,
    #[serde(default)]
    pub(crate) weeks: Option<Vec<Option<Week>>>,
}

#[derive(Deserialize)]
pub(crate) struct Week {
    #[serde(default, rename = "contributionDays")]
    pub(crate) contribution_days: Option<Vec<Option<Day>>>,
}

#[derive(Deserialize)]
pub(crate) struct Day {
    #[serde(default)]
    pub(crate) date: Option<String>,
    #[serde(default, rename = "contributionCount")]
    pub(crate) contribution_count: Option<u64>,
}

#[derive(Deserialize)]
pub(crate) struct RepoNode {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default, rename = "stargazerCount")]
    pub(crate) stargazer_count: Option<u64>,
    #[serde(default, rename = "forkCount")]
    pub(crate) fork_count: Option<u64>,
    #[serde(default, rename = "pushedAt")]
    pub(crate) pushed_at: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct ProjectNode {
    #[serde(default)]
    pub(crate) id: Option<String>,
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
}

/* ---------------- REST ---------------- */

/// One item of `GET /users/{login}/repos`.
#[derive(Deserialize)]
pub(crate) struct PublicRepo {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) html_url: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) stargazers_count: Option<u64>,
    #[serde(default)]
    pub(crate) forks_count: Option<u64>,
    #[serde(default)]
    pub(crate) pushed_at: Option<String>,
}
