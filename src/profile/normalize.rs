//! Pure mapping from the upstream wire shapes into [`NormalizedProfile`]. No I/O.

use super::model::{
    ContributionDay, MISSING_TOKEN_WARNING, NormalizedProfile, PinnedRepo, Project, RecentRepo,
    Totals,
};
use super::wire::{
    ContributionCalendar, PinnedNode, ProjectNode, PublicRepo, RepoNode, User, Week,
};

/// Maps a decoded GraphQL `user` object.
pub(crate) fn from_graphql_user(user: User) -> NormalizedProfile {
    let calendar = user
        .contributions_collection
        .and_then(|c| c.contribution_calendar);

    let (total, contributions) = match calendar {
        Some(ContributionCalendar {
            total_contributions,
            weeks,
        }) => (
            total_contributions.unwrap_or(0),
            flatten_weeks(weeks.unwrap_or_default()),
        ),
        None => (0, Vec::new()),
    };

    NormalizedProfile {
        pinned: user
            .pinned_items
            .map(|c| c.into_nodes().map(pinned_repo).collect())
            .unwrap_or_default(),
        contributions,
        recent: user
            .repositories
            .map(|c| c.into_nodes().map(recent_repo).collect())
            .unwrap_or_default(),
        projects: user
            .projects_v2
            .map(|c| c.into_nodes().map(project).collect())
            .unwrap_or_default(),
        totals: Totals {
            total_contributions: total,
        },
        warning: None,
    }
}

/// Maps the public repository listing used in degraded mode.
pub(crate) fn from_public_repos(repos: Vec<Option<PublicRepo>>) -> NormalizedProfile {
    NormalizedProfile {
        recent: repos.into_iter().flatten().map(public_repo).collect(),
        warning: Some(MISSING_TOKEN_WARNING.to_string()),
        ..NormalizedProfile::default()
    }
}

/// Flattens weeks-of-days into one chronological sequence, skipping null weeks, null days
/// and days without a date.
pub(crate) fn flatten_weeks(weeks: Vec<Option<Week>>) -> Vec<ContributionDay> {
    weeks
        .into_iter()
        .flatten()
        .flat_map(|w| w.contribution_days.unwrap_or_default())
        .flatten()
        .filter_map(|d| {
            Some(ContributionDay {
                date: d.date?,
                count: d.contribution_count.unwrap_or(0),
            })
        })
        .collect()
}

fn pinned_repo(r: PinnedNode) -> PinnedRepo {
    let (language, language_color) = match r.primary_language {
        Some(l) => (non_empty(l.name), non_empty(l.color)),
        None => (None, None),
    };
    PinnedRepo {
        name: r.name,
        description: r.description,
        url: r.url,
        stars: r.stargazer_count.unwrap_or(0),
        forks: r.fork_count.unwrap_or(0),
        language,
        language_color,
        updated_at: r.updated_at,
    }
}

fn recent_repo(r: RepoNode) -> RecentRepo {
    RecentRepo {
        name: r.name,
        url: r.url,
        description: r.description,
        stars: r.stargazer_count.unwrap_or(0),
        forks: r.fork_count.unwrap_or(0),
        pushed_at: r.pushed_at,
    }
}

fn public_repo(r: PublicRepo) -> RecentRepo {
    RecentRepo {
        name: r.name,
        url: r.html_url,
        description: r.description,
        stars: r.stargazers_count.unwrap_or(0),
        forks: r.forks_count.unwrap_or(0),
        pushed_at: r.pushed_at,
    }
}

fn project(p: ProjectNode) -> Project {
    Project {
        id: p.id,
        title: p.title,
        url: p.url,
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.is_empty())
}
