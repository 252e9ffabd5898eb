//! Profile document types and the two upstream paths that produce them.
//!
//! Internals are split into:
//! - `graphql`:   authenticated combined query
//! - `rest`:      unauthenticated public repository listing (degraded mode)
//! - `wire`:      nullable serde mirrors of both upstream payloads
//! - `normalize`: pure mapping from wire shapes into [`NormalizedProfile`]

mod graphql;
mod model;
mod normalize;
mod rest;
mod wire;

use std::sync::Arc;

use crate::core::{GhClient, ProfileSource};

pub use graphql::{AuthenticatedClient, PROFILE_QUERY};
pub use model::{
    ContributionDay, MISSING_TOKEN_WARNING, NormalizedProfile, PinnedRepo, Project, RecentRepo,
    Totals,
};
pub use rest::{PUBLIC_REPOS_PAGE_SIZE, PublicFallbackClient};

/// Picks the upstream capability once, from whether `client` carries a credential.
pub fn select_source(client: GhClient) -> Arc<dyn ProfileSource> {
    if let Some(auth) = AuthenticatedClient::from_client(client.clone()) {
        return Arc::new(auth);
    }
    tracing::warn!("GITHUB_TOKEN is not set; serving public repositories only");
    Arc::new(PublicFallbackClient::new(client))
}
