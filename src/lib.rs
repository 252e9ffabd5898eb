//! ghprofile-rs: a caching GitHub profile proxy for portfolio pages.
//!
//! One request resolves a login and a contribution window, answers from a short-lived
//! in-memory cache when it can, and otherwise asks GitHub: the combined GraphQL query when an
//! access token is configured, the public repository listing when it is not. Either way the
//! result is flattened into a [`NormalizedProfile`] whose lists are never null.

pub mod core;
pub mod profile;
pub mod server;
pub mod service;
pub mod window;

pub use crate::core::{CacheStore, GhClient, GhClientBuilder, GhError, ProfileSource, SourceMode};
pub use profile::{
    AuthenticatedClient, ContributionDay, NormalizedProfile, PinnedRepo, Project,
    PublicFallbackClient, RecentRepo, Totals,
};
pub use service::{ProfileDataService, ProfileResponse};
pub use window::{IdentityResolver, ProfileParams, RequestWindow};
