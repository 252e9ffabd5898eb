//! The request pipeline: resolve window → cache lookup → upstream → cache store.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{CacheStore, GhClient, GhError, ProfileSource, SourceMode};
use crate::profile::{NormalizedProfile, select_source};
use crate::window::{IdentityResolver, ProfileParams};

/// Successful answer: the profile document plus whether it came from the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub cached: bool,
    #[serde(flatten)]
    pub profile: NormalizedProfile,
}

/// Aggregates GitHub profile data for the portfolio page.
///
/// Construct once at startup and share it; the cache inside lives as long as the service.
#[derive(Clone)]
pub struct ProfileDataService {
    resolver: IdentityResolver,
    cache: Arc<CacheStore<NormalizedProfile>>,
    source: Arc<dyn ProfileSource>,
}

impl std::fmt::Debug for ProfileDataService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileDataService")
            .field("resolver", &self.resolver)
            .field("mode", &self.source.mode())
            .field("ttl", &self.cache.ttl())
            .finish()
    }
}

impl ProfileDataService {
    pub fn new(
        source: Arc<dyn ProfileSource>,
        cache: Arc<CacheStore<NormalizedProfile>>,
        resolver: IdentityResolver,
    ) -> Self {
        Self {
            resolver,
            cache,
            source,
        }
    }

    /// Wires the upstream matching `client`'s credential to a fresh cache.
    pub fn from_client(client: GhClient, ttl: Duration, default_login: Option<String>) -> Self {
        Self::new(
            select_source(client),
            Arc::new(CacheStore::new(ttl)),
            IdentityResolver::new(default_login),
        )
    }

    pub fn mode(&self) -> SourceMode {
        self.source.mode()
    }

    pub fn cache(&self) -> &Arc<CacheStore<NormalizedProfile>> {
        &self.cache
    }

    /// Handles one request against the current instant.
    ///
    /// # Errors
    /// Propagates parameter errors from the resolver and upstream errors from the source.
    /// Failed fetches are never cached.
    pub async fn handle(&self, params: &ProfileParams) -> Result<ProfileResponse, GhError> {
        self.handle_at(params, Utc::now()).await
    }

    /// Like [`handle`](Self::handle) with an explicit clock reading.
    #[tracing::instrument(skip(self, params), err)]
    pub async fn handle_at(
        &self,
        params: &ProfileParams,
        now: DateTime<Utc>,
    ) -> Result<ProfileResponse, GhError> {
        let window = self.resolver.resolve(params, now)?;
        let key = window.cache_key();

        if let Some(profile) = self.cache.get(&key).await {
            tracing::debug!(%key, "cache hit");
            return Ok(ProfileResponse {
                cached: true,
                profile,
            });
        }

        tracing::debug!(%key, mode = ?self.source.mode(), "cache miss, fetching upstream");
        let profile = self.source.fetch_profile(&window).await?;
        self.cache.put(key, profile.clone()).await;

        Ok(ProfileResponse {
            cached: false,
            profile,
        })
    }
}
