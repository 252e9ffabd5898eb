use std::time::Duration;

use crate::core::{DEFAULT_CACHE_TTL, GhClient, GhError};
use url::Url;

/// Runtime configuration, sourced from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub github_token: Option<String>,
    pub default_login: Option<String>,
    pub cache_ttl: Duration,
    pub api_url: Option<String>,
    pub graphql_url: Option<String>,
    pub upstream_timeout: Option<Duration>,
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
            github_token: None,
            default_login: None,
            cache_ttl: DEFAULT_CACHE_TTL,
            api_url: None,
            graphql_url: None,
            upstream_timeout: None,
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl Config {
    const DEFAULT_HOST: &str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 4000;

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: get("PORT")
                .and_then(|p| p.trim().parse::<u16>().ok())
                .unwrap_or(defaults.port),
            github_token: get("GITHUB_TOKEN"),
            default_login: get("GITHUB_USERNAME"),
            cache_ttl: get("GITHUB_CACHE_TTL")
                .and_then(|t| t.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
            api_url: get("GITHUB_API_URL"),
            graphql_url: get("GITHUB_GRAPHQL_URL"),
            upstream_timeout: get("GITHUB_TIMEOUT_SECS")
                .and_then(|t| t.trim().parse::<u64>().ok())
                .map(Duration::from_secs),
            allowed_origins: get("ALLOWED_ORIGINS")
                .map(|o| {
                    o.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.allowed_origins),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the upstream client described by this configuration.
    pub fn github_client(&self) -> Result<GhClient, GhError> {
        let mut builder = GhClient::builder().maybe_token(self.github_token.clone());
        if let Some(api) = &self.api_url {
            builder = builder.base_api(Url::parse(api)?);
        }
        if let Some(gql) = &self.graphql_url {
            builder = builder.graphql_url(Url::parse(gql)?);
        }
        if let Some(t) = self.upstream_timeout {
            builder = builder.timeout(t);
        }
        builder.build()
    }
}
