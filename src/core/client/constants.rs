//! Centralized constants for default endpoints and UA.

/// GitHub rejects API requests without a User-Agent.
pub(crate) const USER_AGENT: &str = concat!("ghprofile-rs/", env!("CARGO_PKG_VERSION"));

/// REST API base (paths such as `users/{login}/repos` are joined onto it).
pub(crate) const DEFAULT_BASE_API: &str = "https://api.github.com/";

/// GraphQL v4 endpoint.
pub(crate) const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";
