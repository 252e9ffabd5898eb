//! Public client surface + builder.
//! Default endpoints and the UA live in `constants`.

mod constants;

use crate::core::GhError;
use constants::{DEFAULT_BASE_API, DEFAULT_GRAPHQL_URL, USER_AGENT};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Configured HTTP client plus the upstream endpoints and optional access credential.
#[derive(Clone)]
pub struct GhClient {
    http: Client,
    base_api: Url,
    graphql_url: Url,
    token: Option<String>,
}

impl fmt::Debug for GhClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GhClient")
            .field("base_api", &self.base_api.as_str())
            .field("graphql_url", &self.graphql_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for GhClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl GhClient {
    /// Create a new builder.
    pub fn builder() -> GhClientBuilder {
        GhClientBuilder::default()
    }

    /// Whether an access credential is configured (GraphQL path available).
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_api(&self) -> &Url {
        &self.base_api
    }
    pub(crate) fn graphql_url(&self) -> &Url {
        &self.graphql_url
    }
    pub(crate) fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct GhClientBuilder {
    user_agent: Option<String>,
    base_api: Option<Url>,
    graphql_url: Option<Url>,
    token: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl GhClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the REST API base (e.g., `https://api.github.com/`).
    pub fn base_api(mut self, url: Url) -> Self {
        self.base_api = Some(url);
        self
    }

    /// Override the GraphQL endpoint (e.g., `https://api.github.com/graphql`).
    pub fn graphql_url(mut self, url: Url) -> Self {
        self.graphql_url = Some(url);
        self
    }

    /// Access credential for the GraphQL API. Blank values are treated as absent.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.trim().is_empty()).then_some(token);
        self
    }

    /// Like [`token`](Self::token) but accepts an optional value, e.g. straight from config.
    pub fn maybe_token(self, token: Option<String>) -> Self {
        match token {
            Some(t) => self.token(t),
            None => self,
        }
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<GhClient, GhError> {
        let base_api = match self.base_api {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_API)?,
        };
        if base_api.cannot_be_a_base() {
            return Err(GhError::InvalidConfig(format!(
                "REST base URL cannot be a base: {base_api}"
            )));
        }
        let graphql_url = match self.graphql_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_GRAPHQL_URL)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(GhClient {
            http,
            base_api,
            graphql_url,
            token: self.token,
        })
    }
}
