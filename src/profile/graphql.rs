//! Authenticated path: one combined GraphQL query per request.

use serde::Serialize;
use serde_json::Value;

use super::{NormalizedProfile, normalize, wire::User};
use crate::core::{GhClient, GhError, ProfileSource, SourceMode, net};
use crate::window::RequestWindow;

/// The combined profile query. Kept byte-for-byte compatible with the deployed schema usage.
pub const PROFILE_QUERY: &str = r#"
query($login: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $login) {
    pinnedItems(first: 6, types: REPOSITORY) {
      nodes {
        ... on Repository {
          name
          description
          url
          stargazerCount
          forkCount
          primaryLanguage { name color }
          updatedAt
        }
      }
    }
    contributionsCollection(from: $from, to: $to) {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            date
            contributionCount
          }
        }
      }
    }
    repositories(first: 50, orderBy: { field: PUSHED_AT, direction: DESC }) {
      nodes {
        name url description stargazerCount forkCount pushedAt
      }
    }
    projectsV2(first: 10) { nodes { id title url } }
  }
}
"#;

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'static str,
    variables: &'a RequestWindow,
}

/// [`ProfileSource`] backed by the GraphQL API and a bearer credential.
#[derive(Debug, Clone)]
pub struct AuthenticatedClient {
    client: GhClient,
    token: String,
}

impl AuthenticatedClient {
    /// Returns `None` when `client` carries no credential.
    pub fn from_client(client: GhClient) -> Option<Self> {
        let token = client.token()?.to_string();
        Some(Self { client, token })
    }

    async fn fetch(&self, window: &RequestWindow) -> Result<NormalizedProfile, GhError> {
        let payload = GraphQlRequest {
            query: PROFILE_QUERY,
            variables: window,
        };

        let resp = self
            .client
            .http()
            .post(self.client.graphql_url().clone())
            .header(reqwest::header::AUTHORIZATION, format!("bearer {}", self.token))
            .json(&payload)
            .send()
            .await
            .map_err(|e| GhError::UpstreamError {
                status: None,
                body: Some(e.to_string()),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = net::diagnostic_text(resp).await;
            tracing::error!(
                status = status.as_u16(),
                body = body.as_deref().unwrap_or(""),
                "GitHub API non-OK response"
            );
            return Err(GhError::UpstreamError {
                status: Some(status.as_u16()),
                body,
            });
        }

        let text = net::get_text(resp, "graphql")
            .await
            .map_err(|e| GhError::UpstreamError {
                status: Some(status.as_u16()),
                body: Some(e.to_string()),
            })?;

        decode_user_response(&text)
    }
}

impl ProfileSource for AuthenticatedClient {
    fn fetch_profile<'a>(
        &'a self,
        window: &'a RequestWindow,
    ) -> core::pin::Pin<
        Box<dyn core::future::Future<Output = Result<NormalizedProfile, GhError>> + Send + 'a>,
    > {
        Box::pin(self.fetch(window))
    }

    fn mode(&self) -> SourceMode {
        SourceMode::Authenticated
    }
}

/// Decodes a successful GraphQL body into a profile.
///
/// A body that is not JSON, or whose `data.user` has the wrong shape, is malformed; a JSON
/// body without a `data.user` object is a schema mismatch and keeps the raw document.
pub(crate) fn decode_user_response(text: &str) -> Result<NormalizedProfile, GhError> {
    let raw: Value = serde_json::from_str(text).map_err(|e| GhError::MalformedUpstreamPayload {
        reason: format!("graphql json parse: {e}"),
        body: Some(text.to_string()),
    })?;

    let user = match raw.get("data").and_then(|d| d.get("user")) {
        Some(u) if u.is_object() => u.clone(),
        _ => return Err(GhError::UpstreamSchemaMismatch { raw }),
    };

    let user: User =
        serde_json::from_value(user).map_err(|e| GhError::MalformedUpstreamPayload {
            reason: format!("graphql user decode: {e}"),
            body: Some(text.to_string()),
        })?;

    Ok(normalize::from_graphql_user(user))
}
