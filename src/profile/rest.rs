//! Degraded path: public repository listing, no credential required.

use serde_json::Value;

use super::{NormalizedProfile, normalize, wire::PublicRepo};
use crate::core::{GhClient, GhError, ProfileSource, SourceMode, net};
use crate::window::RequestWindow;

/// Page size of the public listing.
pub const PUBLIC_REPOS_PAGE_SIZE: u32 = 50;

/// [`ProfileSource`] that lists `GET /users/{login}/repos` sorted by last push.
#[derive(Debug, Clone)]
pub struct PublicFallbackClient {
    client: GhClient,
}

impl PublicFallbackClient {
    pub fn new(client: GhClient) -> Self {
        Self { client }
    }

    fn repos_url(&self, login: &str) -> Result<url::Url, GhError> {
        let mut url = self.client.base_api().clone();
        url.path_segments_mut()
            .map_err(|()| GhError::InvalidConfig("REST base URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(["users", login, "repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", &PUBLIC_REPOS_PAGE_SIZE.to_string())
            .append_pair("sort", "pushed");
        Ok(url)
    }

    async fn fetch(&self, window: &RequestWindow) -> Result<NormalizedProfile, GhError> {
        let url = self.repos_url(&window.login)?;

        let resp = self
            .client
            .http()
            .get(url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| GhError::UpstreamError {
                status: None,
                body: Some(e.to_string()),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = net::diagnostic_text(resp).await;
            tracing::warn!(
                status = status.as_u16(),
                login = %window.login,
                "public repo listing failed"
            );
            return Err(GhError::UpstreamUnavailable {
                status: status.as_u16(),
                body,
            });
        }

        let text = net::get_text(resp, "public_repos")
            .await
            .map_err(|e| GhError::UpstreamUnavailable {
                status: status.as_u16(),
                body: Some(e.to_string()),
            })?;

        decode_public_repos(&text)
    }
}

impl ProfileSource for PublicFallbackClient {
    fn fetch_profile<'a>(
        &'a self,
        window: &'a RequestWindow,
    ) -> core::pin::Pin<
        Box<dyn core::future::Future<Output = Result<NormalizedProfile, GhError>> + Send + 'a>,
    > {
        Box::pin(self.fetch(window))
    }

    fn mode(&self) -> SourceMode {
        SourceMode::PublicFallback
    }
}

/// Decodes the listing. Valid JSON that is not an array yields an empty `recent` list.
pub(crate) fn decode_public_repos(text: &str) -> Result<NormalizedProfile, GhError> {
    let malformed = |e: serde_json::Error| GhError::MalformedUpstreamPayload {
        reason: format!("public repos json parse: {e}"),
        body: Some(text.to_string()),
    };

    let raw: Value = serde_json::from_str(text).map_err(malformed)?;
    let repos: Vec<Option<PublicRepo>> = match raw {
        Value::Array(_) => serde_json::from_value(raw).map_err(malformed)?,
        _ => Vec::new(),
    };

    Ok(normalize::from_public_repos(repos))
}
