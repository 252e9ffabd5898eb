/// Read the response body as text.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    endpoint: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;
    tracing::debug!(endpoint, bytes = text.len(), "read upstream body");
    Ok(text)
}

/// Best-effort body read for diagnostics on a failed response; read errors become `None`.
pub(crate) async fn diagnostic_text(resp: reqwest::Response) -> Option<String> {
    resp.text().await.ok()
}
