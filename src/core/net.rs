use crate::core::BriefError;
use url::Url;

/// Send a GET and fail with `Status` on any non-2xx answer.
pub(crate) async fn get_ok(
    http: &reqwest::Client,
    url: Url,
) -> Result<reqwest::Response, BriefError> {
    let resp = http.get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(BriefError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }
    Ok(resp)
}

/// Read the response body as text.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    endpoint: &str,
    id: &str,
) -> Result<String, BriefError> {
    let text = resp.text().await?;
    tracing::trace!(endpoint, id, bytes = text.len(), "response body read");
    Ok(text)
}

/// Read the response body as raw bytes; feeds declare their own encoding.
pub(crate) async fn get_bytes(
    resp: reqwest::Response,
    endpoint: &str,
    id: &str,
) -> Result<Vec<u8>, BriefError> {
    let bytes = resp.bytes().await?;
    tracing::trace!(endpoint, id, bytes = bytes.len(), "response body read");
    Ok(bytes.to_vec())
}
