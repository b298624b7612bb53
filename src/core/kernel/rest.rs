use crate::core::errors::KatapultError;
use crate::core::kernel::transport::Transport;
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Body, Method, Request, Url};
use serde::Serialize;
use tracing::{instrument, trace};

/// Default request and accepted media type
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Query parameter carrying the API key on every request
pub const API_KEY_PARAM: &str = "api_key";

/// Body attached to an outgoing request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Pre-serialized JSON
    Json(Vec<u8>),
    /// Arbitrary bytes with an explicit media type (e.g. `image/jpeg`)
    Raw { content_type: String, bytes: Vec<u8> },
}

impl RequestBody {
    /// Serialize a value as a JSON body
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self, KatapultError> {
        serde_json::to_vec(body).map(Self::Json).map_err(|e| {
            KatapultError::Serialization(format!("Failed to serialize request body: {}", e))
        })
    }

    pub fn raw(content_type: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::Raw {
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Media type sent in `Content-Type`; JSON unless a raw body names its own
    pub fn content_type(&self) -> &str {
        match self {
            Self::Raw { content_type, .. } if !content_type.is_empty() => content_type,
            _ => JSON_CONTENT_TYPE,
        }
    }

    fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Empty => None,
            Self::Json(bytes) | Self::Raw { bytes, .. } => Some(bytes),
        }
    }
}

/// Resolve `path` against `base_url` and attach the query string.
///
/// One leading `/` is stripped and the remaining path is appended segment by
/// segment, so `https://host/api` and `https://host/api/` resolve identically.
/// The API key is appended last; caller pairs named `api_key` are dropped.
pub fn build_url(
    base_url: &Url,
    path: &str,
    query_params: &[(&str, &str)],
    api_key: &str,
) -> Result<Url, KatapultError> {
    let mut url = base_url.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|()| {
            KatapultError::Transport(format!("Base URL '{}' cannot carry a path", base_url))
        })?;
        let relative = path.strip_prefix('/').unwrap_or(path);
        segments.pop_if_empty().extend(relative.split('/'));
    }

    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query_params.iter().filter(|(key, _)| *key != API_KEY_PARAM) {
            pairs.append_pair(key, value);
        }
        if !api_key.is_empty() {
            pairs.append_pair(API_KEY_PARAM, api_key);
        }
    }

    Ok(url)
}

/// Send one request and return the status code with the full response body.
///
/// Status codes are not interpreted here; 4xx/5xx come back as ordinary results.
#[instrument(
    skip(transport, base_url, query_params, body, api_key),
    fields(method = %method, path = %path, param_count = query_params.len())
)]
pub async fn execute<T: Transport + ?Sized>(
    transport: &T,
    method: Method,
    base_url: &Url,
    path: &str,
    query_params: &[(&str, &str)],
    body: RequestBody,
    api_key: &str,
) -> Result<(u16, Vec<u8>), KatapultError> {
    let url = build_url(base_url, path, query_params, api_key)?;

    let content_type = HeaderValue::from_str(body.content_type()).map_err(|e| {
        KatapultError::Transport(format!(
            "Invalid content type '{}': {}",
            body.content_type(),
            e
        ))
    })?;

    let mut request = Request::new(method, url);
    request.headers_mut().insert(CONTENT_TYPE, content_type);
    request
        .headers_mut()
        .insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
    if let Some(bytes) = body.into_bytes() {
        *request.body_mut() = Some(Body::from(bytes));
    }

    // without_url keeps the api_key query parameter out of error messages
    let response = transport
        .send(request)
        .await
        .map_err(|e| KatapultError::Transport(format!("Request failed: {}", e.without_url())))?;

    let status = response.status().as_u16();
    let bytes = response.bytes().await.map_err(|e| {
        KatapultError::Transport(format!(
            "Failed to read response body: {}",
            e.without_url()
        ))
    })?;

    trace!(status, "Response body: {}", String::from_utf8_lossy(&bytes));

    Ok((status, bytes.to_vec()))
}
