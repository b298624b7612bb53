use crate::core::config::{ClientConfig, ConfigError, DEFAULT_BASE_URL};
use crate::core::errors::KatapultError;
use crate::core::kernel::pacing::{PacedTransport, Pacer};
use crate::core::kernel::response::decode_response;
use crate::core::kernel::rest::{self, RequestBody};
use crate::core::kernel::transport::Transport;
use crate::core::traits::Requester;
use crate::core::types::Meta;
use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{Client, Method, Url};
use secrecy::{ExposeSecret, Secret};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Builder for creating [`KatapultClient`] instances
pub struct ClientBuilder {
    api_key: Secret<String>,
    base_url: Option<String>,
    http_client: Option<Client>,
    transport: Option<Arc<dyn Transport>>,
    rate_limit: Option<Duration>,
    timeout_seconds: u64,
    user_agent: String,
}

impl ClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(api_key))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            api_key: config.api_key,
            base_url: config.base_url,
            http_client: None,
            transport: None,
            rate_limit: config.rate_limit,
            timeout_seconds: config.timeout_seconds,
            user_agent: config.user_agent,
        }
    }

    /// Override the API base URL (default `https://katapultpro.com/api`)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use a preconfigured `reqwest::Client`; timeout and user agent settings
    /// on this builder are then ignored
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Use a custom transport; takes precedence over [`Self::http_client`]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Space outgoing requests at least `interval` apart (see
    /// [`crate::DEFAULT_RATE_LIMIT_INTERVAL`]); zero disables pacing
    pub fn rate_limit(mut self, interval: Duration) -> Self {
        self.rate_limit = Some(interval);
        self
    }

    pub fn timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<KatapultClient, KatapultError> {
        if self.api_key.expose_secret().is_empty() {
            return Err(ConfigError::MissingApiKey.into());
        }

        let raw_base = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(raw_base).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw_base.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw_base.to_string(),
                reason: "URL cannot carry a path".to_string(),
            }
            .into());
        }

        let base_transport: Arc<dyn Transport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(client),
            (None, None) => Arc::new(
                Client::builder()
                    .timeout(Duration::from_secs(self.timeout_seconds))
                    .user_agent(&self.user_agent)
                    .build()
                    .map_err(|e| {
                        ConfigError::InvalidConfiguration(format!(
                            "Failed to build HTTP client: {}",
                            e
                        ))
                    })?,
            ),
        };

        let pacer = self.rate_limit.and_then(Pacer::new);
        let rate_limit = pacer.as_ref().map(Pacer::interval);
        let transport: Arc<dyn Transport> = match pacer {
            Some(pacer) => Arc::new(PacedTransport::new(base_transport, pacer)),
            None => base_transport,
        };

        Ok(KatapultClient {
            inner: Arc::new(ClientInner {
                base_url,
                api_key: self.api_key,
                transport,
                rate_limit,
                last_meta: RwLock::new(None),
            }),
        })
    }
}

/// Katapult Pro API client.
///
/// Cheap to clone and safe to share across tasks; clones share the pacing
/// state and the last rate-limit snapshot.
#[derive(Clone)]
pub struct KatapultClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    base_url: Url,
    api_key: Secret<String>,
    transport: Arc<dyn Transport>,
    rate_limit: Option<Duration>,
    last_meta: RwLock<Option<Meta>>,
}

impl std::fmt::Debug for KatapultClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KatapultClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("rate_limit", &self.inner.rate_limit)
            .field("last_meta", &self.last_meta())
            .finish_non_exhaustive()
    }
}

impl KatapultClient {
    /// Create a client with default settings; fails on an empty API key
    pub fn new(api_key: impl Into<String>) -> Result<Self, KatapultError> {
        ClientBuilder::new(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, KatapultError> {
        ClientBuilder::from_config(config).build()
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Pacing interval, `None` when pacing is disabled
    pub fn rate_limit(&self) -> Option<Duration> {
        self.inner.rate_limit
    }

    /// Token bucket state from the most recent successful response.
    ///
    /// Cleared when a call starts and only set again if that call succeeds with
    /// a `meta` field; failing calls expose their snapshot on the error instead.
    pub fn last_meta(&self) -> Option<Meta> {
        *self.inner.last_meta.read()
    }

    /// GET `path` and decode the envelope's `data`
    #[instrument(skip(self), fields(method = "GET"))]
    pub async fn get<T: DeserializeOwned + Send>(
        &self,
        path: &str,
    ) -> Result<Option<T>, KatapultError> {
        self.dispatch(Method::GET, path, &[], RequestBody::Empty).await
    }

    /// POST a JSON body to `path`
    #[instrument(skip(self, body), fields(method = "POST"))]
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, KatapultError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned + Send,
    {
        let body = RequestBody::json(body)?;
        self.dispatch(Method::POST, path, &[], body).await
    }

    /// PUT a JSON body to `path`
    #[instrument(skip(self, body), fields(method = "PUT"))]
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, KatapultError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned + Send,
    {
        let body = RequestBody::json(body)?;
        self.dispatch(Method::PUT, path, &[], body).await
    }

    /// DELETE `path`; any response `data` is discarded
    #[instrument(skip(self), fields(method = "DELETE"))]
    pub async fn delete(&self, path: &str) -> Result<(), KatapultError> {
        self.dispatch::<IgnoredAny>(Method::DELETE, path, &[], RequestBody::Empty)
            .await
            .map(|_| ())
    }

    /// Send raw bytes with an explicit content type, e.g. a JPEG upload
    #[instrument(skip(self, query_params, body), fields(body_len = body.len()))]
    pub async fn send_raw<T: DeserializeOwned + Send>(
        &self,
        method: Method,
        path: &str,
        query_params: &[(&str, &str)],
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<Option<T>, KatapultError> {
        self.dispatch(method, path, query_params, RequestBody::raw(content_type, body)).await
    }

    /// Single execution path shared by every verb
    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query_params: &[(&str, &str)],
        body: RequestBody,
    ) -> Result<Option<T>, KatapultError> {
        *self.inner.last_meta.write() = None;

        let (status, bytes) = rest::execute(
            self.inner.transport.as_ref(),
            method,
            &self.inner.base_url,
            path,
            query_params,
            body,
            self.inner.api_key.expose_secret(),
        )
        .await?;

        let decoded = decode_response::<T>(status, &bytes)?;
        *self.inner.last_meta.write() = decoded.meta;
        Ok(decoded.data)
    }
}

#[async_trait]
impl Requester for KatapultClient {
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query_params: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<Option<T>, KatapultError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned + Send,
    {
        let body = match body {
            Some(body) => RequestBody::json(body)?,
            None => RequestBody::Empty,
        };
        self.dispatch(method, path, query_params, body).await
    }

    async fn request_with_body<T>(
        &self,
        method: Method,
        path: &str,
        query_params: &[(&str, &str)],
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<Option<T>, KatapultError>
    where
        T: DeserializeOwned + Send,
    {
        self.dispatch(method, path, query_params, RequestBody::raw(content_type, body)).await
    }
}
