use crate::core::errors::KatapultError;
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Placeholder for calls without a JSON body
pub const NO_BODY: Option<&()> = None;

/// Capability every resource client depends on: perform one API call and
/// unwrap the v3 envelope into `T`.
///
/// [`crate::KatapultClient`] is the network implementation; tests can supply
/// their own to exercise resource clients without I/O. `Ok(None)` means the
/// envelope carried no `data`.
#[async_trait]
pub trait Requester: Send + Sync {
    /// Make a request with an optional JSON body
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query_params: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<Option<T>, KatapultError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned + Send;

    /// Make a request with a raw body and explicit content type (e.g. `image/jpeg`)
    async fn request_with_body<T>(
        &self,
        method: Method,
        path: &str,
        query_params: &[(&str, &str)],
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<Option<T>, KatapultError>
    where
        T: DeserializeOwned + Send;
}
