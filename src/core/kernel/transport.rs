use async_trait::async_trait;
use reqwest::{Client, Request, Response};
use std::sync::Arc;

/// Raw network transport: sends one fully built request and returns the response.
///
/// `reqwest::Client` is the production implementation. Wrappers such as
/// [`crate::core::kernel::PacedTransport`] compose over any `Transport`, and
/// tests can inject their own.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response, reqwest::Error>;
}

#[async_trait]
impl Transport for Client {
    async fn send(&self, request: Request) -> Result<Response, reqwest::Error> {
        self.execute(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: Request) -> Result<Response, reqwest::Error> {
        (**self).send(request).await
    }
}
