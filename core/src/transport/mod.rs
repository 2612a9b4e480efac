//! The injected HTTP collaborator.
//!
//! `ProductGateway` never talks to the network itself; it hands each
//! `HttpRequest` to an `HttpTransport` and gets back either an
//! `HttpResponse` or a `TransportError`. Bring any HTTP library by
//! implementing the trait, or enable one of the bundled implementations:
//!
//! - `reqwest` (default): [`ReqwestTransport`], truly async.
//! - `ureq`: [`UreqTransport`], blocking, runs the exchange inline.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

#[cfg(feature = "reqwest")]
mod reqwest_impl;
#[cfg(feature = "ureq")]
mod ureq_impl;

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestTransport;
#[cfg(feature = "ureq")]
pub use ureq_impl::UreqTransport;

/// Executes one HTTP exchange.
///
/// Return `Ok` whenever a response was received, including 4xx and 5xx
/// statuses; status interpretation belongs to `ProductClient`. Return `Err`
/// only when no response is available (connection refused, DNS failure,
/// timeout, unreadable body).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}
