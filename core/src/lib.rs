//! Client-side gateway for the product REST API.
//!
//! # Overview
//! `ProductGateway` maps list, get, create, update and delete onto HTTP calls
//! against `{api_url}/api/products[/{id}]` and reports every failure as one
//! human-readable message.
//!
//! # Design
//! - `ProductClient` is stateless: it builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network.
//! - The network is reached through an injected `HttpTransport`; reqwest and
//!   ureq implementations ship behind the `reqwest` (default) and `ureq`
//!   features.
//! - Failures are either client side (no response) or server side (error
//!   status or malformed body) and are flattened into `GatewayError`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod transport;
pub mod types;

pub use client::ProductClient;
pub use config::GatewayConfig;
pub use error::{ApiError, ConfigError, GatewayError, TransportError};
pub use gateway::ProductGateway;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::HttpTransport;
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{Product, ProductDraft};
