//! Async product gateway.
//!
//! # Design
//! `ProductGateway` pairs a stateless `ProductClient` with an injected
//! `HttpTransport`. Every operation follows the same pipeline: build the
//! request, run one exchange, parse the response. Any failure on the way is
//! normalized into a single message by `fail`, logged, and returned as
//! `GatewayError`. Nothing is retried, cached or shared between calls.

use tracing::{debug, error, instrument};

use crate::client::ProductClient;
use crate::config::GatewayConfig;
use crate::error::{ApiError, GatewayError};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::HttpTransport;
use crate::types::{Product, ProductDraft};

pub struct ProductGateway<T> {
    client: ProductClient,
    transport: T,
}

impl<T: HttpTransport> ProductGateway<T> {
    pub fn new(api_url: &str, transport: T) -> Self {
        Self {
            client: ProductClient::new(api_url),
            transport,
        }
    }

    pub fn from_config(config: &GatewayConfig, transport: T) -> Self {
        Self::new(&config.api_url, transport)
    }

    pub fn client(&self) -> &ProductClient {
        &self.client
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Product>, GatewayError> {
        let request = self.client.build_list_products();
        self.exchange(request, |c, r| c.parse_list_products(r)).await
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Product, GatewayError> {
        let request = self.client.build_get_product(id);
        self.exchange(request, |c, r| c.parse_get_product(r)).await
    }

    #[instrument(level = "debug", skip(self, draft))]
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, GatewayError> {
        let request = self
            .client
            .build_create_product(draft)
            .map_err(|e| fail(e, self.client.collection_url()))?;
        self.exchange(request, |c, r| c.parse_create_product(r)).await
    }

    #[instrument(level = "debug", skip(self, draft))]
    pub async fn update(&self, id: i64, draft: &ProductDraft) -> Result<Product, GatewayError> {
        let request = self
            .client
            .build_update_product(id, draft)
            .map_err(|e| fail(e, &self.client.item_url(id)))?;
        self.exchange(request, |c, r| c.parse_update_product(r)).await
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn remove(&self, id: i64) -> Result<(), GatewayError> {
        let request = self.client.build_delete_product(id);
        self.exchange(request, |c, r| c.parse_delete_product(r)).await
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn remove_all(&self) -> Result<(), GatewayError> {
        let request = self.client.build_delete_all_products();
        self.exchange(request, |c, r| c.parse_delete_all_products(r)).await
    }

    async fn exchange<R, F>(&self, request: HttpRequest, parse: F) -> Result<R, GatewayError>
    where
        F: FnOnce(&ProductClient, HttpResponse) -> Result<R, ApiError>,
    {
        let url = request.path.clone();
        debug!(method = %request.method, url = %url, "sending request");

        let outcome = match self.transport.send(request).await {
            Ok(response) => {
                debug!(status = response.status, "received response");
                parse(&self.client, response)
            }
            Err(err) => Err(ApiError::from(err)),
        };
        outcome.map_err(|e| fail(e, &url))
    }
}

fn fail(err: ApiError, url: &str) -> GatewayError {
    let message = err.into_message(url);
    error!("{message}");
    GatewayError::new(message)
}
