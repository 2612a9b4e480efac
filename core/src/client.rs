//! Stateless HTTP request builder and response parser for the product API.
//!
//! # Design
//! `ProductClient` holds only the collection URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Any 2xx status counts as success; the server answers
//! creations with 201, deletions with 204 and an empty collection with 204.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Product, ProductDraft};

const PRODUCTS_PATH: &str = "/api/products";

/// Synchronous, stateless client for the product API.
#[derive(Debug, Clone)]
pub struct ProductClient {
    base_url: String,
}

impl ProductClient {
    /// `api_url` is the API root; requests target `{api_url}/api/products`.
    pub fn new(api_url: &str) -> Self {
        Self {
            base_url: format!("{}{PRODUCTS_PATH}", api_url.trim_end_matches('/')),
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.base_url
    }

    pub fn item_url(&self, id: i64) -> String {
        format!("{}/{id}", self.base_url)
    }

    pub fn build_list_products(&self) -> HttpRequest {
        empty_request(HttpMethod::Get, self.base_url.clone())
    }

    pub fn build_get_product(&self, id: i64) -> HttpRequest {
        empty_request(HttpMethod::Get, self.item_url(id))
    }

    pub fn build_create_product(&self, draft: &ProductDraft) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, self.base_url.clone(), draft)
    }

    pub fn build_update_product(&self, id: i64, draft: &ProductDraft) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, self.item_url(id), draft)
    }

    pub fn build_delete_product(&self, id: i64) -> HttpRequest {
        empty_request(HttpMethod::Delete, self.item_url(id))
    }

    pub fn build_delete_all_products(&self) -> HttpRequest {
        empty_request(HttpMethod::Delete, self.base_url.clone())
    }

    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        check_status(&response)?;
        if response.body.trim().is_empty() {
            return Ok(Vec::new());
        }
        parse_body(&response)
    }

    pub fn parse_get_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        check_status(&response)?;
        parse_body(&response)
    }

    pub fn parse_create_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        check_status(&response)?;
        parse_body(&response)
    }

    pub fn parse_update_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        check_status(&response)?;
        parse_body(&response)
    }

    pub fn parse_delete_product(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_all_products(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn empty_request(method: HttpMethod, path: String) -> HttpRequest {
    HttpRequest {
        method,
        path,
        headers: Vec::new(),
        body: None,
    }
}

fn json_request(method: HttpMethod, path: String, draft: &ProductDraft) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(draft).map_err(|e| ApiError::ClientSide(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

/// Map non-2xx status codes to a server-side failure.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::ServerSide {
        status: response.status,
        status_text: response.status_text().to_string(),
        detail: None,
    })
}

fn parse_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::ServerSide {
        status: response.status,
        status_text: response.status_text().to_string(),
        detail: Some(e.to_string()),
    })
}
