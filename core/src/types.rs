//! Domain DTOs for the product API.
//!
//! # Design
//! The client never interprets product fields. Everything except the
//! server-assigned `id` lives in an untyped JSON map, so whatever the server
//! sends (large numbers, nulls, missing names, members added later) comes
//! back out byte-for-byte equivalent. The typed accessors and builders are
//! conveniences over that map, not a schema.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product as returned by the API. `id` is assigned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    #[serde(flatten)]
    pub fields: ProductDraft,
}

/// The writable part of a product, sent as the body of create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductDraft {
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self::default().with_field("name", name.into())
    }

    pub fn with_quantity(self, quantity: i64) -> Self {
        self.with_field("quantity", quantity)
    }

    pub fn with_price(self, price: f64) -> Self {
        self.with_field("price", price)
    }

    /// Set an arbitrary member, replacing any previous value.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    pub fn quantity(&self) -> Option<i64> {
        self.get("quantity").and_then(Value::as_i64)
    }

    pub fn price(&self) -> Option<f64> {
        self.get("price").and_then(Value::as_f64)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for ProductDraft {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
