use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub price: f64,
}

impl ProductInput {
    fn validate(&self) -> Result<(), StatusCode> {
        if self.name.trim().is_empty() || self.quantity < 0 || self.price < 0.0 {
            return Err(StatusCode::BAD_REQUEST);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct Store {
    products: BTreeMap<i64, Product>,
    last_id: i64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route(
            "/api/products",
            get(list_products).post(create_product).delete(delete_all_products),
        )
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_products(State(db): State<Db>) -> Response {
    let store = db.read().await;
    if store.products.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    let products: Vec<Product> = store.products.values().cloned().collect();
    Json(products).into_response()
}

async fn create_product(
    State(db): State<Db>,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<Product>), StatusCode> {
    input.validate()?;
    let mut store = db.write().await;
    store.last_id += 1;
    let product = Product {
        id: store.last_id,
        name: input.name,
        quantity: input.quantity,
        price: input.price,
    };
    store.products.insert(product.id, product.clone());
    info!(id = product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

async fn get_product(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, StatusCode> {
    let store = db.read().await;
    store.products.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_product(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>, StatusCode> {
    input.validate()?;
    let mut store = db.write().await;
    let product = store.products.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    product.name = input.name;
    product.quantity = input.quantity;
    product.price = input.price;
    Ok(Json(product.clone()))
}

async fn delete_product(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store.products.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    info!(id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_all_products(State(db): State<Db>) -> StatusCode {
    let mut store = db.write().await;
    let removed = store.products.len();
    store.products.clear();
    info!(removed, "all products deleted");
    StatusCode::NO_CONTENT
}
