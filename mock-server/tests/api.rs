use std::convert::Infallible;

use axum::{
    http::{self, Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use mock_server::{app, Product};
use tower::{Service, ServiceExt};

async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

async fn call<S>(app: &mut S, request: Request<String>) -> Response
where
    S: Service<Request<String>, Response = Response, Error = Infallible>,
{
    ServiceExt::ready(app).await.unwrap().call(request).await.unwrap()
}

// --- list ---

#[tokio::test]
async fn list_products_empty_is_no_content() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/products"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_product_returns_201() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/products",
            r#"{"name":"Widget","quantity":3,"price":2.5}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let product: Product = body_json(resp).await;
    assert_eq!(product.id, 1);
    assert_eq!(product.name, "Widget");
    assert_eq!(product.quantity, 3);
    assert_eq!(product.price, 2.5);
}

#[tokio::test]
async fn create_product_blank_name_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/api/products", r#"{"name":" "}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_product_missing_name_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/api/products", r#"{"quantity":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_product_not_found() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/products/42"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_product_bad_id_returns_400() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/products/not-a-number"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_product_not_found() {
    let resp = app()
        .oneshot(json_request("PUT", "/api/products/42", r#"{"name":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_product_not_found() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/api/products/42"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_all_products_clears_store() {
    let mut app = app().into_service();

    for name in ["A", "B"] {
        let body = format!(r#"{{"name":"{name}"}}"#);
        let resp = call(&mut app, json_request("POST", "/api/products", &body)).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = call(&mut app, empty_request("DELETE", "/api/products")).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = call(&mut app, empty_request("GET", "/api/products")).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    let mut app = app().into_service();

    // create
    let resp = call(
        &mut app,
        json_request("POST", "/api/products", r#"{"name":"Lamp","quantity":2,"price":15.0}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Product = body_json(resp).await;
    let id = created.id;

    // ids keep increasing
    let resp = call(&mut app, json_request("POST", "/api/products", r#"{"name":"Desk"}"#)).await;
    let second: Product = body_json(resp).await;
    assert_eq!(second.id, id + 1);

    // list, ordered by id
    let resp = call(&mut app, empty_request("GET", "/api/products")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Product> = body_json(resp).await;
    assert_eq!(products, vec![created.clone(), second.clone()]);

    // get
    let resp = call(&mut app, empty_request("GET", &format!("/api/products/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Product = body_json(resp).await;
    assert_eq!(fetched, created);

    // update replaces every writable field
    let resp = call(
        &mut app,
        json_request(
            "PUT",
            &format!("/api/products/{id}"),
            r#"{"name":"Floor lamp","quantity":5,"price":20.0}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Product = body_json(resp).await;
    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Floor lamp");
    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.price, 20.0);

    // delete
    let resp = call(&mut app, empty_request("DELETE", &format!("/api/products/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // get after delete: 404
    let resp = call(&mut app, empty_request("GET", &format!("/api/products/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // only the second product remains
    let resp = call(&mut app, empty_request("GET", "/api/products")).await;
    let products: Vec<Product> = body_json(resp).await;
    assert_eq!(products, vec![second]);
}
