use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Item};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- items ---

#[tokio::test]
async fn list_items_returns_seeded_catalog() {
    let app = app();
    let resp = app.oneshot(get_request("/items")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<Item> = body_json(resp).await;
    assert_eq!(items.len(), 5);
    assert_eq!(items[0].name, "alpha");
}

#[tokio::test]
async fn list_items_honors_limit() {
    let app = app();
    let resp = app.oneshot(get_request("/items?limit=2")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<Item> = body_json(resp).await;
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn list_items_limit_beyond_catalog_returns_all() {
    let app = app();
    let resp = app.oneshot(get_request("/items?limit=50")).await.unwrap();

    let items: Vec<Item> = body_json(resp).await;
    assert_eq!(items.len(), 5);
}

// --- echo ---

#[tokio::test]
async fn echo_returns_body_unchanged() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/echo")
                .body(r#"{"name":"alpha"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], br#"{"name":"alpha"}"#);
}

// --- status ---

#[tokio::test]
async fn status_endpoint_returns_requested_code() {
    let app = app();
    let resp = app.oneshot(get_request("/status/404")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn status_endpoint_rejects_invalid_code() {
    let app = app();
    let resp = app.oneshot(get_request("/status/99")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
