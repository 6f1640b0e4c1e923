use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
}

pub type Catalog = Arc<Vec<Item>>;

fn seed_catalog() -> Catalog {
    let names = ["alpha", "beta", "gamma", "delta", "epsilon"];
    Arc::new(
        names
            .iter()
            .map(|name| Item {
                id: Uuid::new_v4(),
                name: name.to_string(),
            })
            .collect(),
    )
}

pub fn app() -> Router {
    Router::new()
        .route("/items", get(list_items))
        .route("/echo", post(echo))
        .route("/status/{code}", get(status))
        .with_state(seed_catalog())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_items(
    State(catalog): State<Catalog>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Item>> {
    let limit = params.limit.unwrap_or(catalog.len());
    Json(catalog.iter().take(limit).cloned().collect())
}

async fn echo(body: String) -> String {
    body
}

async fn status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}
