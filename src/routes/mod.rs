mod health;
mod products;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
}

async fn home() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Product Inventory API!" }))
}
