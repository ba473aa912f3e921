use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::{
    AppState,
    error::Result,
    models::{
        CreateProductRequest, CreatedResponse, MessageResponse, Product, ProductChanges,
        ProductFilter, ProductQuery, UpdatedResponse,
    },
};

pub async fn create_product(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let Json(payload) = payload?;
    let id = state.products.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Product added successfully".to_string(),
            id,
        }),
    ))
}

pub async fn list_products(
    State(state): State<AppState>,
    params: std::result::Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>> {
    let Query(params) = params?;
    let filter = ProductFilter::from(params);
    let products = state.products.list(&filter).await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<Product>> {
    let Path(id) = id?;
    let product = state.products.get(id).await?;

    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
    payload: std::result::Result<Json<ProductChanges>, JsonRejection>,
) -> Result<Json<UpdatedResponse>> {
    let Path(id) = id?;
    let Json(changes) = payload?;
    let outcome = state.products.update(id, changes).await?;

    Ok(Json(UpdatedResponse {
        message: "Product updated successfully".to_string(),
        alert: outcome.low_stock_alert,
    }))
}

pub async fn delete_product(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>> {
    let Path(id) = id?;
    state.products.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Product soft-deleted successfully".to_string(),
    }))
}
