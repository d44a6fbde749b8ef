use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::{
    error::AppResult,
    models::{decode_body, CreateProduct, Product, ProductId, StockAdjustment},
    AppState,
};

// ── GET /products ────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.store.list();
    info!(count = products.len(), "Listed products");
    Json(products)
}

// ── POST /products ───────────────────────────────────────────────────────────

/// Decodes the raw body so any Content-Type is accepted and every decode
/// failure maps to 400. `null` fields and a `null` body become zero values.
pub async fn create_product(State(state): State<AppState>, body: Bytes) -> AppResult<Json<Product>> {
    let payload: CreateProduct = decode_body(&body)?;

    let product = state
        .store
        .add(payload.name, payload.price, payload.stock, payload.category);

    info!(id = product.id, name = %product.name, "Created product");
    Ok(Json(product))
}

// ── GET /products/:id ────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> AppResult<Json<Product>> {
    let product = state.store.get(id)?;
    Ok(Json(product))
}

// ── PATCH /products/:id/stock ────────────────────────────────────────────────

pub async fn update_stock(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    body: Bytes,
) -> AppResult<Json<Product>> {
    let adjustment: StockAdjustment = decode_body(&body)?;
    let product = state.store.update_stock(id, adjustment.delta)?;

    info!(id, delta = adjustment.delta, stock = product.stock, "Adjusted stock");
    Ok(Json(product))
}
