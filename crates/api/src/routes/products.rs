//! Product route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;

use stylefeed_core::ProductId;

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::views::{self, ProductWithVendor};

/// Create the product routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/trending", get(trending))
        .route("/{id}", get(show))
}

/// Response for product listings.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductWithVendor>,
}

/// Response for the product detail.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: ProductWithVendor,
}

/// List all products with vendors attached.
pub async fn index(State(state): State<AppState>) -> Json<ProductsResponse> {
    let store = state.store();
    let products = views::products_with_vendor(&store.products(), &store.users());

    Json(ProductsResponse { products })
}

/// List the top 3 products by views, vendors attached.
pub async fn trending(State(state): State<AppState>) -> Json<ProductsResponse> {
    let store = state.store();
    let products = views::trending_products(&store.products(), &store.users());

    Json(ProductsResponse { products })
}

/// Product detail. Each request counts as a view.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>> {
    let store = state.store();

    let product = store
        .record_product_view(&ProductId::new(id))
        .ok_or(AppError::EntityNotFound("Product"))?;
    let vendor = store.user(&product.vendor_id);

    Ok(Json(ProductResponse {
        product: ProductWithVendor { product, vendor },
    }))
}
