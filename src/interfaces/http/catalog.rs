use super::AppState;
use crate::domain::order::{PickupLocation, Size};
use crate::domain::product::{Product, ProductId};
use crate::error::StorefrontError;
use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

/// A product plus the choices offered on its detail page.
#[derive(Debug, Serialize)]
pub struct ProductDetail {
    pub product: Product,
    pub sizes: &'static [Size],
    pub pickup_locations: &'static [PickupLocation],
}

/// `GET /products`
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.products().to_vec())
}

/// `GET /products/{id}`
///
/// An id that is not a number names no product, so it is a 404 as well.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductDetail>, StorefrontError> {
    let product = id
        .parse::<ProductId>()
        .ok()
        .and_then(|product_id| state.catalog.get(product_id))
        .cloned()
        .ok_or(StorefrontError::ProductNotFound(id))?;

    Ok(Json(ProductDetail {
        product,
        sizes: &Size::ALL,
        pickup_locations: &PickupLocation::ALL,
    }))
}
