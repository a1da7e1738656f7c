use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validate_length;
use crate::api::errors::ApiError;
use crate::domain::product::{self, NewProduct, Product, ProductPatch};
use crate::state::AppState;

/// Request body for creating a product
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i64,
    pub category: String,
}

impl CreateProductRequest {
    fn validate(&self) -> Result<(), String> {
        validate_length("name", &self.name, 2, 80)?;
        if let Some(description) = &self.description {
            if description.chars().count() > 500 {
                return Err("description must be at most 500 characters".to_string());
            }
        }
        product::validate_price(self.price)?;
        if self.stock < 0 {
            return Err("stock cannot be negative".to_string());
        }
        validate_length("category", &self.category, 2, 50)?;
        Ok(())
    }
}

/// Query parameters for the catalog listing
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
}

/// Product representation returned by the API
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i64,
    pub category: String,
    pub active: bool,
    pub images: Vec<String>,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            stock: product.stock,
            category: product.category.clone(),
            active: product.active,
            images: product.images.clone(),
        }
    }
}

fn validate_patch(patch: &ProductPatch) -> Result<(), String> {
    if let Some(name) = &patch.name {
        validate_length("name", name, 2, 80)?;
    }
    if let Some(description) = &patch.description {
        if description.chars().count() > 500 {
            return Err("description must be at most 500 characters".to_string());
        }
    }
    if let Some(price) = patch.price {
        product::validate_price(price)?;
    }
    if let Some(stock) = patch.stock {
        if stock < 0 {
            return Err("stock cannot be negative".to_string());
        }
    }
    if let Some(category) = &patch.category {
        validate_length("category", category, 2, 50)?;
    }
    Ok(())
}

/// Create a new product
///
/// POST /products/
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    req.validate().map_err(ApiError::unprocessable_entity)?;

    let product = state
        .products
        .create(NewProduct {
            name: req.name,
            description: req.description,
            price: req.price,
            stock: req.stock,
            category: req.category,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(&product))))
}

/// List the catalog, filtered when either query parameter is present
///
/// GET /products/?q=&category=
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    // Empty filter values are treated as absent
    let q = params.q.as_deref().filter(|s| !s.is_empty());
    let category = params.category.as_deref().filter(|s| !s.is_empty());

    let products = if q.is_some() || category.is_some() {
        state.products.search(q, category).await?
    } else {
        state.products.list().await?
    };

    Ok(Json(products.iter().map(ProductResponse::from).collect()))
}

/// Get a product by ID
///
/// GET /products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state.products.get(id).await?;
    Ok(Json(ProductResponse::from(&product)))
}

/// Partially update a product
///
/// PUT /products/:id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<ProductResponse>, ApiError> {
    validate_patch(&patch).map_err(ApiError::unprocessable_entity)?;

    let product = state.products.update(id, patch).await?;
    Ok(Json(ProductResponse::from(&product)))
}

/// Increment a product's stock
///
/// POST /products/:id/stock/:amount
pub async fn add_stock(
    State(state): State<AppState>,
    Path((id, amount)): Path<(Uuid, i64)>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state.products.add_stock(id, amount).await?;
    Ok(Json(ProductResponse::from(&product)))
}

/// Delete a product
///
/// DELETE /products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.products.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
