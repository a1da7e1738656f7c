use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product catalog entry
///
/// # Invariants
/// - `price` is positive, with at most 12 significant digits and 2 decimal
///   places (enforced at the API boundary)
/// - `stock` is never negative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i64,
    pub category: String,
    pub active: bool,
    pub images: Vec<String>,
}

/// Fields required to create a product
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i64,
    pub category: String,
}

/// Partial update payload for a product
///
/// Only fields present in the payload overwrite the stored record;
/// absent fields retain their prior value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub active: Option<bool>,
}

impl Product {
    /// Creates a new product with a fresh identifier
    ///
    /// New products start active with an empty image list.
    pub fn create(new: NewProduct) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            price: new.price,
            stock: new.stock,
            category: new.category,
            active: true,
            images: Vec::new(),
        }
    }

    /// Returns a copy with the patch's present fields applied
    pub fn merged(&self, patch: &ProductPatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            description: patch
                .description
                .clone()
                .or_else(|| self.description.clone()),
            price: patch.price.unwrap_or(self.price),
            stock: patch.stock.unwrap_or(self.stock),
            category: patch
                .category
                .clone()
                .unwrap_or_else(|| self.category.clone()),
            active: patch.active.unwrap_or(self.active),
            images: self.images.clone(),
        }
    }
}

/// Validates a price against the catalog constraints
///
/// # Validation Rules
/// - Must be greater than zero
/// - At most 2 decimal places
/// - At most 12 significant digits
pub fn validate_price(price: Decimal) -> Result<(), String> {
    if price <= Decimal::ZERO {
        return Err("price must be greater than zero".to_string());
    }
    if price.scale() > 2 {
        return Err("price supports at most 2 decimal places".to_string());
    }
    if price.mantissa().abs().to_string().len() > 12 {
        return Err("price supports at most 12 digits".to_string());
    }
    Ok(())
}
