use serde::Deserialize;

use products_catalog::{Product, ProductId};

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `GET /products`. The filter value is kept raw here and
/// resolved against the enumeration in the handler, so a bad member gets
/// the standard validation envelope instead of a bare rejection.
#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id,
        "name": product.details.name,
        "type": product.details.kind.as_str(),
        "inventory": product.details.inventory,
        "cost": product.details.cost,
    })
}

pub fn product_id_to_json(product_id: ProductId) -> serde_json::Value {
    serde_json::json!({ "id": product_id.id })
}
