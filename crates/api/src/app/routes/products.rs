use std::sync::Arc;

use axum::{
    extract::{Extension, OriginalUri, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use products_catalog::{validate, CatalogError, CatalogService, ProductType};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Resolve the `{id}` path segment; non-integer segments get the standard
/// validation envelope rather than a bare framework rejection.
fn parse_id(raw: &str, path: &str) -> Result<u64, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::single_violation_response(path, validate::integer_violation(["path", "product_id"]))
    })
}

pub async fn list_products(
    Extension(catalog): Extension<Arc<CatalogService>>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<dto::ListProductsQuery>,
) -> axum::response::Response {
    let filter = match query.kind.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<ProductType>() {
            Ok(kind) => Some(kind),
            Err(_) => {
                return errors::single_violation_response(
                    uri.path(),
                    validate::enum_member_violation(["query", "type"]),
                )
            }
        },
    };

    let items = catalog
        .list(filter)
        .iter()
        .map(dto::product_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::Value::Array(items))).into_response()
}

pub async fn create_product(
    Extension(catalog): Extension<Arc<CatalogService>>,
    OriginalUri(uri): OriginalUri,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    let details = match validate::parse_details(&body) {
        Ok(details) => details,
        Err(violations) => return errors::validation_error_response(uri.path(), &violations),
    };

    let product_id = catalog.create(details);
    tracing::info!(id = product_id.id, "product created");
    (StatusCode::CREATED, Json(dto::product_id_to_json(product_id))).into_response()
}

pub async fn get_product(
    Extension(catalog): Extension<Arc<CatalogService>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id, uri.path()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match catalog.get(id) {
        Ok(product) => (StatusCode::OK, Json(dto::product_to_json(&product))).into_response(),
        Err(CatalogError::NotFound) => errors::not_found_response(),
    }
}

pub async fn update_product(
    Extension(catalog): Extension<Arc<CatalogService>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    let id = match parse_id(&id, uri.path()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    // Validation strictly precedes the store: a bad payload is a 400 even
    // when the id does not exist.
    let patch = match validate::parse_patch(&body) {
        Ok(patch) => patch,
        Err(violations) => return errors::validation_error_response(uri.path(), &violations),
    };

    match catalog.update(id, patch) {
        Ok(product) => {
            tracing::info!(id, "product updated");
            (StatusCode::OK, Json(dto::product_to_json(&product))).into_response()
        }
        Err(CatalogError::NotFound) => errors::not_found_response(),
    }
}

pub async fn delete_product(
    Extension(catalog): Extension<Arc<CatalogService>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id, uri.path()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match catalog.delete(id) {
        Ok(()) => {
            tracing::info!(id, "product deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(CatalogError::NotFound) => errors::not_found_response(),
    }
}
