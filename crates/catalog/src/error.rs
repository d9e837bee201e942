//! Domain error model.

use serde::Serialize;
use thiserror::Error;

/// Result type used across the catalog service layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Service-level error.
///
/// Deliberately small: validation failures are detected at the boundary
/// (before the service is invoked) and never reach the store, so the only
/// failure an operation addressing an id can produce is `NotFound`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// No product exists with the requested id.
    #[error("product not found")]
    NotFound,
}

/// A single per-field validation failure.
///
/// `loc` is the path to the offending field (e.g. `["body", "inventory"]`),
/// `msg` a human-readable message, and `kind` a machine-readable tag
/// (serialized as `type` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldViolation {
    pub fn new(
        loc: impl IntoIterator<Item = impl Into<String>>,
        msg: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            loc: loc.into_iter().map(Into::into).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

/// Aggregate of every violation found in one validation pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("validation failed: {}", self.summary())]
pub struct ValidationErrors(pub Vec<FieldViolation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    fn summary(&self) -> String {
        self.0
            .iter()
            .map(|v| format!("{}: {}", v.loc.join("."), v.msg))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
