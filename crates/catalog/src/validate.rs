//! Raw-input validation for product payloads.
//!
//! Explicit per-field validator functions over `serde_json::Value`, composed
//! into one aggregate pass per entity. Every violation in the payload is
//! collected and reported together; the pass never short-circuits on the
//! first offending field. Pure functions: input in, value-or-violations out.

use serde_json::Value;

use crate::error::{FieldViolation, ValidationErrors};
use crate::product::{ProductDetails, ProductPatch, ProductType};

pub const INVENTORY_MIN: i64 = 1;
pub const INVENTORY_MAX: i64 = 9999;
pub const COST_MIN: f64 = 0.0;
pub const COST_MAX: f64 = 999.99;

/// Validate a create payload: `name`, `type` and `inventory` are required,
/// `cost` is optional and defaults to 0.00 when omitted.
pub fn parse_details(body: &Value) -> Result<ProductDetails, ValidationErrors> {
    let obj = require_object(body)?;
    let mut violations = Vec::new();

    let name = required_field(obj, "name", check_name, &mut violations);
    let kind = required_field(obj, "type", check_type, &mut violations);
    let inventory = required_field(obj, "inventory", check_inventory, &mut violations);
    let cost = match obj.get("cost") {
        None => Some(COST_MIN),
        Some(value) => collect(check_cost("cost", value), &mut violations),
    };

    match (name, kind, inventory, cost) {
        (Some(name), Some(kind), Some(inventory), Some(cost)) if violations.is_empty() => {
            Ok(ProductDetails { name, kind, inventory, cost })
        }
        _ => Err(ValidationErrors(violations)),
    }
}

/// Validate an update payload: every field is optional; fields present are
/// checked with the same rules as on create, fields absent stay absent in
/// the resulting patch. Unknown fields are ignored.
pub fn parse_patch(body: &Value) -> Result<ProductPatch, ValidationErrors> {
    let obj = require_object(body)?;
    let mut violations = Vec::new();

    let patch = ProductPatch {
        name: optional_field(obj, "name", check_name, &mut violations),
        kind: optional_field(obj, "type", check_type, &mut violations),
        inventory: optional_field(obj, "inventory", check_inventory, &mut violations),
        cost: optional_field(obj, "cost", check_cost, &mut violations),
    };

    if violations.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationErrors(violations))
    }
}

/// The enumeration-mismatch violation, reusable for non-body locations
/// (the `type` query filter reports the same shape at `["query", "type"]`).
pub fn enum_member_violation(loc: impl IntoIterator<Item = impl Into<String>>) -> FieldViolation {
    let permitted = ProductType::ALL
        .iter()
        .map(|k| format!("'{k}'"))
        .collect::<Vec<_>>()
        .join(", ");
    FieldViolation::new(
        loc,
        format!("value is not a valid enumeration member; permitted: {permitted}"),
        "type_error.enum",
    )
}

/// The not-an-integer violation, reusable for non-body locations (the
/// `{id}` path segment reports it at `["path", "product_id"]`).
pub fn integer_violation(loc: impl IntoIterator<Item = impl Into<String>>) -> FieldViolation {
    FieldViolation::new(loc, "value is not a valid integer", "type_error.integer")
}

fn require_object(body: &Value) -> Result<&serde_json::Map<String, Value>, ValidationErrors> {
    body.as_object().ok_or_else(|| {
        ValidationErrors(vec![FieldViolation::new(
            ["body"],
            "value is not a valid dict",
            "type_error.dict",
        )])
    })
}

fn required_field<T>(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    check: impl Fn(&str, &Value) -> Result<T, FieldViolation>,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    match obj.get(field) {
        None => {
            violations.push(FieldViolation::new(
                ["body", field],
                "field required",
                "value_error.missing",
            ));
            None
        }
        Some(value) => collect(check(field, value), violations),
    }
}

fn optional_field<T>(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    check: impl Fn(&str, &Value) -> Result<T, FieldViolation>,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    obj.get(field)
        .and_then(|value| collect(check(field, value), violations))
}

fn collect<T>(result: Result<T, FieldViolation>, violations: &mut Vec<FieldViolation>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(violation) => {
            violations.push(violation);
            None
        }
    }
}

fn check_name(field: &str, value: &Value) -> Result<String, FieldViolation> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(FieldViolation::new(
            ["body", field],
            "str type expected",
            "type_error.str",
        )),
    }
}

fn check_type(field: &str, value: &Value) -> Result<ProductType, FieldViolation> {
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| enum_member_violation(["body", field]))
}

/// Booleans, fractional numbers and numeric strings are all rejected as
/// not-an-integer; only whole JSON numbers pass the type check.
fn check_inventory(field: &str, value: &Value) -> Result<i64, FieldViolation> {
    match value.as_i64() {
        Some(n) if (INVENTORY_MIN..=INVENTORY_MAX).contains(&n) => Ok(n),
        Some(_) => Err(range_violation(field)),
        // Whole numbers above i64::MAX are integers, just absurdly out of range.
        None if value.as_u64().is_some() => Err(range_violation(field)),
        None => Err(integer_violation(["body", field])),
    }
}

fn range_violation(field: &str) -> FieldViolation {
    FieldViolation::new(
        ["body", field],
        format!("Value should be greater than {INVENTORY_MIN} and less than {INVENTORY_MAX}"),
        "value_error",
    )
}

/// An explicit `null` is rejected distinctly from omission: omission means
/// "use the default", null means the client sent an absent-value marker.
fn check_cost(field: &str, value: &Value) -> Result<f64, FieldViolation> {
    if value.is_null() {
        return Err(FieldViolation::new(
            ["body", field],
            "none is not an allowed value",
            "type_error.none.not_allowed",
        ));
    }
    match value.as_f64() {
        Some(c) if c < COST_MIN => Err(FieldViolation::new(
            ["body", field],
            "ensure this value is greater than or equal to 0",
            "value_error.number.not_ge",
        )),
        Some(c) if c > COST_MAX => Err(FieldViolation::new(
            ["body", field],
            format!("ensure this value is less than or equal to {COST_MAX}"),
            "value_error.number.not_le",
        )),
        Some(c) => Ok(c),
        None => Err(FieldViolation::new(
            ["body", field],
            "value is not a valid float",
            "type_error.float",
        )),
    }
}
