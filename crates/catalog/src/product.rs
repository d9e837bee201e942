use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of product categories accepted by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Book,
    Food,
    Gadget,
    Other,
}

impl ProductType {
    /// Every permitted member, in declaration order.
    pub const ALL: [ProductType; 4] = [
        ProductType::Book,
        ProductType::Food,
        ProductType::Gadget,
        ProductType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Book => "book",
            ProductType::Food => "food",
            ProductType::Gadget => "gadget",
            ProductType::Other => "other",
        }
    }
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse failure for [`ProductType`]; the caller decides how to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownProductType;

impl FromStr for ProductType {
    type Err = UnknownProductType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "book" => Ok(ProductType::Book),
            "food" => Ok(ProductType::Food),
            "gadget" => Ok(ProductType::Gadget),
            "other" => Ok(ProductType::Other),
            _ => Err(UnknownProductType),
        }
    }
}

/// The user-editable fields of a product, fully populated once validated.
///
/// `cost` defaults to 0.00 when omitted from input; see
/// [`crate::validate::parse_details`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProductType,
    pub inventory: i64,
    pub cost: f64,
}

impl ProductDetails {
    /// Overwrite exactly the fields present in `patch`, leaving the rest
    /// unchanged.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(inventory) = patch.inventory {
            self.inventory = inventory;
        }
        if let Some(cost) = patch.cost {
            self.cost = cost;
        }
    }
}

/// Partial-update representation: each field is either present-with-value
/// or absent. Absent fields are left untouched by [`ProductDetails::apply`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub kind: Option<ProductType>,
    pub inventory: Option<i64>,
    pub cost: Option<f64>,
}

/// A catalog entry: service-assigned identity plus its mutable details.
///
/// The id is assigned at creation, never reused, and never changed by an
/// update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: u64,
    #[serde(flatten)]
    pub details: ProductDetails,
}

/// Projection exposing only the assigned id; the response body of create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductId {
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pen() -> ProductDetails {
        ProductDetails {
            name: "Pen".to_string(),
            kind: ProductType::Other,
            inventory: 50,
            cost: 0.0,
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut details = pen();
        details.apply(ProductPatch::default());
        assert_eq!(details, pen());
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut details = pen();
        details.apply(ProductPatch {
            inventory: Some(10),
            ..ProductPatch::default()
        });
        assert_eq!(details.name, "Pen");
        assert_eq!(details.kind, ProductType::Other);
        assert_eq!(details.inventory, 10);
        assert_eq!(details.cost, 0.0);
    }

    #[test]
    fn product_type_round_trips_through_str() {
        for kind in ProductType::ALL {
            assert_eq!(kind.as_str().parse::<ProductType>(), Ok(kind));
        }
        assert_eq!("toy".parse::<ProductType>(), Err(UnknownProductType));
        assert_eq!("Book".parse::<ProductType>(), Err(UnknownProductType));
    }

    #[test]
    fn product_serializes_flat() {
        let product = Product { id: 1, details: pen() };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Pen",
                "type": "other",
                "inventory": 50,
                "cost": 0.0,
            })
        );
    }

    proptest! {
        /// Property: a full patch is a complete overwrite; a field-by-field
        /// application of it is equivalent to replacing the details.
        #[test]
        fn full_patch_replaces_every_field(
            name in "[A-Za-z0-9 ]{0,40}",
            inventory in 1i64..=9999,
            cost in 0.0f64..=999.99,
        ) {
            let mut details = pen();
            details.apply(ProductPatch {
                name: Some(name.clone()),
                kind: Some(ProductType::Food),
                inventory: Some(inventory),
                cost: Some(cost),
            });
            prop_assert_eq!(details.name, name);
            prop_assert_eq!(details.kind, ProductType::Food);
            prop_assert_eq!(details.inventory, inventory);
            prop_assert_eq!(details.cost, cost);
        }
    }
}
