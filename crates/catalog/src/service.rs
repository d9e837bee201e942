use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use crate::error::{CatalogError, CatalogResult};
use crate::product::{Product, ProductDetails, ProductId, ProductPatch, ProductType};

/// The authoritative in-memory product catalog.
///
/// Owns the id-to-product map plus the monotonically increasing id counter,
/// both behind a single lock so that id allocation and every
/// check-then-mutate pair are atomic under a multi-threaded runtime.
/// Construct one instance at startup and inject it into the HTTP layer;
/// tests build their own fresh instances.
///
/// The service trusts its input: payload validation happens at the boundary
/// (see [`crate::validate`]) strictly before any operation here is invoked.
#[derive(Debug)]
pub struct CatalogService {
    state: RwLock<CatalogState>,
}

/// Ids are strictly increasing and never reused, so `BTreeMap` iteration
/// order is creation order.
#[derive(Debug)]
struct CatalogState {
    products: BTreeMap<u64, Product>,
    next_id: u64,
}

impl CatalogService {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CatalogState {
                products: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// All products in creation order, optionally restricted to one type.
    pub fn list(&self, filter: Option<ProductType>) -> Vec<Product> {
        let state = self.read();
        state
            .products
            .values()
            .filter(|p| filter.is_none_or(|kind| p.details.kind == kind))
            .cloned()
            .collect()
    }

    /// Store a new product under the next unused id.
    ///
    /// Never fails and never reuses an id, even after deletions.
    pub fn create(&self, details: ProductDetails) -> ProductId {
        let mut state = self.write();
        let id = state.next_id;
        state.next_id += 1;
        state.products.insert(id, Product { id, details });
        ProductId { id }
    }

    pub fn get(&self, id: u64) -> CatalogResult<Product> {
        self.read()
            .products
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    /// Merge `patch` into the stored details: present fields overwrite,
    /// absent fields keep their prior values, the id is never touched.
    pub fn update(&self, id: u64, patch: ProductPatch) -> CatalogResult<Product> {
        let mut state = self.write();
        let product = state.products.get_mut(&id).ok_or(CatalogError::NotFound)?;
        product.details.apply(patch);
        Ok(product.clone())
    }

    pub fn delete(&self, id: u64) -> CatalogResult<()> {
        self.write()
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(CatalogError::NotFound)
    }

    // Operations never leave the state partially mutated, so a poisoned
    // lock is recovered rather than propagated.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str, kind: ProductType, inventory: i64) -> ProductDetails {
        ProductDetails {
            name: name.to_string(),
            kind,
            inventory,
            cost: 0.0,
        }
    }

    #[test]
    fn created_product_is_readable_by_its_id() {
        let catalog = CatalogService::new();
        let d = details("Pen", ProductType::Other, 50);

        let ProductId { id } = catalog.create(d.clone());
        assert_eq!(id, 1);

        let product = catalog.get(id).unwrap();
        assert_eq!(product.id, id);
        assert_eq!(product.details, d);
    }

    #[test]
    fn ids_strictly_increase_and_are_never_reused() {
        let catalog = CatalogService::new();
        let a = catalog.create(details("a", ProductType::Book, 1)).id;
        let b = catalog.create(details("b", ProductType::Book, 1)).id;
        assert!(b > a);

        catalog.delete(b).unwrap();
        let c = catalog.create(details("c", ProductType::Book, 1)).id;
        assert!(c > b, "id {b} must not be reused after deletion, got {c}");
    }

    #[test]
    fn list_filters_by_type_in_creation_order() {
        let catalog = CatalogService::new();
        catalog.create(details("a", ProductType::Book, 1));
        catalog.create(details("b", ProductType::Food, 1));
        catalog.create(details("c", ProductType::Book, 1));

        let all: Vec<_> = catalog.list(None).into_iter().map(|p| p.details.name).collect();
        assert_eq!(all, ["a", "b", "c"]);

        let books: Vec<_> = catalog
            .list(Some(ProductType::Book))
            .into_iter()
            .map(|p| p.details.name)
            .collect();
        assert_eq!(books, ["a", "c"]);

        assert!(catalog.list(Some(ProductType::Gadget)).is_empty());
    }

    #[test]
    fn update_merges_only_present_fields() {
        let catalog = CatalogService::new();
        let id = catalog.create(details("Pen", ProductType::Other, 50)).id;

        let updated = catalog
            .update(
                id,
                ProductPatch {
                    inventory: Some(10),
                    ..ProductPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.details.name, "Pen");
        assert_eq!(updated.details.kind, ProductType::Other);
        assert_eq!(updated.details.inventory, 10);
        assert_eq!(updated.details.cost, 0.0);
        assert_eq!(catalog.get(id).unwrap(), updated);
    }

    #[test]
    fn operations_on_absent_ids_fail_not_found() {
        let catalog = CatalogService::new();
        assert_eq!(catalog.get(1), Err(CatalogError::NotFound));
        assert_eq!(
            catalog.update(1, ProductPatch::default()),
            Err(CatalogError::NotFound)
        );
        assert_eq!(catalog.delete(1), Err(CatalogError::NotFound));
    }

    #[test]
    fn deleted_product_is_gone_for_every_operation() {
        let catalog = CatalogService::new();
        let id = catalog.create(details("Pen", ProductType::Other, 50)).id;

        catalog.delete(id).unwrap();

        assert_eq!(catalog.get(id), Err(CatalogError::NotFound));
        assert_eq!(
            catalog.update(id, ProductPatch::default()),
            Err(CatalogError::NotFound)
        );
        assert_eq!(catalog.delete(id), Err(CatalogError::NotFound));
        assert!(catalog.list(None).is_empty());
    }

    #[test]
    fn concurrent_creates_assign_unique_ids() {
        use std::sync::Arc;

        let catalog = Arc::new(CatalogService::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let catalog = Arc::clone(&catalog);
                std::thread::spawn(move || {
                    (0..50)
                        .map(|_| catalog.create(details("x", ProductType::Other, 1)).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8 * 50);
        assert_eq!(catalog.list(None).len(), 8 * 50);
    }
}
