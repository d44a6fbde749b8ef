use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use crate::models::{Product, ProductId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("product not found: ID {0}")]
    NotFound(ProductId),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Products plus the id counter. Guarded together so an id is never
/// handed out without its record being inserted.
#[derive(Debug)]
struct Catalog {
    products: HashMap<ProductId, Product>,
    next_id: ProductId,
}

/// In-memory product catalog behind a single readers-writer lock.
///
/// `add` and `update_stock` take the lock exclusively; `get`, `list` and
/// `len` share it. Each guard lives for one call only, so a caller doing
/// `get` then `update_stock` may see another writer in between.
#[derive(Debug)]
pub struct Store {
    inner: RwLock<Catalog>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Catalog {
                products: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    // None of the critical sections can panic, so a poisoned lock still
    // holds a consistent catalog.
    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores a new product under the next id and returns a copy of it.
    pub fn add(
        &self,
        name: impl Into<String>,
        price: f64,
        stock: i64,
        category: impl Into<String>,
    ) -> Product {
        let mut catalog = self.write();

        let id = catalog.next_id;
        let product = Product {
            id,
            name: name.into(),
            price,
            stock,
            category: category.into(),
            created_at: Utc::now(),
        };
        catalog.products.insert(id, product.clone());
        catalog.next_id += 1;

        debug!(id, name = %product.name, "Product added");
        product
    }

    pub fn get(&self, id: ProductId) -> StoreResult<Product> {
        self.read()
            .products
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Snapshot of every product. Order is unspecified.
    pub fn list(&self) -> Vec<Product> {
        self.read().products.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `delta` to the product's stock. No floor at zero; the sum wraps
    /// at the `i64` bounds.
    pub fn update_stock(&self, id: ProductId, delta: i64) -> StoreResult<Product> {
        let mut catalog = self.write();
        let product = catalog
            .products
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;

        product.stock = product.stock.wrapping_add(delta);
        debug!(id, name = %product.name, stock = product.stock, "Stock updated");
        Ok(product.clone())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
