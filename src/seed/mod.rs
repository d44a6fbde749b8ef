use tracing::{info, warn};

use crate::models::Product;
use crate::store::Store;

/// (name, price, stock, category)
static DEMO_PRODUCTS: &[(&str, f64, i64, &str)] = &[
    ("Laptop", 89800.0, 10, "Electronics"),
    ("Mouse", 2980.0, 50, "Accessories"),
    ("Keyboard", 5980.0, 30, "Accessories"),
    ("Monitor", 29800.0, 15, "Electronics"),
];

/// Stock adjustments applied by the demo run: (id, delta).
static DEMO_ADJUSTMENTS: &[(u64, i64)] = &[(1, 5), (2, -10)];

/// Insert the demo catalog, returning the stored records in id order.
pub fn seed_demo_products(store: &Store) -> Vec<Product> {
    let products: Vec<Product> = DEMO_PRODUCTS
        .iter()
        .map(|&(name, price, stock, category)| store.add(name, price, stock, category))
        .collect();

    info!(count = products.len(), "Seeded demo products");
    products
}

/// Render products as a console listing, sorted by id.
pub fn render_catalog(products: &[Product]) -> String {
    let mut sorted: Vec<&Product> = products.iter().collect();
    sorted.sort_by_key(|p| p.id);

    let mut out = String::from("\n=== Product List ===\n");
    for p in sorted {
        out.push_str(&format!(
            "[{}] {}\n    Price: ¥{} | Stock: {} | Category: {}\n    Created: {}\n",
            p.id,
            p.name,
            p.price_display(),
            p.stock,
            p.category,
            p.created_at.format("%Y-%m-%d %H:%M:%S"),
        ));
        out.push('\n');
    }
    out.push_str("====================\n");
    out
}

/// Apply the demo stock adjustments and look up product 1 directly on
/// the store, bypassing HTTP.
pub fn simulate_operations(store: &Store) -> Option<Product> {
    info!("Simulating operations");

    for &(id, delta) in DEMO_ADJUSTMENTS {
        match store.update_stock(id, delta) {
            Ok(p) => info!(id, name = %p.name, stock = p.stock, "Stock updated"),
            Err(e) => warn!(id, error = %e, "Stock update failed"),
        }
    }

    match store.get(1) {
        Ok(p) => {
            info!(name = %p.name, price = %p.price_display(), "Found product");
            Some(p)
        }
        Err(e) => {
            warn!(error = %e, "Lookup failed");
            None
        }
    }
}
