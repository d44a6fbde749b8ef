mod health;
mod product;

pub use health::HealthStatus;
pub use product::{decode_body, CreateProduct, Product, ProductId, StockAdjustment};
