mod product_service;

pub use product_service::{LOW_STOCK_THRESHOLD, ProductService, UpdateOutcome};
