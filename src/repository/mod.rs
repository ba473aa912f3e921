mod memory;
mod postgres;

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{NewProduct, Product, ProductChanges, ProductFilter},
};

pub use memory::InMemoryProductRepository;
pub use postgres::PgProductRepository;

/// Storage seam for products. Every read and write only sees rows with
/// `is_active = true`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert an active product and return its store-assigned id
    async fn insert(&self, product: &NewProduct) -> Result<i32>;

    async fn find_active(&self, id: i32) -> Result<Option<Product>>;

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>>;

    /// Apply the supplied fields; `None` when no active product has this id
    async fn update(&self, id: i32, changes: &ProductChanges) -> Result<Option<Product>>;

    /// Flag the product inactive; `false` when no active product has this id
    async fn deactivate(&self, id: i32) -> Result<bool>;

    async fn ping(&self) -> Result<()>;
}
