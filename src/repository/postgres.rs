use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    database,
    error::Result,
    models::{NewProduct, Product, ProductChanges, ProductFilter},
    queries::product_queries,
};

use super::ProductRepository;

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn insert(&self, product: &NewProduct) -> Result<i32> {
        product_queries::insert_product(&self.pool, product).await
    }

    async fn find_active(&self, id: i32) -> Result<Option<Product>> {
        product_queries::find_active_by_id(&self.pool, id).await
    }

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        product_queries::list_products(&self.pool, filter).await
    }

    async fn update(&self, id: i32, changes: &ProductChanges) -> Result<Option<Product>> {
        product_queries::update_product(&self.pool, id, changes).await
    }

    async fn deactivate(&self, id: i32) -> Result<bool> {
        let rows = product_queries::soft_delete_product(&self.pool, id).await?;
        Ok(rows > 0)
    }

    async fn ping(&self) -> Result<()> {
        database::check_health(&self.pool).await
    }
}
