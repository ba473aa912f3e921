use std::sync::Arc;

use crate::{
    error::{AppError, Result},
    models::{CreateProductRequest, NewProduct, Product, ProductChanges, ProductFilter},
    repository::ProductRepository,
};

/// Stock levels strictly below this attach a low-stock alert to an update.
pub const LOW_STOCK_THRESHOLD: i32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub product: Product,
    pub low_stock_alert: Option<String>,
}

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

fn not_found() -> AppError {
    AppError::NotFound("Product not found".to_string())
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, req: CreateProductRequest) -> Result<i32> {
        let product = NewProduct::try_from(req)?;
        let id = self.repository.insert(&product).await?;

        tracing::info!(product_id = id, "Created product");
        Ok(id)
    }

    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        self.repository.list(filter).await
    }

    pub async fn get(&self, id: i32) -> Result<Product> {
        self.repository.find_active(id).await?.ok_or_else(not_found)
    }

    pub async fn update(&self, id: i32, changes: ProductChanges) -> Result<UpdateOutcome> {
        let product = self
            .repository
            .update(id, &changes)
            .await?
            .ok_or_else(not_found)?;

        let mut low_stock_alert = None;
        if changes.stock_quantity.is_some() && product.stock_quantity < LOW_STOCK_THRESHOLD {
            tracing::warn!(
                product_id = id,
                stock_quantity = product.stock_quantity,
                "Low stock"
            );
            low_stock_alert = Some(format!(
                "Low stock alert for product ID {}: Stock is at {}",
                id, product.stock_quantity
            ));
        }

        tracing::info!(product_id = id, "Updated product");
        Ok(UpdateOutcome {
            product,
            low_stock_alert,
        })
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        if !self.repository.deactivate(id).await? {
            return Err(not_found());
        }

        tracing::info!(product_id = id, "Soft-deleted product");
        Ok(())
    }

    pub async fn check_storage(&self) -> Result<()> {
        self.repository.ping().await
    }
}
