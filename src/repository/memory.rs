use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::Result,
    models::{NewProduct, Product, ProductChanges, ProductFilter, SortBy, SortOrder},
};

use super::ProductRepository;

#[derive(Debug, Default)]
struct Store {
    next_id: i32,
    rows: BTreeMap<i32, Product>,
}

/// In-memory implementation of ProductRepository (for development/testing).
/// Rows are kept in id order, which stands in for storage order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_filter(product: &Product, filter: &ProductFilter) -> bool {
    if !product.is_active {
        return false;
    }
    if let Some(ref category) = filter.category {
        if &product.category != category {
            return false;
        }
    }
    if let Some(ref term) = filter.search {
        let term = term.to_lowercase();
        if !product.name.to_lowercase().contains(&term)
            && !product.description.to_lowercase().contains(&term)
        {
            return false;
        }
    }
    true
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: &NewProduct) -> Result<i32> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let id = store.next_id;

        store.rows.insert(
            id,
            Product {
                id,
                name: product.name.clone(),
                description: product.description.clone(),
                price: product.price,
                stock_quantity: product.stock_quantity,
                category: product.category.clone(),
                is_active: true,
            },
        );

        Ok(id)
    }

    async fn find_active(&self, id: i32) -> Result<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).filter(|p| p.is_active).cloned())
    }

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let store = self.store.read().await;

        let mut result: Vec<Product> = store
            .rows
            .values()
            .filter(|p| matches_filter(p, filter))
            .cloned()
            .collect();

        // stable sort keeps id order between equal prices
        match filter.sort_by {
            Some(SortBy::Price(SortOrder::Asc)) => {
                result.sort_by(|a, b| a.price.total_cmp(&b.price));
            }
            Some(SortBy::Price(SortOrder::Desc)) => {
                result.sort_by(|a, b| b.price.total_cmp(&a.price));
            }
            None => {}
        }

        Ok(result
            .into_iter()
            .skip(filter.offset() as usize)
            .take(filter.limit as usize)
            .collect())
    }

    async fn update(&self, id: i32, changes: &ProductChanges) -> Result<Option<Product>> {
        let mut store = self.store.write().await;

        let Some(product) = store.rows.get_mut(&id).filter(|p| p.is_active) else {
            return Ok(None);
        };

        changes.apply_to(product);
        Ok(Some(product.clone()))
    }

    async fn deactivate(&self, id: i32) -> Result<bool> {
        let mut store = self.store.write().await;

        match store.rows.get_mut(&id) {
            Some(product) if product.is_active => {
                product.is_active = false;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
