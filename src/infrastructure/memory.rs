//! 进程内存储

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::app::product::repository::{ensure_id, ProductRepository, RepositoryError};
use crate::app::product::Product;

/// 按插入顺序保存记录
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: Product) -> Result<Product, RepositoryError> {
        ensure_id(&product)?;
        let mut products = self.products.write().await;
        if products.iter().any(|p| p.id == product.id) {
            return Err(RepositoryError::InvalidRecord(format!(
                "duplicate product id: {}",
                product.id
            )));
        }
        products.push(product.clone());
        Ok(product)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        ensure_id(&product)?;
        let mut products = self.products.write().await;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => *slot = product.clone(),
            None => products.push(product.clone()),
        }
        Ok(product)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        self.products.write().await.retain(|p| p.id != id);
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
