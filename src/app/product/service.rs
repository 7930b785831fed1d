//! 产品业务服务

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use super::mapper;
use super::model::{Product, ProductRequest, ProductResponse};
use super::repository::{ProductRepository, RepositoryError};

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<dyn ProductRepository> {
        &self.repository
    }

    pub async fn create_product(
        &self,
        request: ProductRequest,
    ) -> Result<ProductResponse, RepositoryError> {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            ..mapper::to_record(request)
        };

        let saved = self.repository.insert(product).await?;
        info!(product_id = %saved.id, "product created");

        Ok(mapper::to_response(saved))
    }

    pub async fn get_all_products(&self) -> Result<Vec<ProductResponse>, RepositoryError> {
        let products = self.repository.find_all().await?;
        Ok(products.into_iter().map(mapper::to_response).collect())
    }

    /// 整体替换 name/description/price；id 不存在时只记录警告，不写入，照常返回 id
    pub async fn update_product(
        &self,
        id: &str,
        request: ProductRequest,
    ) -> Result<String, RepositoryError> {
        let Some(existing) = self.repository.find_by_id(id).await? else {
            warn!(product_id = %id, "product not found, nothing updated");
            return Ok(id.to_string());
        };

        let updated = Product {
            id: existing.id,
            ..mapper::to_record(request)
        };
        let saved = self.repository.save(updated).await?;
        info!(product_id = %saved.id, "product updated");

        Ok(saved.id)
    }

    /// 不检查是否存在，重复删除不报错
    pub async fn delete_product(&self, id: &str) -> Result<(), RepositoryError> {
        self.repository.delete_by_id(id).await?;
        info!(product_id = %id, "product deleted");
        Ok(())
    }
}
