//! 产品存储抽象

use async_trait::async_trait;
use thiserror::Error;

use super::model::Product;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 底层存储驱动的错误，保留为 source
    #[error("database error: {0}")]
    Database(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(feature = "database")]
impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Database(Box::new(err))
    }
}

/// 按 id 寻址的产品记录存储
///
/// `find_all` 按插入顺序返回；`save` 对已存在的 id 覆盖，不存在则插入；
/// `delete_by_id` 对不存在的 id 不报错。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, product: Product) -> Result<Product, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError>;
    async fn save(&self, product: Product) -> Result<Product, RepositoryError>;
    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError>;

    /// 健康检查用
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    /// 存储类型名称，用于健康检查输出
    fn kind(&self) -> &'static str;
}

/// 空 id 的记录不能落库
pub(crate) fn ensure_id(product: &Product) -> Result<(), RepositoryError> {
    if product.id.is_empty() {
        return Err(RepositoryError::InvalidRecord(
            "product id must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "database")]
    #[test]
    fn test_sqlx_error_is_kept_as_source() {
        use std::error::Error as _;

        let err = RepositoryError::from(sqlx::Error::RowNotFound);
        let source = err.source().expect("database error should carry its source");
        assert!(source.downcast_ref::<sqlx::Error>().is_some());
        assert!(err.to_string().starts_with("database error: "));
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let product = Product {
            id: String::new(),
            name: "n".to_string(),
            description: "d".to_string(),
            price: 1.0,
        };
        assert!(matches!(ensure_id(&product), Err(RepositoryError::InvalidRecord(_))));
    }
}
