//! 产品目录

pub mod handler;
pub mod mapper;
pub mod model;
pub mod repository;
pub mod service;

pub use model::{Product, ProductRequest, ProductResponse};
pub use repository::{ProductRepository, RepositoryError};
pub use service::ProductService;
