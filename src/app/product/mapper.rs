//! 请求/响应与存储记录之间的转换

use super::model::{Product, ProductRequest, ProductResponse};

/// 请求转为存储记录，id 留空，由调用方填写
pub fn to_record(request: ProductRequest) -> Product {
    Product {
        id: String::new(),
        name: request.name,
        description: request.description,
        price: request.price,
    }
}

pub fn to_response(product: Product) -> ProductResponse {
    ProductResponse {
        id: product.id,
        name: product.name,
        description: product.description,
        price: product.price,
    }
}
