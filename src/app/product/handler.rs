//! 产品处理器

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

use super::model::{ProductRequest, ProductResponse};
use crate::app::AppState;
use crate::core::{error::CoreError, response::product_location};

/// POST /api/product
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Json(request) = payload?;
    let created = state.product_service.create_product(request).await?;
    let location = product_location(&created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// GET /api/product
pub async fn get_all_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, CoreError> {
    let products = state.product_service.get_all_products().await?;
    Ok(Json(products))
}

/// PUT /api/product/:product_id
///
/// id 不存在时同样返回 204；Location 中的 id 经过百分号编码。
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Json(request) = payload?;
    let updated_id = state
        .product_service
        .update_product(&product_id, request)
        .await?;
    let location = product_location(&updated_id);

    Ok((StatusCode::NO_CONTENT, [(header::LOCATION, location)]))
}

/// DELETE /api/product/:product_id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<StatusCode, CoreError> {
    state.product_service.delete_product(&product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
