//! 应用层：路由与共享状态

pub mod health;
pub mod product;

use std::time::Duration;

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use crate::core::response::PRODUCT_BASE_PATH;
use product::{handler, ProductService};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(product_service: ProductService) -> Self {
        Self { product_service }
    }
}

/// 产品路由，不带任何中间件
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            PRODUCT_BASE_PATH,
            get(handler::get_all_products).post(handler::create_product),
        )
        .route(
            &format!("{PRODUCT_BASE_PATH}/:product_id"),
            put(handler::update_product).delete(handler::delete_product),
        )
}

/// 完整应用：产品路由、健康检查以及日志/CORS/超时中间件
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(product_routes())
        .route("/health", get(health::health_check))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
