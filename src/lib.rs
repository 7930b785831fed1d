//! # 产品目录服务
//!
//! 通过 HTTP 暴露产品的增删改查：
//! - `app`：路由、处理器、业务服务、映射与存储抽象
//! - `core`：错误类型、响应辅助、中间件
//! - `infrastructure`：进程内存储、PostgreSQL 存储、日志
//! - `config`：配置文件与环境变量

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{build_router, AppState};
