//! 核心层：错误处理、响应辅助、中间件

pub mod error;
pub mod middleware;
pub mod response;
