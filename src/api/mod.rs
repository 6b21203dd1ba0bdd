//! HTTP 接口层：路由服务与中间件

pub mod middleware;
pub mod services;
