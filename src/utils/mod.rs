//! 通用工具模块

pub mod ip;

pub use ip::{extract_client_ip, real_ip_from_headers};
