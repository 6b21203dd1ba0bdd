//! GeoIP 服务模块
//!
//! 提供 IP 地址城市级地理位置查询功能，基于 MaxMind GeoLite2 本地数据库。

mod maxmind;
mod model;
mod provider;

pub use maxmind::MaxMindReader;
pub use model::{GeoLocation, SubdivisionInfo};
pub use provider::{GeoDatabase, resolve};
