//! GeoIP 查询抽象层
//!
//! 统一的城市级查询接口。HTTP 层只依赖这里的 trait，
//! 具体实现由启动时注入（生产环境为 MaxMind 本地数据库）。

use std::net::IpAddr;

use crate::errors::{GeoLookupError, Result};

use super::model::GeoLocation;

/// 城市级 GeoIP 查询 trait
pub trait GeoDatabase: Send + Sync {
    /// 查询 IP 地址的地理位置
    ///
    /// 地址不在库中或数据库内部出错时返回 [`GeoLookupError::Lookup`]。
    fn lookup_city(&self, addr: IpAddr) -> Result<GeoLocation>;
}

/// Resolve an IP address string against a database.
///
/// The string is whatever the caller handed us (query parameter, header,
/// peer address) and is only validated here, at query time.
pub fn resolve(db: &dyn GeoDatabase, ip: &str) -> Result<GeoLocation> {
    let addr: IpAddr = ip
        .parse()
        .map_err(|e| GeoLookupError::invalid_address(format!("{ip:?}: {e}")))?;

    db.lookup_city(addr)
}
