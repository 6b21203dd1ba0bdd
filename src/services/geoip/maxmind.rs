//! MaxMind GeoLite2 数据库实现
//!
//! 使用本地 MaxMind GeoLite2-City.mmdb 文件进行 IP 地理位置查询

use std::net::IpAddr;

use maxminddb::Reader;
use tracing::trace;

use crate::errors::{GeoLookupError, Result};

use super::model::GeoLocation;
use super::provider::GeoDatabase;

/// MaxMind GeoLite2 城市库读取器
///
/// 启动时打开一次，进程生命周期内只读共享；`maxminddb::Reader` 支持
/// 多个请求 handler 无锁并发查询。
#[derive(Debug)]
pub struct MaxMindReader {
    reader: Reader<Vec<u8>>,
}

impl MaxMindReader {
    /// 从文件路径打开数据库
    ///
    /// 文件缺失或格式损坏时返回 [`GeoLookupError::Database`]，
    /// 由启动流程直接终止进程。
    pub fn open(path: &str) -> Result<Self> {
        let reader = Reader::open_readfile(path)
            .map_err(|e| GeoLookupError::database(format!("{path}: {e}")))?;
        Ok(Self { reader })
    }
}

impl GeoDatabase for MaxMindReader {
    fn lookup_city(&self, addr: IpAddr) -> Result<GeoLocation> {
        let result = self.reader.lookup(addr)?;
        let record: maxminddb::geoip2::City = result
            .decode()?
            .ok_or_else(|| GeoLookupError::lookup(format!("no record found for {addr}")))?;

        trace!(
            "MaxMind lookup for {}: country={:?}, city={:?}",
            addr, record.country.iso_code, record.city.names.english
        );

        Ok(GeoLocation::from_city_record(&record))
    }
}
