//! Lookup endpoints
//!
//! Two stateless GET routes: `/` resolves an address (queried or extracted
//! from the request) to its full location record, `/ip` echoes the caller's
//! address as the service sees it.

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::services::geoip::{self, GeoDatabase, GeoLocation, SubdivisionInfo};
use crate::utils::extract_client_ip;

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub ip: Option<String>,
}

/// `/ip` 响应体
#[derive(Debug, Clone, Serialize)]
pub struct IpResponse {
    pub ip: String,
}

/// `/` 成功响应体：IP 与地理信息展平为同一层级
#[derive(Debug, Clone, Serialize)]
pub struct FullResponse {
    pub ip: String,
    pub continent: String,
    pub continent_code: String,
    pub country: String,
    pub country_code: String,
    pub subdivisions: Vec<SubdivisionInfo>,
    pub city: String,
    pub location_accuracy: u16,
    pub latitude: f64,
    pub longitude: f64,
    pub time_zone: String,
}

impl FullResponse {
    /// 逐字段展平合并，字段名即对外 JSON 契约
    pub fn new(ip: String, location: GeoLocation) -> Self {
        FullResponse {
            ip,
            continent: location.continent,
            continent_code: location.continent_code,
            country: location.country,
            country_code: location.country_code,
            subdivisions: location.subdivisions,
            city: location.city,
            location_accuracy: location.location_accuracy,
            latitude: location.latitude,
            longitude: location.longitude,
            time_zone: location.time_zone,
        }
    }
}

/// 失败响应体
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub struct LookupService;

impl LookupService {
    /// GET `/`
    ///
    /// `ip` 查询参数缺失或为空串时，退回到从请求上下文提取地址。
    pub async fn lookup(
        req: HttpRequest,
        query: web::Query<LookupQuery>,
        db: web::Data<Arc<dyn GeoDatabase>>,
    ) -> impl Responder {
        let ip = match query.into_inner().ip.filter(|ip| !ip.is_empty()) {
            Some(ip) => ip,
            None => extract_client_ip(&req),
        };

        match geoip::resolve(db.get_ref().as_ref(), &ip) {
            Ok(location) => HttpResponse::Ok().json(FullResponse::new(ip, location)),
            Err(err) => {
                debug!("Lookup failed for {:?}: {}", ip, err);
                HttpResponse::BadRequest().json(ErrorResponse {
                    error: err.to_string(),
                })
            }
        }
    }

    /// GET `/ip`
    ///
    /// 只做地址提取，忽略一切查询参数，永不失败。
    pub async fn client_ip(req: HttpRequest) -> impl Responder {
        HttpResponse::Ok().json(IpResponse {
            ip: extract_client_ip(&req),
        })
    }
}

pub fn lookup_routes() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(LookupService::lookup))
        .route("/ip", web::get().to(LookupService::client_ip))
}
