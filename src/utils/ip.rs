//! IP 地址处理工具
//!
//! 提供统一的客户端 IP 提取功能。服务假设自己部署在可信反向代理之后：
//! `X-Real-IP` 头一旦存在且非空即被采信，否则回退到连接层对端地址。

use actix_web::HttpRequest;
use actix_web::http::header::HeaderMap;

/// 可信代理写入的客户端真实 IP 头
pub const REAL_IP_HEADER: &str = "x-real-ip";

/// 从请求头提取 `X-Real-IP`（存在且非空时）
pub fn real_ip_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REAL_IP_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// 提取请求的主体 IP 地址
///
/// 结果是未经校验的透传字符串，畸形值到数据库查询阶段才会被拦截。
/// 没有对端地址可用时（理论上仅测试环境）返回空字符串。
pub fn extract_client_ip(req: &HttpRequest) -> String {
    if let Some(ip) = real_ip_from_headers(req.headers()) {
        return ip;
    }

    req.connection_info()
        .peer_addr()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_real_ip_header_wins() {
        let req = TestRequest::default()
            .insert_header(("X-Real-IP", "203.0.113.7"))
            .peer_addr("198.51.100.3:443".parse().unwrap())
            .to_http_request();

        assert_eq!(extract_client_ip(&req), "203.0.113.7");
    }

    #[test]
    fn test_falls_back_to_peer_addr() {
        let req = TestRequest::default()
            .peer_addr("198.51.100.3:443".parse().unwrap())
            .to_http_request();

        assert_eq!(extract_client_ip(&req), "198.51.100.3");
    }

    #[test]
    fn test_empty_header_is_ignored() {
        let req = TestRequest::default()
            .insert_header(("X-Real-IP", ""))
            .peer_addr("198.51.100.3:443".parse().unwrap())
            .to_http_request();

        assert_eq!(extract_client_ip(&req), "198.51.100.3");
    }

    #[test]
    fn test_header_value_is_passed_through_unvalidated() {
        let req = TestRequest::default()
            .insert_header(("X-Real-IP", "definitely-not-an-ip"))
            .to_http_request();

        assert_eq!(extract_client_ip(&req), "definitely-not-an-ip");
    }

    #[test]
    fn test_no_header_no_peer_yields_empty() {
        let req = TestRequest::default().to_http_request();

        assert_eq!(extract_client_ip(&req), "");
    }
}
