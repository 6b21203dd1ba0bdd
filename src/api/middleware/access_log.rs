//! Access log middleware
//!
//! Emits one tracing line per completed request: peer, method, path,
//! status, duration. Functionally inert; lookups behave identically with
//! the middleware removed.

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::time::Instant;
use tracing::info;

/// Access log middleware factory
#[derive(Clone, Default)]
pub struct AccessLog;

impl<S, B> Transform<S, ServiceRequest> for AccessLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AccessLogService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessLogService {
            service: Rc::new(service),
        }))
    }
}

pub struct AccessLogService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AccessLogService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let start = Instant::now();

        let method = req.method().to_string();
        let path = req.path().to_string();
        let peer = req
            .connection_info()
            .peer_addr()
            .unwrap_or("-")
            .to_string();

        Box::pin(async move {
            let result = srv.call(req).await;

            match &result {
                Ok(response) => info!(
                    peer = %peer,
                    method = %method,
                    path = %path,
                    status = response.status().as_u16(),
                    elapsed = ?start.elapsed(),
                    "request completed"
                ),
                Err(err) => info!(
                    peer = %peer,
                    method = %method,
                    path = %path,
                    error = %err,
                    elapsed = ?start.elapsed(),
                    "request failed"
                ),
            }

            result
        })
    }
}
