//! 访问令牌认证中间件
//!
//! 通过 Header 中的 Authorization: Bearer <token> 进行认证，令牌为空时不启用。
//! 与上游 API Key 无关

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, AUTHORIZATION},
    Error, HttpResponse,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use std::rc::Rc;

use crate::models::ErrorResponse;

/// 无需认证的路径后缀
const PUBLIC_PATHS: [&str; 1] = ["/health"];
const UNAUTHORIZED_MESSAGE: &str = "Invalid bearer token";

/// 访问令牌中间件
pub struct AccessTokenMiddleware {
    token: Rc<str>,
}

impl AccessTokenMiddleware {
    pub fn new(token: String) -> Self {
        Self {
            token: Rc::from(token),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessTokenMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AccessTokenService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AccessTokenService {
            service,
            token: self.token.clone(),
        })
    }
}

pub struct AccessTokenService<S> {
    service: S,
    token: Rc<str>,
}

impl<S, B> Service<ServiceRequest> for AccessTokenService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !is_authorized(req.path(), req.headers(), &self.token) {
            log::warn!("拒绝未认证请求: {}", req.path());
            let response =
                HttpResponse::Unauthorized().json(ErrorResponse::new(UNAUTHORIZED_MESSAGE));
            let res = req.into_response(response).map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);
        Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
    }
}

/// 令牌为空或公开路径直接放行，否则比对 Bearer 令牌
fn is_authorized(path: &str, headers: &HeaderMap, token: &str) -> bool {
    if token.is_empty() || PUBLIC_PATHS.iter().any(|p| path.ends_with(p)) {
        return true;
    }
    bearer_token(headers) == Some(token)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};

    async fn ping() -> HttpResponse {
        HttpResponse::Ok().body("pong")
    }

    fn app_routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/api/health", web::get().to(ping))
            .route("/api/status", web::get().to(ping));
    }

    #[::core::prelude::v1::test]
    fn test_is_authorized() {
        use actix_web::http::header::HeaderValue;

        let mut headers = HeaderMap::new();
        assert!(!is_authorized("/api/status", &headers, "s3cret"));
        assert!(is_authorized("/api/health", &headers, "s3cret"));
        assert!(is_authorized("/api/status", &headers, ""));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer wrong"));
        assert!(!is_authorized("/api/status", &headers, "s3cret"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("s3cret"));
        assert!(!is_authorized("/api/status", &headers, "s3cret"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer s3cret"));
        assert!(is_authorized("/api/status", &headers, "s3cret"));
    }

    #[actix_web::test]
    async fn test_rejects_missing_token() {
        let app = test::init_service(
            App::new()
                .wrap(AccessTokenMiddleware::new("s3cret".into()))
                .configure(app_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/status").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body, ErrorResponse::new("Invalid bearer token"));
    }

    #[actix_web::test]
    async fn test_accepts_valid_token() {
        let app = test::init_service(
            App::new()
                .wrap(AccessTokenMiddleware::new("s3cret".into()))
                .configure(app_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/status")
            .insert_header(("Authorization", "Bearer s3cret"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_health_is_exempt() {
        let app = test::init_service(
            App::new()
                .wrap(AccessTokenMiddleware::new("s3cret".into()))
                .configure(app_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_empty_token_disables_check() {
        let app = test::init_service(
            App::new()
                .wrap(AccessTokenMiddleware::new(String::new()))
                .configure(app_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/status").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
