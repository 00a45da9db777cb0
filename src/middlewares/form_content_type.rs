//! `Content-Type` 기본값 미들웨어
//!
//! 본문을 받는 요청(POST, PUT)에 `Content-Type` 헤더가 없으면
//! `application/x-www-form-urlencoded`를 채워 넣어 form 본문으로 바인딩되게 합니다.

use std::future::{ready, Ready};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderValue, CONTENT_TYPE};
use actix_web::http::Method;
use actix_web::Error;
use log::debug;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub struct DefaultFormContentType;

impl<S, B> Transform<S, ServiceRequest> for DefaultFormContentType
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = DefaultFormContentTypeService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(DefaultFormContentTypeService { service }))
    }
}

pub struct DefaultFormContentTypeService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for DefaultFormContentTypeService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        if needs_default_content_type(req.method(), req.headers().contains_key(CONTENT_TYPE)) {
            debug!("{} {}: Content-Type 없음, form으로 처리", req.method(), req.path());
            req.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        }

        self.service.call(req)
    }
}

fn needs_default_content_type(method: &Method, has_content_type: bool) -> bool {
    !has_content_type && (method == Method::POST || method == Method::PUT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpMessage, HttpRequest, HttpResponse};
    use actix_web::http::header::ContentType;

    async fn echo_content_type(req: HttpRequest) -> HttpResponse {
        HttpResponse::Ok().body(req.content_type().to_string())
    }

    #[::core::prelude::v1::test]
    fn test_needs_default_content_type() {
        assert!(needs_default_content_type(&Method::POST, false));
        assert!(needs_default_content_type(&Method::PUT, false));
        assert!(!needs_default_content_type(&Method::POST, true));
        assert!(!needs_default_content_type(&Method::GET, false));
        assert!(!needs_default_content_type(&Method::DELETE, false));
    }

    #[actix_web::test]
    async fn test_missing_content_type_becomes_form() {
        let app = test::init_service(
            App::new()
                .wrap(DefaultFormContentType)
                .route("/", web::post().to(echo_content_type)),
        )
        .await;

        let req = test::TestRequest::post().uri("/").set_payload("a=1").to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, FORM_CONTENT_TYPE);
    }

    #[actix_web::test]
    async fn test_existing_content_type_is_kept() {
        let app = test::init_service(
            App::new()
                .wrap(DefaultFormContentType)
                .route("/", web::put().to(echo_content_type)),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/")
            .insert_header(ContentType::json())
            .set_payload("{}")
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "application/json");
    }
}
