//! 미들웨어 모듈
//!
//! `/expense` 스코프 요청 파이프라인에 끼워 넣는 미들웨어입니다.
//!
//! - [`form_content_type::DefaultFormContentType`] - `Content-Type`이 없는 본문을 form으로 취급
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::form_content_type::DefaultFormContentType;
//!
//! web::scope("/expense")
//!     .wrap(DefaultFormContentType)
//!     .route("", web::post().to(create_expense))
//! ```

pub mod form_content_type;
