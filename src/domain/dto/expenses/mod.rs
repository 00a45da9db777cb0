//! 지출 API DTO
//!
//! - [`request`] - 헤더/쿼리/본문에서 조립되는 요청 구조체와 쿼리 파라미터
//! - [`response`] - JSON으로 직렬화되는 응답 구조체

pub mod request;
pub mod response;
