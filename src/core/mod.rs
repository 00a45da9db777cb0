//! # Core Module
//!
//! 애플리케이션 전역에서 공유되는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 구현 (모든 실패는 400)
//! - **ErrorContext**: 외부 라이브러리 에러를 컨텍스트와 함께 변환

pub mod errors;

pub use errors::*;
