//! # Utilities Module
//!
//! 여러 계층에서 공통으로 사용하는 헬퍼 함수 모음입니다.
//!
//! - [`string_utils`] - 파라미터 정리, 관대한 숫자 파싱
//!
//! ```rust,ignore
//! use crate::utils::string_utils::parse_or_default;
//!
//! let limit: i64 = parse_or_default(query.limit.as_deref());
//! ```

pub mod string_utils;
