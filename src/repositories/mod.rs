//! # Repository Layer
//!
//! MongoDB 컬렉션에 대한 데이터 액세스를 담당합니다.
//! 드라이버 에러는 모두 `AppError::DatabaseError`로 변환됩니다.

pub mod expenses;
