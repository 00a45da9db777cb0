//! API 경계에서 사용하는 데이터 전송 객체

pub mod expenses;

pub use expenses::*;
