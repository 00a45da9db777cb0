//! # Service Layer
//!
//! 비즈니스 로직 계층입니다. 컨트롤러는 [`expenses::ExpenseService`] trait에만 의존하고,
//! 구현체는 애플리케이션 시작 시 생성자 주입으로 전달됩니다.

pub mod expenses;
