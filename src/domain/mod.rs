//! # Domain Layer Module
//!
//! 지출(expense) 도메인의 데이터 구조를 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB에 저장되는 문서 (Expense)
//! └── DTOs      - API 요청/응답 구조체
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`]
//! - `Expense`: 사용자 한 명이 한 행사에서 주고받은 금액 기록.
//!   `event_id`(UUID v4)로 식별되며 `(user_id, event_id)`가 유니크합니다.
//!
//! ### [`dto`]
//! - **request**: `CreateExpense`, `UpdateExpense`, `DeleteExpense`, `GetExpense`,
//!   `GetExpenseList`, `GetExpenseTotal`, `GetExpenseSearch` 와 쿼리 파라미터 구조체
//! - **response**: `ExpenseResponse`, `ExpenseListResponse`, `ExpenseTotalResponse`
//!
//! 요청 DTO의 `user_id`는 항상 `user_id` 헤더에서 채워지며 본문 값은 무시됩니다.

pub mod entities;
pub mod dto;
