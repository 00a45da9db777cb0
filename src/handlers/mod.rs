//! # HTTP Handlers
//!
//! - [`expenses`] - 지출 API 컨트롤러 (`ExpenseController`)

pub mod expenses;
