pub mod expense_service;
pub mod query_builder;

pub use expense_service::{ExpenseService, ExpenseServiceImpl};
