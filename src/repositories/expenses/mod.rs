pub mod expense_repo;

pub use expense_repo::ExpenseRepository;
