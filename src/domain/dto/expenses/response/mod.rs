pub mod expense_response;

pub use expense_response::*;
