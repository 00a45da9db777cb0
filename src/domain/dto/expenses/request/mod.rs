pub mod expense_request;
pub mod query_params;

pub use expense_request::*;
pub use query_params::*;
