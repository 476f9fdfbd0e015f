pub mod api;
pub mod errors;
pub mod students;

pub use errors::{ServiceError, ServiceResult};
