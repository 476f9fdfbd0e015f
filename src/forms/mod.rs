//! Form definitions backing the records routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod students;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid name")]
    InvalidName,

    #[error("invalid enrollment date, expected YYYY-MM-DD")]
    InvalidDate,
}
