// errors.rs
use crate::domain::bulk::BulkParseError;
use thiserror::Error;

/// Errors a request handler can end with. Each maps to an HTML error page
/// in `responses::errors`.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl From<BulkParseError> for ServerError {
    fn from(err: BulkParseError) -> Self {
        ServerError::BadRequest(format!("bulk update rejected, {err}"))
    }
}
