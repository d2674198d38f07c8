use actix_web::{error::JsonPayloadError, error::QueryPayloadError, Error, HttpRequest};

use crate::core::AppError;

/// Maps malformed JSON bodies onto the standard error envelope
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    log_error(req, &err);
    AppError::validation(format!("Invalid request body: {}", err)).into()
}

/// Maps malformed query strings onto the standard error envelope
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    log_error(req, &err);
    AppError::validation(format!("Invalid query parameters: {}", err)).into()
}

pub fn log_error(req: &HttpRequest, err: &dyn std::fmt::Display) {
    tracing::warn!(
        method = %req.method(),
        path = %req.path(),
        "Rejected request: {}",
        err
    );
}
