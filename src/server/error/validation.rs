use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ValidationErrorDto;

pub static VALIDATION_FAILED_MESSAGE: &str = "The form contains errors.";

/// Submitted form input was rejected, `errors` holds the messages per form field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn new(errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            errors,
        }
    }

    /// Returns true if any message is recorded for `field`
    pub fn has(&self, field: &str) -> bool {
        self.errors.get(field).is_some_and(|m| !m.is_empty())
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!(fields = ?self.errors.keys().collect::<Vec<_>>(), "{}", self);

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorDto {
                error: self.message,
                errors: self.errors,
            }),
        )
            .into_response()
    }
}
