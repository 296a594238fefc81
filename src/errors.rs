use actix_web::{
    HttpRequest, HttpResponse,
    error::{JsonPayloadError, ResponseError},
    http::{StatusCode, header::ContentType},
};
use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

use crate::infrastructure::email::MailError;

/// Failures the contact endpoint can surface to a client.
///
/// Validation and rate limiting are expected control flow; only `Internal`
/// represents a genuine fault. Bodies stay terse and non-technical, with a
/// stable `code` the frontend can dispatch on.
#[derive(Debug, Display)]
pub enum ApiError {
    #[display("Validation failed")]
    Validation(Vec<FieldError>),

    #[display("Too many requests")]
    RateLimited,

    #[display("Internal error: {_0}")]
    Internal(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(details) => {
                tracing::debug!(?details, "rejecting invalid contact submission");
                serde_json::json!({
                    "error": "Validation failed",
                    "code": "VALIDATION_ERROR",
                    "details": details,
                })
            }
            ApiError::RateLimited => serde_json::json!({
                "error": "Too many requests. Please try again later.",
                "code": "RATE_LIMITED",
            }),
            ApiError::Internal(detail) => {
                // Full detail goes to the server log only; clients get the
                // generic body no matter what went wrong.
                tracing::error!(%detail, "internal error while handling request");
                serde_json::json!({
                    "error": "An unexpected error occurred",
                    "code": "INTERNAL_SERVER_ERROR",
                })
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        ApiError::Validation(field_errors)
    }
}

impl From<MailError> for ApiError {
    fn from(err: MailError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Maps undeserializable request bodies onto the same 400 contract as field
/// validation, instead of actix's default plain-text error.
pub fn json_payload_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(vec![FieldError {
        field: "body".to_string(),
        message: err.to_string(),
    }])
    .into()
}
