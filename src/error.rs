//! Application error type and its mapping to HTTP responses.
//!
//! Every adapter converts provider failures into one of these variants at its
//! boundary, so handlers only ever propagate an [`AppError`] with `?`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

use crate::utils::target_url::TargetUrlError;

/// Uniform JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub detail: String,
    #[serde(skip_serializing_if = "is_empty_context")]
    pub context: Value,
}

fn is_empty_context(context: &Value) -> bool {
    match context {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// The request itself is malformed (bad body, missing query parameter).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The profile provider reports that the requested profile does not exist.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Any third-party failure: non-2xx response, null payload, network error,
    /// malformed JSON.
    #[error("{message}")]
    Upstream {
        status: StatusCode,
        message: String,
        details: Value,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    /// Upstream failure that did not come with a provider status code.
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            details,
        }
    }

    /// Upstream failure relayed from a provider's non-2xx response.
    ///
    /// Client and server error codes are passed through as-is; anything else
    /// (an unexpected redirect, an unparseable code) becomes 500.
    pub fn upstream_status(status: u16, message: impl Into<String>, details: Value) -> Self {
        let status = StatusCode::from_u16(status)
            .ok()
            .filter(|s| s.is_client_error() || s.is_server_error())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        Self::Upstream {
            status,
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { status, .. } => *status,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Upstream { .. } => "upstream_error",
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Upstream {
                message, details, ..
            } => (message, details),
        };

        let detail = if message.trim().is_empty() {
            self.status_code()
                .canonical_reason()
                .unwrap_or("Upstream error")
                .to_string()
        } else {
            message.clone()
        };

        ErrorBody {
            code: self.code(),
            detail,
            context: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_error_body())).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_default();
        AppError::bad_request(format!("Invalid request: {errors}"), details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text(), json!({}))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(rejection.body_text(), json!({}))
    }
}

impl From<TargetUrlError> for AppError {
    fn from(err: TargetUrlError) -> Self {
        AppError::bad_request(err.to_string(), json!({ "field": "url" }))
    }
}
