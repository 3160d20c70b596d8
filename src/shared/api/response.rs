// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::shared::validation::FieldErrors;

/// Error envelope shared by every endpoint.
///
/// Success bodies are the bare resource; only failures are wrapped.
#[derive(Serialize)]
pub struct ErrorBody<'a> {
    pub success: bool,
    pub error: ApiError,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<&'a FieldErrors>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn ok<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ErrorBody {
            success: false,
            error: ApiError {
                code: code.to_string(),
                message: message.to_string(),
            },
            errors: None,
        })
    }

    pub fn validation_failed(errors: &FieldErrors) -> HttpResponse {
        HttpResponse::build(StatusCode::UNPROCESSABLE_ENTITY).json(ErrorBody {
            success: false,
            error: ApiError {
                code: "VALIDATION_FAILED".to_string(),
                message: "The given data was invalid".to_string(),
            },
            errors: Some(errors),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
