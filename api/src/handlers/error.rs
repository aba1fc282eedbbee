//! Error type returned by handlers and extractors, rendered as the shared
//! JSON `ErrorResponse`.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use hal_shared::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Locale was not negotiated for this request")]
    LocaleNotNegotiated,

    #[error("Invalid language tag: {0}")]
    InvalidLanguageTag(String),
}

impl IntoErrorResponse for ApiError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            ApiError::LocaleNotNegotiated => {
                ErrorResponse::new(error_codes::LOCALE_NOT_NEGOTIATED, self.to_string())
            }
            ApiError::InvalidLanguageTag(tag) => {
                ErrorResponse::new(error_codes::INVALID_LANGUAGE_TAG, self.to_string())
                    .add_detail("tag", tag)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::LocaleNotNegotiated => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidLanguageTag(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("Request failed: {}", self);
        }
        HttpResponse::build(self.status_code()).json(self.to_error_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::LocaleNotNegotiated.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::InvalidLanguageTag("en_US".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_body() {
        let body = ApiError::InvalidLanguageTag("en_US".to_string()).to_error_response();
        assert_eq!(body.error, "INVALID_LANGUAGE_TAG");
        assert_eq!(body.message, "Invalid language tag: en_US");
        assert_eq!(body.details.unwrap()["tag"], serde_json::json!("en_US"));
    }
}
