use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::upstream::UpstreamError;

pub type Result<T> = std::result::Result<T, AppError>;

pub const PROFILE_ID_REQUIRED_ERROR: &str = "Profile ID is required and cannot be empty.";
pub const PROFILE_ID_REQUIRED_MESSAGE: &str = "Please provide a valid Instagram profile ID.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", PROFILE_ID_REQUIRED_ERROR)]
    ProfileIdRequired,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl AppError {
    fn body(&self) -> ErrorResponse {
        match self {
            AppError::ProfileIdRequired => {
                ErrorResponse::new(PROFILE_ID_REQUIRED_ERROR, PROFILE_ID_REQUIRED_MESSAGE)
            }
            AppError::InvalidRequest(msg) => ErrorResponse::new("Invalid request.", msg.clone()),
            AppError::ProfileNotFound(id) => ErrorResponse::new(
                "Profile not found.",
                format!("No Instagram profile with ID {}.", id),
            ),
            AppError::Upstream(err) => {
                ErrorResponse::new("Failed to fetch Instagram posts.", err.to_string())
            }
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ProfileIdRequired | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ProfileNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidRequest(err.to_string())
    }
}
