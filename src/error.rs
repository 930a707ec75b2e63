use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of every error response: `{ "error": message }`.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

pub enum ApiError {
    /// Missing or empty `title`/`content`, or a body that is not a JSON object.
    Validation,
    PayloadTooLarge,
    NotFound,
    Internal(anyhow::Error),
}

impl ApiError {
    fn message(&self) -> &'static str {
        match self {
            ApiError::Validation => "Title and content are required",
            ApiError::PayloadTooLarge => "Request body is too large",
            ApiError::NotFound => "Article not found",
            ApiError::Internal(_) => "Internal server error",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Internal(e) => write!(f, "{}: {:#}", self.message(), e),
            _ => f.write_str(self.message()),
        }
    }
}

// actix-http logs every 500 with `{:?}`; keep that line to the cause chain.
impl fmt::Debug for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <Self as fmt::Display>::fmt(self, f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.message().to_owned(),
        })
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Internal(e)
    }
}

impl From<BlockingError<anyhow::Error>> for ApiError {
    fn from(e: BlockingError<anyhow::Error>) -> Self {
        match e {
            BlockingError::Error(e) => ApiError::Internal(e),
            BlockingError::Canceled => {
                ApiError::Internal(anyhow::anyhow!("database task was canceled"))
            }
        }
    }
}
