//! HTML error responses for page handlers.

use actix_web::{HttpResponse, http::StatusCode, http::header::ContentType};
use thiserror::Error;
use tracing::error;

use crate::render::ViewError;

/// Handler-level failure rendered as a plain HTML error page.
///
/// Store failures never reach this type: the handlers log them and degrade
/// silently. What remains is rendering and template-fetch trouble, which is
/// always an internal fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// An unexpected error occurred while producing the page.
    #[error("internal server error: {message}")]
    Internal { message: String },
}

impl PageError {
    /// Helper for internal failures.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<ViewError> for PageError {
    fn from(err: ViewError) -> Self {
        Self::internal(err.to_string())
    }
}

impl actix_web::ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        // Log the detail, serve a redacted page.
        error!(error = %self, "request failed");
        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body("<!doctype html><html><body><h1>Internal Server Error</h1></body></html>")
    }
}

/// Convenient handler result alias.
pub type PageResult<T> = Result<T, PageError>;
