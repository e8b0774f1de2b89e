//! HTTP inbound adapter: page handlers, shared state, and error responses.

use actix_web::{HttpResponse, http::header::ContentType};

pub mod error;
pub mod pages;
pub mod state;
pub mod users;

pub use error::{PageError, PageResult};
pub use state::HttpState;

/// Wrap rendered HTML in a 200 response.
pub(crate) fn html_response(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}
