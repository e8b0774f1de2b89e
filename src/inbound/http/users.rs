//! User CRUD handlers.
//!
//! ```text
//! GET  /user           List users
//! POST /utilisateurs   Create a user from form fields, redirect to /user
//! GET  /user/{id}      Delete a user, redirect to /user
//! ```
//!
//! Store failures are logged and swallowed: the list renders empty and the
//! mutations redirect regardless. That silent degradation is deliberate (see
//! DESIGN.md); the mutations are nevertheless awaited before the redirect so
//! a follow-up list observes them.

use actix_web::http::header;
use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::{error, warn};

use crate::domain::{NewUser, UserId};
use crate::render::{PageContext, RenderOptions};

use super::error::PageResult;
use super::html_response;
use super::state::HttpState;

/// Form payload for [`create_user`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserForm {
    /// Family name field.
    pub last_name: String,
    /// Given name field.
    pub first_name: String,
}

fn redirect_to_user_list() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/user"))
        .finish()
}

/// List all users.
#[get("/user")]
pub async fn list_users(state: web::Data<HttpState>) -> PageResult<HttpResponse> {
    let users = match state.users.list().await {
        Ok(users) => users,
        Err(err) => {
            error!(error = %err, "user list failed");
            Vec::new()
        }
    };

    let context = PageContext::new("Users").with("users", &users)?;
    let html = state.views.render("user", context, RenderOptions::new())?;
    Ok(html_response(html))
}

/// Create a user from the submitted form, then redirect to the list.
#[post("/utilisateurs")]
pub async fn create_user(
    state: web::Data<HttpState>,
    form: web::Form<CreateUserForm>,
) -> HttpResponse {
    match NewUser::new(&form.last_name, &form.first_name) {
        Ok(user) => {
            if let Err(err) = state.users.create(user).await {
                error!(error = %err, "user create failed");
            }
        }
        Err(err) => warn!(error = %err, "rejected user payload"),
    }
    redirect_to_user_list()
}

/// Delete the user with the given id, then redirect to the list.
///
/// Deleting a missing id is a successful no-op at the repository level, so
/// the redirect is unconditional there too.
#[get("/user/{id}")]
pub async fn delete_user(state: web::Data<HttpState>, path: web::Path<i32>) -> HttpResponse {
    let id = UserId::new(path.into_inner());
    if let Err(err) = state.users.delete(id).await {
        error!(error = %err, user_id = %id, "user delete failed");
    }
    redirect_to_user_list()
}
