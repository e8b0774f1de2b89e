//! Static and demonstration page handlers.
//!
//! ```text
//! GET /                 Home page
//! GET /yell             Message transformed by the default `yell` helper
//! GET /exclaim          Same message, `yell` overridden for this render
//! GET /echo/{message}   Alternate layout plus an inline partial
//! ```

use actix_web::{HttpMessage, HttpRequest, HttpResponse, get, web};

use crate::middleware::SharedTemplates;
use crate::render::{PageContext, RenderOptions, helpers};

use super::error::PageResult;
use super::html_response;
use super::state::HttpState;

/// Message shown on the yell and exclaim pages.
const DEMO_MESSAGE: &str = "hello world";

/// Render the home page with a static context.
#[get("/")]
pub async fn home(state: web::Data<HttpState>) -> PageResult<HttpResponse> {
    let html = state
        .views
        .render("home", PageContext::new("Home"), RenderOptions::new())?;
    Ok(html_response(html))
}

/// Render the yell page; the default `yell` helper uppercases the message.
#[get("/yell")]
pub async fn yell(state: web::Data<HttpState>) -> PageResult<HttpResponse> {
    let context = PageContext::new("Yell").with("message", DEMO_MESSAGE)?;
    let html = state.views.render("yell", context, RenderOptions::new())?;
    Ok(html_response(html))
}

/// Render the yell page with `yell` overridden to append emphasis.
///
/// The override applies to this render only; the global helper table keeps
/// the uppercasing default.
#[get("/exclaim")]
pub async fn exclaim(state: web::Data<HttpState>) -> PageResult<HttpResponse> {
    let context = PageContext::new("Exclaim").with("message", DEMO_MESSAGE)?;
    let options = RenderOptions::new().with_helper("yell", Box::new(helpers::exclaim));
    let html = state.views.render("yell", context, options)?;
    Ok(html_response(html))
}

/// Render the echo page under the `shared-templates` layout.
///
/// The page body comes from a partial compiled inline from a literal
/// template string; the optional `message` path segment fills its slot and
/// is simply absent otherwise. Registered behind
/// [`crate::middleware::ExposeTemplates`], which attaches the shared
/// template set this handler forwards to the layout.
pub async fn echo(req: HttpRequest, state: web::Data<HttpState>) -> PageResult<HttpResponse> {
    let mut context = PageContext::new("Echo");
    if let Some(message) = req.match_info().get("message") {
        context = context.with("message", message)?;
    }
    if let Some(shared) = req.extensions().get::<SharedTemplates>() {
        context = context.with("templates", &shared.0)?;
    }

    // Partials share the registry namespace with views, so the inline
    // partial must not reuse the view's name.
    let options = RenderOptions::new()
        .with_layout("shared-templates")
        .with_partial("echo-line", "<p>ECHO: {{message}}</p>");
    let html = state.views.render("echo", context, options)?;
    Ok(html_response(html))
}
