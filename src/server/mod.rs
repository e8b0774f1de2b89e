//! Route registration and app assembly.

pub mod config;

use std::path::PathBuf;
use std::sync::Arc;

use actix_files::Files;
use actix_web::web;

use crate::inbound::http::{HttpState, pages, users};
use crate::middleware::ExposeTemplates;

pub use config::AppConfig;

/// Register every route on a `ServiceConfig`.
///
/// Usable from `main` and from integration tests:
/// `App::new().configure(server::routes(state, public_dir))`. The echo
/// resource is wrapped in [`ExposeTemplates`]; the static file service is
/// mounted last so unmatched paths fall through to the public directory and
/// then to the default not-found response.
pub fn routes(state: HttpState, public_dir: PathBuf) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let views = Arc::clone(&state.views);
        cfg.app_data(web::Data::new(state))
            .service(pages::home)
            .service(pages::yell)
            .service(pages::exclaim)
            .service(
                // The {message} segment needs a non-empty match, so the
                // bare and trailing-slash forms are listed explicitly.
                web::resource(["/echo", "/echo/", "/echo/{message}"])
                    .wrap(ExposeTemplates::new(views))
                    .route(web::get().to(pages::echo)),
            )
            .service(users::list_users)
            .service(users::create_user)
            .service(users::delete_user)
            .service(Files::new("/", public_dir));
    }
}
