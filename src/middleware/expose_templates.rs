//! Middleware exposing the shared template set to view rendering.
//!
//! Routes wrapped in [`ExposeTemplates`] get the precompiled shared template
//! set attached to their request extensions before the handler runs, so the
//! rendered page can embed the sources for reuse by client-side code. A
//! fetch failure short-circuits into the framework's error path; an empty
//! set attaches nothing.

use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage, web};
use futures_util::future::{LocalBoxFuture, Ready, ready};

use crate::inbound::http::PageError;
use crate::render::{SharedTemplate, ViewEngine};

/// Shared template set attached to request extensions by
/// [`ExposeTemplates`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedTemplates(pub Vec<SharedTemplate>);

/// Middleware fetching the shared template set for routes that embed it.
///
/// # Examples
/// ```ignore
/// web::resource("/echo")
///     .wrap(ExposeTemplates::new(views))
///     .route(web::get().to(echo));
/// ```
#[derive(Clone)]
pub struct ExposeTemplates {
    views: Arc<ViewEngine>,
}

impl ExposeTemplates {
    /// Create the middleware over the engine whose shared directory and
    /// cache flag apply.
    pub fn new(views: Arc<ViewEngine>) -> Self {
        Self { views }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ExposeTemplates
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ExposeTemplatesMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ExposeTemplatesMiddleware {
            service: Rc::new(service),
            views: Arc::clone(&self.views),
        }))
    }
}

/// Service wrapper produced by [`ExposeTemplates`].
///
/// Applications should not use this type directly.
pub struct ExposeTemplatesMiddleware<S> {
    service: Rc<S>,
    views: Arc<ViewEngine>,
}

impl<S, B> Service<ServiceRequest> for ExposeTemplatesMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let views = Arc::clone(&self.views);
        let service = Rc::clone(&self.service);
        Box::pin(async move {
            // Directory reads happen off the async workers.
            let templates = web::block(move || views.shared_templates())
                .await
                .map_err(|err| PageError::internal(format!("template fetch aborted: {err}")))?
                .map_err(|err| PageError::internal(err.to_string()))?;

            if !templates.is_empty() {
                req.extensions_mut().insert(SharedTemplates(templates));
            }
            service.call(req).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ViewConfig;
    use actix_web::{App, HttpRequest, HttpResponse, http::StatusCode, test};
    use std::fs;
    use tempfile::TempDir;

    async fn handler(req: HttpRequest) -> HttpResponse {
        match req.extensions().get::<SharedTemplates>() {
            Some(SharedTemplates(templates)) => {
                let names: Vec<&str> = templates.iter().map(|t| t.name.as_str()).collect();
                HttpResponse::Ok().body(names.join(","))
            }
            None => HttpResponse::Ok().body("none"),
        }
    }

    fn engine_over(shared: &std::path::Path) -> Arc<ViewEngine> {
        let views = shared.parent().expect("shared dir has a parent").join("views");
        fs::create_dir_all(&views).expect("create views dir");
        Arc::new(ViewEngine::new(ViewConfig::new(views, shared)).expect("engine builds"))
    }

    async fn respond_through(views: Arc<ViewEngine>) -> (StatusCode, String) {
        let app = test::init_service(
            App::new().service(
                web::resource("/")
                    .wrap(ExposeTemplates::new(views))
                    .route(web::get().to(handler)),
            ),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let status = res.status();
        let body = test::read_body(res).await;
        (status, String::from_utf8(body.to_vec()).expect("utf8 body"))
    }

    #[actix_web::test]
    async fn attaches_non_empty_template_sets() {
        let root = TempDir::new().expect("temp dir");
        let shared = root.path().join("shared");
        fs::create_dir_all(&shared).expect("create shared dir");
        fs::write(shared.join("greeting.hbs"), "<p>Hi</p>").expect("write template");
        fs::write(shared.join("item.hbs"), "<li>{{label}}</li>").expect("write template");

        let (status, body) = respond_through(engine_over(&shared)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "greeting,item");
    }

    #[actix_web::test]
    async fn empty_sets_leave_extensions_untouched() {
        let root = TempDir::new().expect("temp dir");
        let shared = root.path().join("shared");
        fs::create_dir_all(&shared).expect("create shared dir");

        let (status, body) = respond_through(engine_over(&shared)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "none");
    }

    #[actix_web::test]
    async fn fetch_failure_reaches_the_error_path() {
        let root = TempDir::new().expect("temp dir");
        let shared = root.path().join("shared");
        fs::create_dir_all(&shared).expect("create shared dir");
        let views = engine_over(&shared);
        // Remove the directory after engine construction so the fetch fails.
        fs::remove_dir_all(&shared).expect("remove shared dir");

        let app = test::init_service(
            App::new().service(
                web::resource("/")
                    .wrap(ExposeTemplates::new(views))
                    .route(web::get().to(handler)),
            ),
        )
        .await;
        let err = test::try_call_service(&app, test::TestRequest::get().uri("/").to_request())
            .await
            .expect_err("fetch failure surfaces as an error");
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
