//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the repository port and the view engine, both constructed once in
//! `main` and injected explicitly. No ambient globals.

use std::sync::Arc;

use crate::domain::ports::UserRepository;
use crate::render::ViewEngine;

/// Parameter object bundling the services page handlers need.
#[derive(Clone)]
pub struct HttpState {
    /// Persistence port for user records.
    pub users: Arc<dyn UserRepository>,
    /// Template renderer shared across requests.
    pub views: Arc<ViewEngine>,
}

impl HttpState {
    /// Bundle the injected services.
    pub fn new(users: Arc<dyn UserRepository>, views: Arc<ViewEngine>) -> Self {
        Self { users, views }
    }
}
