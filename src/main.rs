//! Entry point: wires configuration, the view engine, the database pool,
//! and the HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use annuaire::domain::ports::UserRepository;
use annuaire::inbound::http::HttpState;
use annuaire::outbound::persistence::{DbPool, DieselUserRepository};
use annuaire::render::ViewEngine;
use annuaire::server::{self, AppConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::parse();

    // A broken view directory is fatal: nothing can render without it.
    let views = ViewEngine::new(config.view_config())
        .map(Arc::new)
        .map_err(|err| std::io::Error::other(format!("view engine setup failed: {err}")))?;

    // An unreachable database is not: requests that need the store fail
    // individually until it recovers.
    let pool = DbPool::connect(config.pool_config());
    match pool.ping().await {
        Ok(()) => info!("database connection established"),
        Err(err) => error!(error = %err, "database connection failed; user routes will degrade"),
    }
    let users: Arc<dyn UserRepository> = Arc::new(DieselUserRepository::new(pool));

    let state = HttpState::new(users, views);
    let bind_addr = config.bind_addr;
    let public_dir = config.public_dir.clone();

    info!(%bind_addr, "annuaire listening");
    HttpServer::new(move || {
        App::new().configure(server::routes(state.clone(), public_dir.clone()))
    })
    .bind(bind_addr)?
    .run()
    .await
}
