//! Application configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::outbound::persistence::PoolConfig;
use crate::render::ViewConfig;

/// Runtime configuration, parsed from flags with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "annuaire", about = "Server-rendered Handlebars user directory demo")]
pub struct AppConfig {
    /// Socket address to bind.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind_addr: SocketAddr,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost/annuaire"
    )]
    pub database_url: String,

    /// Directory holding page templates and layouts.
    #[arg(long, env = "VIEWS_DIR", default_value = "views")]
    pub views_dir: PathBuf,

    /// Directory of templates shared with client-side rendering.
    #[arg(long, env = "SHARED_TEMPLATES_DIR", default_value = "shared/templates")]
    pub shared_templates_dir: PathBuf,

    /// Directory of static assets served as the route fallback.
    #[arg(long, env = "PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// Re-read templates from disk on every render instead of caching them.
    #[arg(long, env = "NO_VIEW_CACHE")]
    pub no_view_cache: bool,
}

impl AppConfig {
    /// View engine configuration derived from the directory and cache flags.
    #[must_use]
    pub fn view_config(&self) -> ViewConfig {
        ViewConfig::new(&self.views_dir, &self.shared_templates_dir)
            .with_cache(!self.no_view_cache)
    }

    /// Connection pool configuration for the database URL.
    #[must_use]
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(&self.database_url)
    }
}
