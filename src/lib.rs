//! annuaire: a server-rendered Handlebars user directory demo.
//!
//! Renders Handlebars views over actix-web, persists a single `User` entity
//! in PostgreSQL through Diesel, and exposes a shared template set to
//! client-side rendering via middleware.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod render;
pub mod server;
