//! # HTTP Server Module
//!
//! Thin transport adapter over the user store. Maps inbound requests to
//! store operations and store results to enveloped JSON responses.
//!
//! # Endpoints
//!
//! - `/health` - Liveness check with current wall-clock time
//! - `/api/users` - List and create
//! - `/api/users/:id` - Get, replace (PUT), patch, delete
//! - anything else - Generic not-found envelope

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod response;
pub mod server;
pub mod user_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
