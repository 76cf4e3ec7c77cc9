//! # HTTP Server
//!
//! Router assembly and serving loop: health routes at the root, user
//! routes under /api, a generic not-found envelope for everything else,
//! plus CORS and request tracing layers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::UserStore;

use super::config::HttpServerConfig;
use super::errors::ApiError;
use super::health_routes::health_routes;
use super::user_routes::{user_routes, UserState};

/// HTTP server for the user CRUD API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new server with default configuration and the seed records
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default(), UserStore::seeded())
    }

    /// Create a new server with custom configuration and store
    pub fn with_config(config: HttpServerConfig, store: UserStore) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(config: &HttpServerConfig, store: UserStore) -> Router {
        let user_state = Arc::new(UserState::new(store));

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            // Use configured origins for production
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Health check at root level
            .merge(health_routes())
            // User routes under /api
            .nest("/api", user_routes(user_state))
            // Generic not-found envelope for unknown routes
            .fallback(route_fallback)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        tracing::info!(%addr, "starting userbase HTTP server");
        tracing::info!("health check: http://{}/health", addr);
        tracing::info!("API base URL: http://{}/api/users", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fallback for requests matching no known resource route
async fn route_fallback() -> ApiError {
    ApiError::RouteNotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(config, UserStore::new());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }
}
