//! # HTTP Server
//!
//! Combines the entity routers into one application and serves it.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::observability::{Logger, Severity};

use super::aircraft_routes::aircraft_routes;
use super::airport_routes::airport_routes;
use super::AppState;

/// HTTP server for the reference-data API
pub struct HttpServer {
    addr: String,
    router: Router,
}

impl HttpServer {
    pub fn new(config: AppConfig) -> Self {
        let addr = config.server.addr.clone();
        let state = Arc::new(AppState::new(&config));
        let router = Self::build_router(state);
        Self { addr, router }
    }

    fn build_router(state: Arc<AppState>) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(health_routes())
            .merge(aircraft_routes(state.clone()))
            .merge(airport_routes(state))
            .layer(cors)
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<(), std::io::Error> {
        Logger::log(Severity::Info, "server_started", &[("addr", &self.addr)]);

        let listener = TcpListener::bind(&self.addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/version", get(version_handler))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn version_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
