//! HTTP Server
//!
//! Builds the route table and serves it until Ctrl+C.

use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tokio::net::TcpListener;

use super::handlers;
use crate::config::Config;
use crate::engine::Engine;
use crate::error::{FleetError, Result};

/// Build the `/vehicles` router over a shared engine
pub fn router(engine: Arc<Engine>) -> Router {
    Router::new()
        .route("/vehicles", get(handlers::get_all).post(handlers::create))
        .route("/vehicles/batch", post(handlers::create_many))
        .route(
            "/vehicles/color/:color/year/:year",
            get(handlers::get_by_color_and_year),
        )
        .route(
            "/vehicles/brand/:brand/between/:start_year/:end_year",
            get(handlers::get_by_brand_between_years),
        )
        .route(
            "/vehicles/average_speed/brand/:brand",
            get(handlers::average_speed_by_brand),
        )
        .route(
            "/vehicles/average_capacity/brand/:brand",
            get(handlers::average_capacity_by_brand),
        )
        .route("/vehicles/fuel_type/:type", get(handlers::get_by_fuel_type))
        .route("/vehicles/transmission/:type", get(handlers::get_by_transmission))
        .route("/vehicles/dimensions", get(handlers::get_by_dimensions))
        .route("/vehicles/weight", get(handlers::get_by_weight))
        .route("/vehicles/:id", delete(handlers::delete))
        .route("/vehicles/:id/update_speed", put(handlers::update_max_speed))
        .route("/vehicles/:id/update_fuel", put(handlers::update_fuel_type))
        .layer(middleware::from_fn(log_request))
        .with_state(engine)
}

/// Access log line per request
async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    tracing::info!("{} {} -> {}", method, uri, response.status().as_u16());
    response
}

/// HTTP server for FleetDB
pub struct Server {
    config: Config,
    engine: Arc<Engine>,
}

impl Server {
    /// Create a new server with the given config and engine
    pub fn new(config: Config, engine: Arc<Engine>) -> Self {
        Self { config, engine }
    }

    /// Bind the configured address and serve until Ctrl+C
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.listen_addr)
            .await
            .map_err(|e| {
                FleetError::Network(format!("failed to bind {}: {}", self.config.listen_addr, e))
            })?;

        tracing::info!("Listening on {}", listener.local_addr()?);

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, router(self.engine))
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // without a signal handler the server runs until killed
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, initiating shutdown...");
}
