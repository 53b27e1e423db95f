mod assignments;
mod config;
mod coordinates;
mod error;
mod state;
mod usage;

use std::sync::Arc;

use axum::http::Method;
use axum::routing::post;
use axum::{Router, middleware, serve};
use rickshaw_directions::mapbox::{MapboxDirectionsClient, MapboxDirectionsParams};
use rickshaw_dispatch::engine::AssignmentEngine;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};

use crate::config::ApiConfig;
use crate::state::AppState;
use crate::usage::UsageTracker;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = ApiConfig::from_env()?;

    let resolver = MapboxDirectionsClient::new(MapboxDirectionsParams {
        base_url: config.mapbox_base_url.clone(),
        access_token: config.mapbox_access_token.clone(),
        timeout: config.route_timeout,
    });

    let state = Arc::new(AppState {
        engine: AssignmentEngine::new(resolver),
        bounding_box: config.bounding_box,
        highlight_color: config.highlight_color.clone(),
        usage: UsageTracker::new(config.rate_limit_ceiling, config.rate_limit_window),
    });

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/coordinates", post(coordinates::coordinates_handler))
        .route("/assignments", post(assignments::assignments_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            usage::rate_limit,
        ))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("listening on {}", config.bind_addr);

    serve(listener, app).await?;

    Ok(())
}
