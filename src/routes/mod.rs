pub mod feed;
use axum::{response::IntoResponse, routing::get, Json, Router};
use http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

pub use feed::feed_routes;

use crate::{
    handlers::{
        news::{get_news, get_tools},
        theme::{get_theme, put_theme},
    },
    utils::{config::Config, state::AppState},
};

pub fn init_tracing(config: &Config) {
    let level = match config.log_level.as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_CRATE_NAME"), level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/news/{category}", get(get_news))
        .route("/tools/{category}", get(get_tools))
        .route("/theme", get(get_theme).put(put_theme))
        .nest("/feed", feed_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn make_app(config: Config) -> (Router, Arc<AppState>) {
    init_tracing(&config);

    info!("Initializing application...");
    let state = Arc::new(AppState::init(config));
    info!("External clients initialized successfully");

    let app = build_router(state.clone());
    info!("Application initialized successfully");

    (app, state)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": "news dispatch is running"}))).into_response()
}
