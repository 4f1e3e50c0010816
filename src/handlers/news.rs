use std::sync::Arc;

use crate::utils::{github_client::NewsSource, state::AppState};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;

pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> impl IntoResponse {
    let news = state.github.fetch_news(&category).await;
    (StatusCode::OK, Json(news)).into_response()
}

pub async fn get_tools(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> impl IntoResponse {
    let tools = state.github.fetch_tools(&category).await;
    (StatusCode::OK, Json(tools)).into_response()
}
