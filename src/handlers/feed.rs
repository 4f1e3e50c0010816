use std::sync::Arc;

use crate::utils::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize)]
pub struct CategoryBody {
    category: String,
}

#[derive(Deserialize)]
pub struct SearchBody {
    #[serde(default)]
    term: String,
}

pub async fn get_feed(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.controller.snapshot().await)).into_response()
}

/// Starts a category switch and answers right away with the loading view.
pub async fn change_category(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CategoryBody>,
) -> impl IntoResponse {
    let ticket = state.controller.begin_category_change(&body.category).await;
    info!(category = ticket.view.key(), "category changed");

    let controller = state.controller.clone();
    tokio::spawn(async move {
        controller.complete_category_change(ticket).await;
    });

    (StatusCode::ACCEPTED, Json(state.controller.snapshot().await)).into_response()
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchBody>,
) -> impl IntoResponse {
    (StatusCode::OK, Json(state.controller.search(&body.term).await)).into_response()
}

pub async fn toggle_tag(
    State(state): State<Arc<AppState>>,
    Path(tag_id): Path<String>,
) -> impl IntoResponse {
    (StatusCode::OK, Json(state.controller.toggle_tag(&tag_id).await)).into_response()
}

pub async fn load_more(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.controller.load_more().await)).into_response()
}
