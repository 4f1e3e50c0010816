use std::sync::Arc;

use crate::{
    models::{error::Error, theme::ThemePayload},
    utils::state::AppState,
};
use axum::{extract::State, Json};

pub async fn get_theme(State(state): State<Arc<AppState>>) -> Json<ThemePayload> {
    Json(ThemePayload {
        theme: state.theme.load(),
    })
}

pub async fn put_theme(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ThemePayload>,
) -> Result<Json<ThemePayload>, Error> {
    state.theme.save(payload.theme)?;
    Ok(Json(payload))
}
