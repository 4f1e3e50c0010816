use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::feed::{change_category, get_feed, load_more, search, toggle_tag},
    utils::state::AppState,
};

pub fn feed_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_feed))
        .route("/category", post(change_category))
        .route("/search", post(search))
        .route("/tags/{tag_id}/toggle", post(toggle_tag))
        .route("/more", post(load_more))
}
