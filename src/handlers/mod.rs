pub mod booking;
pub mod catalog;
pub mod health;
pub mod recommend;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/services", get(catalog::list_services))
        .route("/api/services/:id", get(catalog::get_service))
        .route("/api/areas", get(catalog::list_areas))
        .route("/api/booking/link", get(booking::inquiry_link))
        .route("/api/booking/draft", post(booking::apply_draft_operation))
        .route("/api/booking/quote", post(booking::quote))
        .route("/api/recommend", post(recommend::recommend))
        .route("/api/recommend/booking", post(recommend::book_recommendation))
        .with_state(state)
}
