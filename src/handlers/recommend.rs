use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{ChatReply, RecommendationBooking};
use crate::services::ai::recommend as concierge;
use crate::services::message::{format_recommendation_message, recommendation_estimate};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RecommendRequest {
    pub message: String,
}

// POST /api/recommend
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecommendRequest>,
) -> Json<ChatReply> {
    let reply = concierge::recommend(
        state.llm.as_ref(),
        &state.catalog,
        &state.config.business_name,
        &req.message,
    )
    .await;

    tracing::info!(
        recommended = reply.recommendation.as_ref().map(|r| r.service_id.as_str()),
        "concierge replied"
    );

    Json(reply)
}

#[derive(Serialize)]
pub struct RecommendationBookingResponse {
    pub total_label: String,
    pub message: String,
    pub url: String,
}

// POST /api/recommend/booking
pub async fn book_recommendation(
    State(state): State<Arc<AppState>>,
    Json(booking): Json<RecommendationBooking>,
) -> Result<Json<RecommendationBookingResponse>, AppError> {
    if state.catalog.get(&booking.service_id).is_none() {
        return Err(AppError::NotFound(format!("service {}", booking.service_id)));
    }

    let total_label = recommendation_estimate(
        &state.catalog,
        &booking.service_id,
        &booking.duration,
        booking.guests,
    );
    let message = format_recommendation_message(&state.config.business_name, &state.catalog, &booking);
    let url = state.messaging.deep_link(&message);

    Ok(Json(RecommendationBookingResponse {
        total_label,
        message,
        url,
    }))
}
