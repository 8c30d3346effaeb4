use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{BookingDraft, ContactDetails};
use crate::services::message::{format_booking_message, format_inquiry_message};
use crate::services::pricing::format_price;
use crate::state::AppState;

#[derive(Serialize)]
pub struct LinkResponse {
    pub message: String,
    pub url: String,
}

// GET /api/booking/link
#[derive(Deserialize)]
pub struct LinkQuery {
    /// Service id or display name.
    pub service: Option<String>,
}

pub async fn inquiry_link(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LinkQuery>,
) -> Result<Json<LinkResponse>, AppError> {
    let service_name = match query.service.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => {
            let record = state
                .catalog
                .get(s)
                .or_else(|| state.catalog.find_by_name(s))
                .ok_or_else(|| AppError::NotFound(format!("service {s}")))?;
            Some(record.name.as_str())
        }
        _ => None,
    };

    let message = format_inquiry_message(&state.config.business_name, service_name);
    let url = state.messaging.deep_link(&message);
    Ok(Json(LinkResponse { message, url }))
}

// POST /api/booking/draft
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DraftOperation {
    Start { service_id: String },
    AddGuest,
    RemoveGuest { index: usize },
    SetService { index: usize, service_id: String },
    SetDuration { index: usize, duration: String },
}

#[derive(Deserialize)]
pub struct DraftRequest {
    #[serde(default)]
    pub guests: BookingDraft,
    pub operation: DraftOperation,
}

#[derive(Serialize)]
pub struct DraftResponse {
    pub guests: BookingDraft,
    pub applied: bool,
    pub total: u64,
    pub total_label: String,
}

pub async fn apply_draft_operation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DraftRequest>,
) -> Result<Json<DraftResponse>, AppError> {
    let catalog = &state.catalog;
    let mut draft = req.guests.repriced(catalog);

    let applied = match &req.operation {
        DraftOperation::Start { service_id } => {
            let record = catalog
                .get(service_id)
                .ok_or_else(|| AppError::NotFound(format!("service {service_id}")))?;
            draft = BookingDraft::seeded(record);
            true
        }
        DraftOperation::AddGuest => draft.add_guest(catalog),
        DraftOperation::RemoveGuest { index } => draft.remove_guest(*index),
        DraftOperation::SetService { index, service_id } => {
            draft.set_service(catalog, *index, service_id)
        }
        DraftOperation::SetDuration { index, duration } => {
            draft.set_duration(catalog, *index, duration)
        }
    };

    tracing::debug!(operation = ?req.operation, applied, guests = draft.len(), "draft operation");

    let total = draft.total();
    Ok(Json(DraftResponse {
        guests: draft,
        applied,
        total,
        total_label: format_price(total),
    }))
}

// POST /api/booking/quote
#[derive(Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub contact: ContactDetails,
    pub guests: BookingDraft,
}

#[derive(Serialize)]
pub struct QuoteResponse {
    pub guests: BookingDraft,
    /// Guests whose duration was changed by repricing.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub adjusted: Vec<usize>,
    pub total: u64,
    pub total_label: String,
    pub message: String,
    pub url: String,
}

pub async fn quote(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    if req.guests.is_empty() {
        return Err(AppError::BadRequest(
            "a booking needs at least one guest".to_string(),
        ));
    }

    let draft = req.guests.repriced(&state.catalog);
    let adjusted = draft.adjusted_from(&req.guests);
    let total = draft.total();
    let message = format_booking_message(&state.config.business_name, &req.contact, &draft);
    let url = state.messaging.deep_link(&message);

    tracing::info!(guests = draft.len(), total, adjusted = adjusted.len(), "booking quote prepared");

    Ok(Json(QuoteResponse {
        guests: draft,
        adjusted,
        total,
        total_label: format_price(total),
        message,
        url,
    }))
}
