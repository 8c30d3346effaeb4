use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::catalog::SERVICE_AREAS;
use crate::errors::AppError;
use crate::models::{Category, ServiceOption, ServiceRecord};
use crate::services::pricing::parse_options;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ServicesQuery {
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct ServiceResponse {
    #[serde(flatten)]
    service: ServiceRecord,
    options: Vec<ServiceOption>,
}

impl From<&ServiceRecord> for ServiceResponse {
    fn from(record: &ServiceRecord) -> Self {
        Self {
            options: parse_options(record),
            service: record.clone(),
        }
    }
}

// GET /api/services
pub async fn list_services(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ServicesQuery>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let services = match query.category.as_deref() {
        Some(raw) => {
            let category = Category::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("unknown category: {raw}")))?;
            state
                .catalog
                .by_category(category)
                .map(ServiceResponse::from)
                .collect()
        }
        None => state.catalog.all().iter().map(ServiceResponse::from).collect(),
    };
    Ok(Json(services))
}

// GET /api/services/:id
pub async fn get_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ServiceResponse>, AppError> {
    state
        .catalog
        .get(&id)
        .map(|record| Json(ServiceResponse::from(record)))
        .ok_or_else(|| AppError::NotFound(format!("service {id}")))
}

// GET /api/areas
pub async fn list_areas() -> Json<&'static [&'static str]> {
    Json(SERVICE_AREAS)
}
