use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use tracing::{instrument, warn};

use super::dto::{Lead, LeadCreate};
use super::services;
use crate::{error::ApiError, state::AppState};

pub fn lead_routes() -> Router<AppState> {
    Router::new().route("/leads", get(list_leads).post(create_lead))
}

/// POST /leads
/// Malformed bodies are reported as validation errors, same as bad fields.
#[instrument(skip(state, payload))]
pub async fn create_lead(
    State(state): State<AppState>,
    payload: Result<Json<LeadCreate>, JsonRejection>,
) -> Result<Json<Lead>, ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "lead payload rejected");
        ApiError::Validation(rejection.body_text())
    })?;
    let lead = services::submit_lead(state.store.as_ref(), &state.notifications, input).await?;
    Ok(Json(lead))
}

#[instrument(skip(state))]
pub async fn list_leads(State(state): State<AppState>) -> Result<Json<Vec<Lead>>, ApiError> {
    Ok(Json(services::list_leads(state.store.as_ref()).await?))
}
