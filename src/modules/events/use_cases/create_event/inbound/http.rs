use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Serialize;

use crate::modules::events::application::errors::ApiError;
use crate::modules::events::application::query_translator::{EventInput, ValidationError};
use crate::shell::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateEventResponse {
    pub uuid: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<EventInput>, JsonRejection>,
) -> Result<Json<CreateEventResponse>, ApiError> {
    let Json(input) = body.map_err(|rejection| ValidationError::InvalidBody(rejection.body_text()))?;
    let uuid = state.events.create(input.into()).await?;
    tracing::info!(uuid = %uuid, "event created");
    Ok(Json(CreateEventResponse { uuid }))
}
