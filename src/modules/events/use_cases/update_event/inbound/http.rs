use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::modules::events::application::errors::{ApiError, MessageBody};
use crate::modules::events::application::query_translator::{EventInput, ValidationError};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
    body: Result<Json<EventInput>, JsonRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Json(input) = body.map_err(|rejection| ValidationError::InvalidBody(rejection.body_text()))?;
    state.events.update(&uuid, input.into()).await?;
    tracing::info!(uuid = %uuid, "event updated");
    Ok(Json(MessageBody::success()))
}
