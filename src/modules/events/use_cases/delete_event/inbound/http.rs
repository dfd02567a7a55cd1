use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::events::application::errors::{ApiError, MessageBody};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    state.events.delete(&uuid).await?;
    tracing::info!(uuid = %uuid, "event deleted");
    Ok(Json(MessageBody::success()))
}
