use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::events::application::errors::ApiError;
use crate::modules::events::core::event::Event;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Json<Event>, ApiError> {
    Ok(Json(state.events.get_by_uuid(&uuid).await?))
}
