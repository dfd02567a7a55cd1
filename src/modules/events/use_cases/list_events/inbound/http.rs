use axum::{
    Json,
    extract::{Query, State},
};

use crate::modules::events::application::errors::ApiError;
use crate::modules::events::application::query_translator::EventListParams;
use crate::modules::events::core::event::Event;
use crate::shell::state::AppState;

/// `GET /api/events?start&end&sort&ord&limit`
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let query = params.translate()?;
    let events = state.events.get_by_filter(&query).await?;
    Ok(Json(events))
}

/// `GET /api/events/all`, every event in id order.
pub async fn handle_all(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    Ok(Json(state.events.get_all().await?))
}
