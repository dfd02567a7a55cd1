use axum::{
    Json,
    extract::{Query, State},
};

use crate::modules::events::application::errors::ApiError;
use crate::modules::events::application::query_translator::{DayParams, MonthParams, WeekParams};
use crate::modules::events::core::event::Event;
use crate::modules::events::core::query::EventQuery;
use crate::shell::state::AppState;

async fn list(state: &AppState, query: EventQuery) -> Result<Json<Vec<Event>>, ApiError> {
    Ok(Json(state.events.get_by_filter(&query).await?))
}

/// `GET /api/events/day?date&tz`
pub async fn handle_day(
    State(state): State<AppState>,
    Query(params): Query<DayParams>,
) -> Result<Json<Vec<Event>>, ApiError> {
    list(&state, params.translate()?).await
}

/// `GET /api/events/week?year&week&tz`
pub async fn handle_week(
    State(state): State<AppState>,
    Query(params): Query<WeekParams>,
) -> Result<Json<Vec<Event>>, ApiError> {
    list(&state, params.translate()?).await
}

/// `GET /api/events/month?year&month&tz`
pub async fn handle_month(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> Result<Json<Vec<Event>>, ApiError> {
    list(&state, params.translate()?).await
}
