use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::events::adapters::inbound::graphql::GqlEvent;
use crate::modules::events::application::errors::ApiError;
use crate::modules::events::application::query_translator::{DayParams, MonthParams, WeekParams};
use crate::modules::events::core::query::EventQuery;
use crate::shell::state::AppState;

async fn list(context: &Context<'_>, query: EventQuery) -> GqlResult<Vec<GqlEvent>> {
    let state = context.data_unchecked::<AppState>();
    let events = state
        .events
        .get_by_filter(&query)
        .await
        .map_err(|err| ApiError::from(err).extend())?;
    Ok(events.into_iter().map(Into::into).collect())
}

#[derive(Default)]
pub struct EventsByPeriodQuery;

#[Object]
impl EventsByPeriodQuery {
    /// `date` is `YYYY-MM-DD`, `tz` an IANA zone name.
    async fn events_by_day(
        &self,
        context: &Context<'_>,
        date: String,
        tz: String,
    ) -> GqlResult<Vec<GqlEvent>> {
        let query = DayParams {
            date: Some(date),
            tz: Some(tz),
        }
        .translate()
        .map_err(|err| ApiError::from(err).extend())?;
        list(context, query).await
    }

    async fn events_by_week(
        &self,
        context: &Context<'_>,
        year: i32,
        week: i32,
        tz: String,
    ) -> GqlResult<Vec<GqlEvent>> {
        let query = WeekParams {
            year: Some(year.to_string()),
            week: Some(week.to_string()),
            tz: Some(tz),
        }
        .translate()
        .map_err(|err| ApiError::from(err).extend())?;
        list(context, query).await
    }

    async fn events_by_month(
        &self,
        context: &Context<'_>,
        year: i32,
        month: i32,
        tz: String,
    ) -> GqlResult<Vec<GqlEvent>> {
        let query = MonthParams {
            year: Some(year.to_string()),
            month: Some(month.to_string()),
            tz: Some(tz),
        }
        .translate()
        .map_err(|err| ApiError::from(err).extend())?;
        list(context, query).await
    }
}
