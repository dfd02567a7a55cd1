use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::events::adapters::inbound::graphql::GqlEvent;
use crate::modules::events::application::errors::ApiError;
use crate::modules::events::application::query_translator::EventListParams;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListEventsQuery;

#[Object]
impl ListEventsQuery {
    /// Events overlapping `[start, end]`, sorted by `sort`/`ord` and capped at `limit` (0 = all).
    async fn events(
        &self,
        context: &Context<'_>,
        start: Option<String>,
        end: Option<String>,
        sort: Option<String>,
        ord: Option<String>,
        limit: Option<i64>,
    ) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let params = EventListParams {
            start,
            end,
            sort,
            ord,
            limit: limit.map(|limit| limit.to_string()),
        };
        let query = params
            .translate()
            .map_err(|err| ApiError::from(err).extend())?;
        let events = state
            .events
            .get_by_filter(&query)
            .await
            .map_err(|err| ApiError::from(err).extend())?;
        Ok(events.into_iter().map(Into::into).collect())
    }

    async fn all_events(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let events = state
            .events
            .get_all()
            .await
            .map_err(|err| ApiError::from(err).extend())?;
        Ok(events.into_iter().map(Into::into).collect())
    }
}
