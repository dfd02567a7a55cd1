use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::events::adapters::inbound::graphql::GqlEvent;
use crate::modules::events::application::errors::ApiError;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct GetEventQuery;

#[Object]
impl GetEventQuery {
    async fn event(&self, context: &Context<'_>, uuid: String) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let event = state
            .events
            .get_by_uuid(&uuid)
            .await
            .map_err(|err| ApiError::from(err).extend())?;
        Ok(event.into())
    }
}
