use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::events::adapters::inbound::graphql::event_details;
use crate::modules::events::application::errors::ApiError;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateEventMutation;

#[Object]
impl UpdateEventMutation {
    async fn update_event(
        &self,
        context: &Context<'_>,
        uuid: String,
        title: String,
        description: Option<String>,
        date_from: String,
        date_to: String,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let details = event_details(title, description, &date_from, &date_to)
            .map_err(|err| ApiError::from(err).extend())?;
        state
            .events
            .update(&uuid, details)
            .await
            .map_err(|err| ApiError::from(err).extend())?;
        tracing::info!(uuid = %uuid, "event updated");
        Ok(true)
    }
}
