use async_graphql::{Context, ErrorExtensions, ID, Object, Result as GqlResult};

use crate::modules::events::adapters::inbound::graphql::event_details;
use crate::modules::events::application::errors::ApiError;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateEventMutation;

#[Object]
impl CreateEventMutation {
    /// Returns the uuid assigned to the new event.
    async fn create_event(
        &self,
        context: &Context<'_>,
        title: String,
        description: Option<String>,
        date_from: String,
        date_to: String,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let details = event_details(title, description, &date_from, &date_to)
            .map_err(|err| ApiError::from(err).extend())?;
        let uuid = state
            .events
            .create(details)
            .await
            .map_err(|err| ApiError::from(err).extend())?;
        tracing::info!(uuid = %uuid, "event created");
        Ok(ID(uuid))
    }
}
