use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::events::application::errors::ApiError;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteEventMutation;

#[Object]
impl DeleteEventMutation {
    async fn delete_event(&self, context: &Context<'_>, uuid: String) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .events
            .delete(&uuid)
            .await
            .map_err(|err| ApiError::from(err).extend())?;
        tracing::info!(uuid = %uuid, "event deleted");
        Ok(true)
    }
}
