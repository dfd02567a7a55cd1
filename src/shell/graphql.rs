use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::events::use_cases::create_event::inbound::graphql::CreateEventMutation;
use crate::modules::events::use_cases::delete_event::inbound::graphql::DeleteEventMutation;
use crate::modules::events::use_cases::get_event::inbound::graphql::GetEventQuery;
use crate::modules::events::use_cases::list_events::inbound::graphql::ListEventsQuery;
use crate::modules::events::use_cases::list_events_by_period::inbound::graphql::EventsByPeriodQuery;
use crate::modules::events::use_cases::update_event::inbound::graphql::UpdateEventMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListEventsQuery, EventsByPeriodQuery, GetEventQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(CreateEventMutation, UpdateEventMutation, DeleteEventMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub const GRAPHQL_PATH: &str = "/gql";

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
