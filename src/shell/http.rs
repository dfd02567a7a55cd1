use axum::{
    Extension, Router,
    http::{HeaderName, Method, header},
    routing::get,
};
use std::path::Path;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::modules::events::use_cases::create_event::inbound::http as create_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::events::use_cases::get_event::inbound::http as get_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::modules::events::use_cases::list_events_by_period::inbound::http as period_http;
use crate::modules::events::use_cases::update_event::inbound::http as update_http;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
}

/// REST routes under `/api/events`, GraphQL at `/gql`, and the frontend for everything else.
pub fn router(state: AppState, frontend: Option<&Path>) -> Router {
    let schema = build_schema(state.clone());

    let api = Router::new()
        .route(
            "/api/events",
            get(list_http::handle).post(create_http::handle),
        )
        .route("/api/events/all", get(list_http::handle_all))
        .route("/api/events/day", get(period_http::handle_day))
        .route("/api/events/week", get(period_http::handle_week))
        .route("/api/events/month", get(period_http::handle_month))
        .route(
            "/api/events/{uuid}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state);

    let app = match frontend {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };

    app.layer(cors()).layer(TraceLayer::new_for_http())
}
