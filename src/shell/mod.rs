// Composition root for the calendar events service.
//
// Responsibilities
// - Read settings from config.toml and the environment.
// - Instantiate the configured event store once and share it through AppState.
// - Mount the HTTP and GraphQL adapters on one router.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
