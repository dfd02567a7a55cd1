use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use async_graphql::ErrorExtensions;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::modules::events::application::query_translator::ValidationError;
use crate::modules::events::core::ports::StoreError;

/// Error taxonomy shared by every inbound adapter.
///
/// Messages are what clients see. Backend details stay in the logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("does not exist")]
    NotFound(String),

    #[error("data access failure")]
    Access(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(uuid) => ApiError::NotFound(uuid),
            StoreError::Access(detail) => ApiError::Access(detail),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Access(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Extension code attached to GraphQL errors.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "BAD_REQUEST",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Access(_) => "INTERNAL",
        }
    }

    fn log(&self) {
        match self {
            ApiError::Validation(err) => debug!(error = %err, "rejected request"),
            ApiError::NotFound(uuid) => debug!(uuid = %uuid, "event not found"),
            ApiError::Access(detail) => error!(detail = %detail, "event store access failed"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn success() -> Self {
        Self {
            message: "success".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let body = MessageBody {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        self.log();
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, extensions| {
            extensions.set("code", code);
        })
    }
}
