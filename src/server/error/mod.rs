//! Error types for the touchline server.
//!
//! Domain errors (match rules, authentication, configuration) live in their own
//! submodules and are aggregated here together with infrastructure errors. Every error
//! implements `IntoResponse`, so handlers simply return `Result<_, Error>`.

pub mod auth;
pub mod config;
pub mod matches;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, matches::MatchError},
};

/// Main error type for the touchline server.
///
/// Uses `thiserror`'s `#[from]` attribute so the `?` operator converts domain and
/// library errors automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (no user ID in session).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Match rule violation (not found, ownership, validation, invalid state).
    #[error(transparent)]
    MatchError(#[from] MatchError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in touchline's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and operations not allowed in the match's status
/// - 401 Unauthorized - No authenticated user in session
/// - 403 Forbidden - Entity belongs to another user's team
/// - 404 Not Found - Entity does not exist
/// - 500 Internal Server Error - Everything else (logged, generic body)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::MatchError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client so implementation
/// details never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
