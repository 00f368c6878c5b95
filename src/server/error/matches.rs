use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::ActiveEnum;
use thiserror::Error;
use validator::ValidationErrors;

use crate::{model::api::ErrorDto, server::error::Error as AppError};

/// Violations of the match rules, every variant is terminal for the request.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error("User {user_id} does not own {entity} {id}")]
    Forbidden {
        entity: &'static str,
        id: i32,
        user_id: i32,
    },
    #[error("{0}")]
    Validation(String),
    #[error(
        "{message} (match is {}, requires {})",
        status_name(.current),
        status_name(.required)
    )]
    InvalidState {
        message: &'static str,
        current: MatchStatus,
        required: MatchStatus,
    },
    #[error("composition incomplete: {starters} of 11 starters assigned")]
    IncompleteComposition { starters: u64 },
}

impl MatchError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Shared precondition of every event recording operation.
    pub fn not_in_progress(current: MatchStatus) -> Self {
        Self::InvalidState {
            message: "match is not in progress",
            current,
            required: MatchStatus::Live,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::MatchError(MatchError::Validation(errors.to_string()))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MatchError(MatchError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for MatchError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound { entity, .. } => {
                (StatusCode::NOT_FOUND, format!("{} not found", capitalize(entity)))
            }
            // Never reveal who owns the entity
            Self::Forbidden { .. } => (
                StatusCode::FORBIDDEN,
                "You do not have access to this resource".to_string(),
            ),
            Self::Validation(_) | Self::InvalidState { .. } | Self::IncompleteComposition { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
        };

        tracing::debug!("Match request rejected: {}", self);

        (status, Json(ErrorDto { error: message })).into_response()
    }
}

fn status_name(status: &MatchStatus) -> String {
    status.to_value()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
