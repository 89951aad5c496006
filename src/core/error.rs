use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::Message;

#[derive(Debug, Error)]
pub enum AppError {
    /// The referenced entity does not exist, or the identifier is not a
    /// well-formed ObjectId. Both surface as 404.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A store round trip failed for any reason other than a clean "no
    /// match". The driver error is logged, never returned to the caller.
    #[error("Failed to {action} {entity}")]
    Store {
        action: &'static str,
        entity: &'static str,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn store(action: &'static str, entity: &'static str, source: mongodb::error::Error) -> Self {
        AppError::Store {
            action,
            entity,
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(entity) => {
                (StatusCode::NOT_FOUND, format!("{} not found", entity))
            }
            AppError::Store {
                action,
                entity,
                ref source,
            } => {
                tracing::error!("Store error while trying to {} {}: {:?}", action, entity, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to {} {}", action, entity),
                )
            }
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, Json(Message::new(message))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
