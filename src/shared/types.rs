use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain `{"message": "..."}` body used for delete acknowledgments and every
/// error response. No envelope is wrapped around success payloads.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
