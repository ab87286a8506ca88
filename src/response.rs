//! Response body shapes shared across handlers.

use serde::Serialize;

/// Confirmation payload for operations that return no record.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        MessageBody {
            message: message.into(),
        }
    }
}
