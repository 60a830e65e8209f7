//! Content reaction shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::attribution::Authored;

/// A content reaction (emote) as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReactionPayload {
    /// The id of the content reaction
    pub id: u32,
    /// When the emote was added
    pub created_at: DateTime<Utc>,
    /// The id of the user who added this reaction. Holds the sentinel id
    /// when `created_by_webhook_id` is present.
    pub created_by: String,
    /// The id of the webhook who added this reaction, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_webhook_id: Option<String>,
}

impl Authored for ContentReactionPayload {
    fn created_by(&self) -> &str {
        &self.created_by
    }

    fn created_by_webhook_id(&self) -> Option<&str> {
        self.created_by_webhook_id.as_deref()
    }
}
