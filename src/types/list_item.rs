//! List item shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::attribution::Authored;

/// Request body for creating a list item
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListItemOptions {
    /// The message of the list item
    pub message: String,
    /// The note of the list item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CreateListItemOptions {
    pub fn new(message: impl Into<String>) -> Self {
        CreateListItemOptions {
            message: message.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A list item as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemPayload {
    /// The id of the list item
    pub id: String,
    /// The id of the channel
    pub channel_id: String,
    /// The message of the list item
    pub message: String,
    /// The note of the list item
    pub note: String,
    /// When the list item was created
    pub created_at: DateTime<Utc>,
    /// The id of the user who created this list item. Holds the sentinel id
    /// when `created_by_webhook_id` is present.
    pub created_by: String,
    /// The id of the webhook who created this list item, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_webhook_id: Option<String>,
}

impl Authored for ListItemPayload {
    fn created_by(&self) -> &str {
        &self.created_by
    }

    fn created_by_webhook_id(&self) -> Option<&str> {
        self.created_by_webhook_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::attribution::{Attribution, SYSTEM_OWNER_ID};

    #[test]
    fn test_payload_deserialization() {
        let json = r#"{
            "id": "li1",
            "channelId": "c1",
            "message": "buy milk",
            "note": "2%",
            "createdAt": "2023-01-01T00:00:00Z",
            "createdBy": "u1"
        }"#;

        let payload: ListItemPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.id, "li1");
        assert_eq!(payload.message, "buy milk");
        assert_eq!(payload.note, "2%");
        assert_eq!(payload.attribution(), Attribution::User("u1"));
    }

    #[test]
    fn test_payload_note_is_required() {
        // `note` is optional on create but required on the payload
        let json = r#"{
            "id": "li1",
            "channelId": "c1",
            "message": "buy milk",
            "createdAt": "2023-01-01T00:00:00Z",
            "createdBy": "u1"
        }"#;

        assert!(serde_json::from_str::<ListItemPayload>(json).is_err());
    }

    #[test]
    fn test_webhook_created_item() {
        let json = format!(
            r#"{{
                "id": "li2",
                "channelId": "c1",
                "message": "from integration",
                "note": "",
                "createdAt": "2023-01-01T00:00:00Z",
                "createdBy": "{SYSTEM_OWNER_ID}",
                "createdByWebhookId": "wh1"
            }}"#
        );

        let payload: ListItemPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(payload.attribution(), Attribution::Webhook("wh1"));
    }

    #[test]
    fn test_create_options_without_note() {
        let options = CreateListItemOptions::new("buy milk");
        let value = serde_json::to_value(&options).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["message"], "buy milk");
    }

    #[test]
    fn test_create_options_with_note() {
        let options = CreateListItemOptions::new("buy milk").with_note("2%");
        let value = serde_json::to_value(&options).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["note"], "2%");
    }
}
