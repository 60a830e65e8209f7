//! Forum thread shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::attribution::Authored;

/// Request body for creating a forum thread
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateForumThreadOptions {
    /// The title of the forum thread
    pub title: String,
    /// The content of the forum thread
    pub content: String,
}

impl CreateForumThreadOptions {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        CreateForumThreadOptions {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A forum thread as returned by the API
///
/// Title and content are optional here even though they are required on
/// create. That mismatch is the upstream API's, preserved as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumThreadPayload {
    /// The id of the forum thread
    pub id: u32,
    /// The id of the channel
    pub channel_id: String,
    /// The title of the forum thread
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The content of the forum thread
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// When the forum thread was created
    pub created_at: DateTime<Utc>,
    /// The id of the user who created this forum thread. Holds the sentinel
    /// id when `created_by_webhook_id` is present.
    pub created_by: String,
    /// The id of the webhook who created this forum thread, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_webhook_id: Option<String>,
}

impl Authored for ForumThreadPayload {
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

    #[test]
    fn test_payload_without_title_and_content_is_valid() {
        let json = r#"{
            "id": 42,
            "channelId": "c1",
            "createdAt": "2023-01-01T00:00:00Z",
            "createdBy": "u1"
        }"#;

        let payload: ForumThreadPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.id, 42);
        assert_eq!(payload.channel_id, "c1");
        assert!(payload.title.is_none());
        assert!(payload.content.is_none());
        assert!(payload.created_by_webhook_id.is_none());
    }

    #[test]
    fn test_payload_missing_required_fields_rejected() {
        // no id
        let json = r#"{
            "channelId": "c1",
            "createdAt": "2023-01-01T00:00:00Z",
            "createdBy": "u1"
        }"#;
        assert!(serde_json::from_str::<ForumThreadPayload>(json).is_err());

        // no channelId
        let json = r#"{
            "id": 42,
            "createdAt": "2023-01-01T00:00:00Z",
            "createdBy": "u1"
        }"#;
        assert!(serde_json::from_str::<ForumThreadPayload>(json).is_err());

        // no createdAt
        let json = r#"{
            "id": 42,
            "channelId": "c1",
            "createdBy": "u1"
        }"#;
        assert!(serde_json::from_str::<ForumThreadPayload>(json).is_err());
    }

    #[test]
    fn test_full_payload() {
        let json = r#"{
            "id": 42,
            "channelId": "c1",
            "title": "Welcome",
            "content": "Say hello here",
            "createdAt": "2023-01-01T00:00:00Z",
            "createdBy": "u1",
            "createdByWebhookId": "wh1"
        }"#;

        let payload: ForumThreadPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.title.as_deref(), Some("Welcome"));
        assert_eq!(payload.content.as_deref(), Some("Say hello here"));
        assert_eq!(payload.created_by_webhook_id.as_deref(), Some("wh1"));
    }

    #[test]
    fn test_create_options_body() {
        let options = CreateForumThreadOptions::new("Welcome", "Say hello here");
        let value = serde_json::to_value(&options).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["title"], "Welcome");
        assert_eq!(object["content"], "Say hello here");
    }
}
