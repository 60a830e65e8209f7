//! Doc shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for creating a doc
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocOptions {
    /// The title of the doc
    pub title: String,
    /// The content of the doc
    pub content: String,
}

impl CreateDocOptions {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        CreateDocOptions {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Request body for updating a doc
///
/// Updating takes exactly the same fields as creating, so this is the same
/// shape rather than a separate declaration.
pub type UpdateDocOptions = CreateDocOptions;

/// A doc as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocPayload {
    /// The id of the doc
    pub id: u32,
    /// The id of the channel
    pub channel_id: String,
    /// The title of the doc
    pub title: String,
    /// The content of the doc
    pub content: String,
    /// When the doc was created
    pub created_at: DateTime<Utc>,
    /// The id of the user who created this doc
    pub created_by: String,
    /// When the doc was last updated
    pub updated_at: DateTime<Utc>,
    /// The id of the user who updated this doc
    pub updated_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_deserialization() {
        let json = r#"{
            "id": 7,
            "channelId": "c1",
            "title": "Server rules",
            "content": "Be kind",
            "createdAt": "2023-01-01T00:00:00Z",
            "createdBy": "u1",
            "updatedAt": "2023-02-01T00:00:00Z",
            "updatedBy": "u2"
        }"#;

        let payload: DocPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.id, 7);
        assert_eq!(payload.title, "Server rules");
        assert_eq!(payload.content, "Be kind");
        assert_eq!(payload.created_by, "u1");
        assert_eq!(payload.updated_by, "u2");
    }

    #[test]
    fn test_payload_title_and_content_required() {
        // unlike forum threads, docs require both
        let json = r#"{
            "id": 7,
            "channelId": "c1",
            "createdAt": "2023-01-01T00:00:00Z",
            "createdBy": "u1",
            "updatedAt": "2023-02-01T00:00:00Z",
            "updatedBy": "u2"
        }"#;

        assert!(serde_json::from_str::<DocPayload>(json).is_err());
    }

    #[test]
    fn test_create_options_body() {
        let options = CreateDocOptions::new("Server rules", "Be kind");
        let value = serde_json::to_value(&options).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["title"], "Server rules");
        assert_eq!(object["content"], "Be kind");
    }

    #[test]
    fn test_update_options_is_create_shape() {
        let options: UpdateDocOptions = CreateDocOptions::new("Server rules", "Be kinder");
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
