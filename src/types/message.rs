//! Chat message shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::attribution::Authored;

/// The kind of chat message
///
/// "system" messages are generated by Guilded, while "default" messages are
/// user or bot-generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Default,
    System,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Default => "default",
            MessageType::System => "system",
        }
    }

    /// Check if this message was generated by Guilded itself
    pub fn is_system(&self) -> bool {
        matches!(self, MessageType::System)
    }
}

/// Request body for creating a chat message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageContent {
    /// If set, this message will only be seen by those mentioned or replied to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    /// The ids of the messages that this will be replying to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_message_ids: Option<Vec<String>>,
    /// The message content to create
    pub content: String,
}

impl MessageContent {
    /// Create a plain message body
    pub fn new(content: impl Into<String>) -> Self {
        MessageContent {
            is_private: None,
            reply_message_ids: None,
            content: content.into(),
        }
    }

    /// Restrict visibility to mentioned and replied-to users
    pub fn private(mut self) -> Self {
        self.is_private = Some(true);
        self
    }

    /// Make this message a reply to other messages
    pub fn with_reply_to(mut self, message_ids: Vec<String>) -> Self {
        self.reply_message_ids = Some(message_ids);
        self
    }
}

/// A chat message as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePayload {
    /// The id of the message
    pub id: String,
    /// The type of chat message
    #[serde(rename = "type")]
    pub message_type: MessageType,
    /// The id of the channel
    pub channel_id: String,
    /// The content of the message
    pub content: String,
    /// The ids of the messages that this is replying to
    pub reply_message_ids: Vec<String>,
    /// If set, this message is only seen by those mentioned or replied to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    /// When the message was created
    pub created_at: DateTime<Utc>,
    /// The id of the user who created this message. Holds the sentinel id
    /// when `created_by_bot_id` or `created_by_webhook_id` is present.
    pub created_by: String,
    /// The id of the bot who created this message, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_bot_id: Option<String>,
    /// The id of the webhook who created this message, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_webhook_id: Option<String>,
    /// When the message was last updated
    pub updated_at: DateTime<Utc>,
}

impl Authored for MessagePayload {
    fn created_by(&self) -> &str {
        &self.created_by
    }

    fn created_by_bot_id(&self) -> Option<&str> {
        self.created_by_bot_id.as_deref()
    }

    fn created_by_webhook_id(&self) -> Option<&str> {
        self.created_by_webhook_id.as_deref()
    }
}

/// Query options for fetching a channel's messages
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetChannelMessagesOptions {
    /// Whether to include private messages between all users in the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_private: Option<bool>,
}

/// Request body for updating a chat message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChannelMessageOptions {
    /// The message content to update
    pub content: String,
}
