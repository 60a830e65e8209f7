//! Author attribution for server-delivered content
//!
//! When content is created by a bot or a webhook, Guilded still populates
//! `createdBy` with a fixed sentinel user id instead of the true actor.
//! Callers must check the bot/webhook fields before trusting `createdBy`.

/// The user id Guilded reports in `createdBy` when the actual creator is a
/// bot or webhook. Matched verbatim from the live API.
pub const SYSTEM_OWNER_ID: &str = "Ann6LewA";

/// The resolved creator of a piece of content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribution<'a> {
    /// Created directly by a user
    User(&'a str),
    /// Created by a bot
    Bot(&'a str),
    /// Created through a webhook integration
    Webhook(&'a str),
}

impl<'a> Attribution<'a> {
    /// The id of the actor, whichever kind it is
    pub fn id(&self) -> &'a str {
        match *self {
            Attribution::User(id) | Attribution::Bot(id) | Attribution::Webhook(id) => id,
        }
    }
}

/// Content shapes carrying Guilded's creator fields
pub trait Authored {
    /// The `createdBy` user id as reported by the API
    fn created_by(&self) -> &str;

    /// The bot id, if a bot created this content
    fn created_by_bot_id(&self) -> Option<&str> {
        None
    }

    /// The webhook id, if a webhook created this content
    fn created_by_webhook_id(&self) -> Option<&str> {
        None
    }

    /// Resolve the true creator, preferring webhook and bot attribution over
    /// the `createdBy` field
    fn attribution(&self) -> Attribution<'_> {
        if let Some(id) = self.created_by_webhook_id() {
            Attribution::Webhook(id)
        } else if let Some(id) = self.created_by_bot_id() {
            Attribution::Bot(id)
        } else {
            Attribution::User(self.created_by())
        }
    }

    /// Whether `createdBy` holds the sentinel id rather than a real user
    fn is_system_sentinel(&self) -> bool {
        self.created_by() == SYSTEM_OWNER_ID
    }
}
