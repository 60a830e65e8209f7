//! Request and response shapes for the Guilded REST API
//!
//! "Payload" types describe persisted resources as the service returns them;
//! "options" types carry only the fields a caller controls when creating or
//! mutating a resource.

pub mod attribution;
pub mod doc;
pub mod forum;
pub mod list_item;
pub mod member;
pub mod message;
pub mod reaction;

// Re-export for convenience
pub use attribution::{Attribution, Authored, SYSTEM_OWNER_ID};
pub use doc::{CreateDocOptions, DocPayload, UpdateDocOptions};
pub use forum::{CreateForumThreadOptions, ForumThreadPayload};
pub use list_item::{CreateListItemOptions, ListItemPayload};
pub use member::{MemberXPPayload, SocialLinkType};
pub use message::{
    GetChannelMessagesOptions, MessageContent, MessagePayload, MessageType,
    UpdateChannelMessageOptions,
};
pub use reaction::ContentReactionPayload;
