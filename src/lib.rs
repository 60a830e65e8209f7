//! Compile-time contract layer for the Guilded REST API
//!
//! This crate declares the request/response shapes exchanged with Guilded's
//! REST API (chat messages, forum threads, list items, docs, reactions,
//! member XP, social links), the configuration record a REST client is built
//! from, and the table of status codes the API is known to respond with.
//!
//! It carries no networking behavior of its own: the transport layer that
//! sends requests is a separate concern and compiles against these shapes.
//! Response bodies are narrowed into payload types with [`convert::narrow`],
//! and options types serialize into request bodies via
//! [`convert::to_request_body`].

// Core modules
pub mod convert;
pub mod error;
pub mod rest;
pub mod status;
pub mod types;

// Re-exports for convenience
pub use convert::{narrow, narrow_str, to_request_body};
pub use error::{Error, ErrorCode, Result};
pub use rest::{ApiVersion, RequestMethod, RestOptions, GUILDED_API_URL};
pub use status::{GuildedStatusCode, GUILDED_STATUS_CODES};
pub use types::{
    Attribution, Authored, ContentReactionPayload, CreateDocOptions, CreateForumThreadOptions,
    CreateListItemOptions, DocPayload, ForumThreadPayload, GetChannelMessagesOptions,
    ListItemPayload, MemberXPPayload, MessageContent, MessagePayload, MessageType,
    SocialLinkType, UpdateChannelMessageOptions, UpdateDocOptions, SYSTEM_OWNER_ID,
};
