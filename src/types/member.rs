//! Member XP and social link shapes

use serde::{Deserialize, Serialize};

/// XP totals returned after awarding or setting a member's XP
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MemberXPPayload {
    /// The total XP after this operation
    pub total: i64,
}

/// The third-party platforms a member profile can link to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialLinkType {
    Twitch,
    Bnet,
    Psn,
    Xbox,
    Steam,
    Origin,
    Youtube,
    Twitter,
    Facebook,
    Switch,
    Patreon,
    Roblox,
}

impl SocialLinkType {
    /// Every supported platform
    pub const ALL: &'static [SocialLinkType] = &[
        SocialLinkType::Twitch,
        SocialLinkType::Bnet,
        SocialLinkType::Psn,
        SocialLinkType::Xbox,
        SocialLinkType::Steam,
        SocialLinkType::Origin,
        SocialLinkType::Youtube,
        SocialLinkType::Twitter,
        SocialLinkType::Facebook,
        SocialLinkType::Switch,
        SocialLinkType::Patreon,
        SocialLinkType::Roblox,
    ];

    /// Get the identifier used in request paths
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialLinkType::Twitch => "twitch",
            SocialLinkType::Bnet => "bnet",
            SocialLinkType::Psn => "psn",
            SocialLinkType::Xbox => "xbox",
            SocialLinkType::Steam => "steam",
            SocialLinkType::Origin => "origin",
            SocialLinkType::Youtube => "youtube",
            SocialLinkType::Twitter => "twitter",
            SocialLinkType::Facebook => "facebook",
            SocialLinkType::Switch => "switch",
            SocialLinkType::Patreon => "patreon",
            SocialLinkType::Roblox => "roblox",
        }
    }
}
