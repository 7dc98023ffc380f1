use crate::{
    DiscordDateTime, DiscordLobbyId, DiscordLobbySecret, DiscordSnowflake, DiscordTimestamp,
    DiscordUserId, EDiscordActivityType, EDiscordEntitlementType, EDiscordImageType,
    EDiscordInputModeType, EDiscordLobbyType, EDiscordRelationshipType, EDiscordSkuType,
    EDiscordStatus,
};
use std::ffi::c_char;

/// Zero-initialised value, the state every out-parameter starts from.
macro_rules! zeroed_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Default for $ty {
                fn default() -> Self {
                    // SAFETY: all fields are integers, bools or byte arrays, for which
                    // the all-zero bit pattern is valid.
                    unsafe { std::mem::zeroed() }
                }
            }
        )*
    };
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordUser {
    pub id: DiscordUserId,
    pub username: [c_char; 256],
    pub discriminator: [c_char; 8],
    pub avatar: [c_char; 128],
    pub bot: bool,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordOAuth2Token {
    pub access_token: [c_char; 128],
    pub scopes: [c_char; 1024],
    pub expires: DiscordTimestamp,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscordImageHandle {
    pub type_: EDiscordImageType,
    pub id: i64,
    pub size: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscordImageDimensions {
    pub width: u32,
    pub height: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordActivityTimestamps {
    pub start: DiscordTimestamp,
    pub end: DiscordTimestamp,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordActivityAssets {
    pub large_image: [c_char; 128],
    pub large_text: [c_char; 128],
    pub small_image: [c_char; 128],
    pub small_text: [c_char; 128],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordPartySize {
    pub current_size: i32,
    pub max_size: i32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordActivityParty {
    pub id: [c_char; 128],
    pub size: DiscordPartySize,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordActivitySecrets {
    pub match_: [c_char; 128],
    pub join: [c_char; 128],
    pub spectate: [c_char; 128],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordActivity {
    pub type_: EDiscordActivityType,
    pub application_id: i64,
    pub name: [c_char; 128],
    pub state: [c_char; 128],
    pub details: [c_char; 128],
    pub timestamps: DiscordActivityTimestamps,
    pub assets: DiscordActivityAssets,
    pub party: DiscordActivityParty,
    pub secrets: DiscordActivitySecrets,
    pub instance: bool,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordPresence {
    pub status: EDiscordStatus,
    pub activity: DiscordActivity,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordRelationship {
    pub type_: EDiscordRelationshipType,
    pub user: DiscordUser,
    pub presence: DiscordPresence,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordLobby {
    pub id: DiscordLobbyId,
    pub type_: EDiscordLobbyType,
    pub owner_id: DiscordUserId,
    pub secret: DiscordLobbySecret,
    pub capacity: u32,
    pub locked: bool,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordFileStat {
    pub filename: [c_char; 260],
    pub size: u64,
    pub last_modified: u64,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordEntitlement {
    pub id: DiscordSnowflake,
    pub type_: EDiscordEntitlementType,
    pub sku_id: DiscordSnowflake,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordSkuPrice {
    pub amount: u32,
    pub currency: [c_char; 16],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordSku {
    pub id: DiscordSnowflake,
    pub type_: EDiscordSkuType,
    pub name: [c_char; 256],
    pub price: DiscordSkuPrice,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordInputMode {
    pub type_: EDiscordInputModeType,
    pub shortcut: [c_char; 256],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordUserAchievement {
    pub user_id: DiscordSnowflake,
    pub achievement_id: DiscordSnowflake,
    pub percent_complete: u8,
    pub unlocked_at: DiscordDateTime,
}

zeroed_default!(
    DiscordUser,
    DiscordOAuth2Token,
    DiscordImageHandle,
    DiscordImageDimensions,
    DiscordActivityTimestamps,
    DiscordActivityAssets,
    DiscordPartySize,
    DiscordActivityParty,
    DiscordActivitySecrets,
    DiscordActivity,
    DiscordPresence,
    DiscordRelationship,
    DiscordLobby,
    DiscordFileStat,
    DiscordEntitlement,
    DiscordSkuPrice,
    DiscordSku,
    DiscordInputMode,
    DiscordUserAchievement,
);
