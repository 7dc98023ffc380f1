//! Raw ABI mirrors of the Discord Game SDK C interface (`discord_game_sdk.h`,
//! SDK version 2).
//!
//! Everything in this crate is `#[repr(C)]` data or a function-pointer type.
//! Names follow the C header so that the header can be read side by side:
//! records are `Discord*`, method tables are `IDiscord*Manager`, event blocks
//! are `IDiscord*Events` and enumerations are integer aliases with one
//! constant per variant.
//!
//! The shared library itself is not linked; callers resolve `DiscordCreate`
//! at runtime and call it through [`DiscordCreateFn`].
#![allow(non_upper_case_globals, non_camel_case_types, non_snake_case)]

mod create;
mod enums;
mod events;
mod methods;
mod structs;

pub use create::*;
pub use enums::*;
pub use events::*;
pub use methods::*;
pub use structs::*;

use std::ffi::c_char;

/// Version passed as the first argument of `DiscordCreate`.
pub const DISCORD_VERSION: DiscordVersion = 2;
pub const DISCORD_APPLICATION_MANAGER_VERSION: DiscordVersion = 1;
pub const DISCORD_USER_MANAGER_VERSION: DiscordVersion = 1;
pub const DISCORD_IMAGE_MANAGER_VERSION: DiscordVersion = 1;
pub const DISCORD_ACTIVITY_MANAGER_VERSION: DiscordVersion = 1;
pub const DISCORD_RELATIONSHIP_MANAGER_VERSION: DiscordVersion = 1;
pub const DISCORD_LOBBY_MANAGER_VERSION: DiscordVersion = 1;
pub const DISCORD_NETWORK_MANAGER_VERSION: DiscordVersion = 1;
pub const DISCORD_OVERLAY_MANAGER_VERSION: DiscordVersion = 1;
pub const DISCORD_STORAGE_MANAGER_VERSION: DiscordVersion = 1;
pub const DISCORD_STORE_MANAGER_VERSION: DiscordVersion = 1;
pub const DISCORD_VOICE_MANAGER_VERSION: DiscordVersion = 1;
pub const DISCORD_ACHIEVEMENT_MANAGER_VERSION: DiscordVersion = 1;

pub type DiscordClientId = i64;
pub type DiscordVersion = i32;
pub type DiscordSnowflake = i64;
pub type DiscordTimestamp = i64;
pub type DiscordUserId = DiscordSnowflake;
pub type DiscordLobbyId = DiscordSnowflake;
pub type DiscordNetworkPeerId = u64;
pub type DiscordNetworkChannelId = u8;

pub type DiscordLocale = [c_char; 128];
pub type DiscordBranch = [c_char; 4096];
pub type DiscordLobbySecret = [c_char; 128];
pub type DiscordMetadataKey = [c_char; 256];
pub type DiscordMetadataValue = [c_char; 4096];
pub type DiscordPath = [c_char; 4096];
pub type DiscordDateTime = [c_char; 64];
