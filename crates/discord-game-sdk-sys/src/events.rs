//! Event blocks. The caller owns and fills these; the SDK invokes the entries
//! with the `event_data` pointer given in [`DiscordCreateParams`].
//!
//! [`DiscordCreateParams`]: crate::DiscordCreateParams

use crate::*;
use std::ffi::{c_char, c_void};

// The header declares these four as `typedef void*`; they carry no entries.
pub type IDiscordCoreEvents = *mut c_void;
pub type IDiscordApplicationEvents = *mut c_void;
pub type IDiscordImageEvents = *mut c_void;
pub type IDiscordStorageEvents = *mut c_void;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordUserEvents {
    pub on_current_user_update: Option<unsafe extern "C" fn(event_data: *mut c_void)>,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordActivityEvents {
    pub on_activity_join:
        Option<unsafe extern "C" fn(event_data: *mut c_void, secret: *const c_char)>,
    pub on_activity_spectate:
        Option<unsafe extern "C" fn(event_data: *mut c_void, secret: *const c_char)>,
    pub on_activity_join_request:
        Option<unsafe extern "C" fn(event_data: *mut c_void, user: *mut DiscordUser)>,
    pub on_activity_invite: Option<
        unsafe extern "C" fn(
            event_data: *mut c_void,
            type_: EDiscordActivityActionType,
            user: *mut DiscordUser,
            activity: *mut DiscordActivity,
        ),
    >,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordRelationshipEvents {
    pub on_refresh: Option<unsafe extern "C" fn(event_data: *mut c_void)>,
    pub on_relationship_update: Option<
        unsafe extern "C" fn(event_data: *mut c_void, relationship: *mut DiscordRelationship),
    >,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordLobbyEvents {
    pub on_lobby_update: Option<unsafe extern "C" fn(event_data: *mut c_void, lobby_id: i64)>,
    pub on_lobby_delete:
        Option<unsafe extern "C" fn(event_data: *mut c_void, lobby_id: i64, reason: u32)>,
    pub on_member_connect:
        Option<unsafe extern "C" fn(event_data: *mut c_void, lobby_id: i64, user_id: i64)>,
    pub on_member_update:
        Option<unsafe extern "C" fn(event_data: *mut c_void, lobby_id: i64, user_id: i64)>,
    pub on_member_disconnect:
        Option<unsafe extern "C" fn(event_data: *mut c_void, lobby_id: i64, user_id: i64)>,
    pub on_lobby_message: Option<
        unsafe extern "C" fn(
            event_data: *mut c_void,
            lobby_id: i64,
            user_id: i64,
            data: *mut u8,
            data_length: u32,
        ),
    >,
    pub on_speaking: Option<
        unsafe extern "C" fn(event_data: *mut c_void, lobby_id: i64, user_id: i64, speaking: bool),
    >,
    pub on_network_message: Option<
        unsafe extern "C" fn(
            event_data: *mut c_void,
            lobby_id: i64,
            user_id: i64,
            channel_id: u8,
            data: *mut u8,
            data_length: u32,
        ),
    >,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordNetworkEvents {
    pub on_message: Option<
        unsafe extern "C" fn(
            event_data: *mut c_void,
            peer_id: DiscordNetworkPeerId,
            channel_id: DiscordNetworkChannelId,
            data: *mut u8,
            data_length: u32,
        ),
    >,
    pub on_route_update:
        Option<unsafe extern "C" fn(event_data: *mut c_void, route_data: *const c_char)>,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordOverlayEvents {
    pub on_toggle: Option<unsafe extern "C" fn(event_data: *mut c_void, locked: bool)>,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordStoreEvents {
    pub on_entitlement_create:
        Option<unsafe extern "C" fn(event_data: *mut c_void, entitlement: *mut DiscordEntitlement)>,
    pub on_entitlement_delete:
        Option<unsafe extern "C" fn(event_data: *mut c_void, entitlement: *mut DiscordEntitlement)>,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordVoiceEvents {
    pub on_settings_update: Option<unsafe extern "C" fn(event_data: *mut c_void)>,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordAchievementEvents {
    pub on_user_achievement_update: Option<
        unsafe extern "C" fn(
            event_data: *mut c_void,
            user_achievement: *mut DiscordUserAchievement,
        ),
    >,
}
