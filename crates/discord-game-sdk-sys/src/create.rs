use crate::*;
use std::ffi::c_void;
use std::ptr;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DiscordCreateParams {
    pub client_id: DiscordClientId,
    pub flags: u64,
    pub events: *mut IDiscordCoreEvents,
    pub event_data: *mut c_void,
    pub application_events: *mut IDiscordApplicationEvents,
    pub application_version: DiscordVersion,
    pub user_events: *mut IDiscordUserEvents,
    pub user_version: DiscordVersion,
    pub image_events: *mut IDiscordImageEvents,
    pub image_version: DiscordVersion,
    pub activity_events: *mut IDiscordActivityEvents,
    pub activity_version: DiscordVersion,
    pub relationship_events: *mut IDiscordRelationshipEvents,
    pub relationship_version: DiscordVersion,
    pub lobby_events: *mut IDiscordLobbyEvents,
    pub lobby_version: DiscordVersion,
    pub network_events: *mut IDiscordNetworkEvents,
    pub network_version: DiscordVersion,
    pub overlay_events: *mut IDiscordOverlayEvents,
    pub overlay_version: DiscordVersion,
    pub storage_events: *mut IDiscordStorageEvents,
    pub storage_version: DiscordVersion,
    pub store_events: *mut IDiscordStoreEvents,
    pub store_version: DiscordVersion,
    pub voice_events: *mut IDiscordVoiceEvents,
    pub voice_version: DiscordVersion,
    pub achievement_events: *mut IDiscordAchievementEvents,
    pub achievement_version: DiscordVersion,
}

impl Default for DiscordCreateParams {
    /// Null event blocks with every manager version set, as `DiscordCreateParamsSetDefault`
    /// does in the C header.
    fn default() -> Self {
        Self {
            client_id: 0,
            flags: 0,
            events: ptr::null_mut(),
            event_data: ptr::null_mut(),
            application_events: ptr::null_mut(),
            application_version: DISCORD_APPLICATION_MANAGER_VERSION,
            user_events: ptr::null_mut(),
            user_version: DISCORD_USER_MANAGER_VERSION,
            image_events: ptr::null_mut(),
            image_version: DISCORD_IMAGE_MANAGER_VERSION,
            activity_events: ptr::null_mut(),
            activity_version: DISCORD_ACTIVITY_MANAGER_VERSION,
            relationship_events: ptr::null_mut(),
            relationship_version: DISCORD_RELATIONSHIP_MANAGER_VERSION,
            lobby_events: ptr::null_mut(),
            lobby_version: DISCORD_LOBBY_MANAGER_VERSION,
            network_events: ptr::null_mut(),
            network_version: DISCORD_NETWORK_MANAGER_VERSION,
            overlay_events: ptr::null_mut(),
            overlay_version: DISCORD_OVERLAY_MANAGER_VERSION,
            storage_events: ptr::null_mut(),
            storage_version: DISCORD_STORAGE_MANAGER_VERSION,
            store_events: ptr::null_mut(),
            store_version: DISCORD_STORE_MANAGER_VERSION,
            voice_events: ptr::null_mut(),
            voice_version: DISCORD_VOICE_MANAGER_VERSION,
            achievement_events: ptr::null_mut(),
            achievement_version: DISCORD_ACHIEVEMENT_MANAGER_VERSION,
        }
    }
}

/// Symbol name of the SDK entry point, NUL-terminated for symbol lookup.
pub const DISCORD_CREATE_SYMBOL: &[u8] = b"DiscordCreate\0";

/// Signature of `DiscordCreate`.
pub type DiscordCreateFn = unsafe extern "C" fn(
    version: DiscordVersion,
    params: *mut DiscordCreateParams,
    result: *mut *mut IDiscordCore,
) -> EDiscordResult;
