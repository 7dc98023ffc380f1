//! Method tables. Every native manager pointer points at one of these tables,
//! and every entry takes that same pointer as its first argument.

use crate::*;
use std::ffi::{c_char, c_void};

/// Completion callback carrying only a status.
pub type DiscordResultCallback =
    Option<unsafe extern "C" fn(callback_data: *mut c_void, result: EDiscordResult)>;

pub type DiscordLogHook = Option<
    unsafe extern "C" fn(hook_data: *mut c_void, level: EDiscordLogLevel, message: *const c_char),
>;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordCore {
    pub destroy: Option<unsafe extern "C" fn(core: *mut IDiscordCore)>,
    pub run_callbacks: Option<unsafe extern "C" fn(core: *mut IDiscordCore) -> EDiscordResult>,
    pub set_log_hook: Option<
        unsafe extern "C" fn(
            core: *mut IDiscordCore,
            min_level: EDiscordLogLevel,
            hook_data: *mut c_void,
            hook: DiscordLogHook,
        ),
    >,
    pub get_application_manager:
        Option<unsafe extern "C" fn(core: *mut IDiscordCore) -> *mut IDiscordApplicationManager>,
    pub get_user_manager:
        Option<unsafe extern "C" fn(core: *mut IDiscordCore) -> *mut IDiscordUserManager>,
    pub get_image_manager:
        Option<unsafe extern "C" fn(core: *mut IDiscordCore) -> *mut IDiscordImageManager>,
    pub get_activity_manager:
        Option<unsafe extern "C" fn(core: *mut IDiscordCore) -> *mut IDiscordActivityManager>,
    pub get_relationship_manager:
        Option<unsafe extern "C" fn(core: *mut IDiscordCore) -> *mut IDiscordRelationshipManager>,
    pub get_lobby_manager:
        Option<unsafe extern "C" fn(core: *mut IDiscordCore) -> *mut IDiscordLobbyManager>,
    pub get_network_manager:
        Option<unsafe extern "C" fn(core: *mut IDiscordCore) -> *mut IDiscordNetworkManager>,
    pub get_overlay_manager:
        Option<unsafe extern "C" fn(core: *mut IDiscordCore) -> *mut IDiscordOverlayManager>,
    pub get_storage_manager:
        Option<unsafe extern "C" fn(core: *mut IDiscordCore) -> *mut IDiscordStorageManager>,
    pub get_store_manager:
        Option<unsafe extern "C" fn(core: *mut IDiscordCore) -> *mut IDiscordStoreManager>,
    pub get_voice_manager:
        Option<unsafe extern "C" fn(core: *mut IDiscordCore) -> *mut IDiscordVoiceManager>,
    pub get_achievement_manager:
        Option<unsafe extern "C" fn(core: *mut IDiscordCore) -> *mut IDiscordAchievementManager>,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordApplicationManager {
    pub validate_or_exit: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordApplicationManager,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub get_current_locale: Option<
        unsafe extern "C" fn(manager: *mut IDiscordApplicationManager, locale: *mut DiscordLocale),
    >,
    pub get_current_branch: Option<
        unsafe extern "C" fn(manager: *mut IDiscordApplicationManager, branch: *mut DiscordBranch),
    >,
    pub get_oauth2_token: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordApplicationManager,
            callback_data: *mut c_void,
            callback: Option<
                unsafe extern "C" fn(
                    callback_data: *mut c_void,
                    result: EDiscordResult,
                    oauth2_token: *mut DiscordOAuth2Token,
                ),
            >,
        ),
    >,
    pub get_ticket: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordApplicationManager,
            callback_data: *mut c_void,
            callback: Option<
                unsafe extern "C" fn(
                    callback_data: *mut c_void,
                    result: EDiscordResult,
                    data: *const c_char,
                ),
            >,
        ),
    >,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordUserManager {
    pub get_current_user: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordUserManager,
            current_user: *mut DiscordUser,
        ) -> EDiscordResult,
    >,
    pub get_user: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordUserManager,
            user_id: DiscordUserId,
            callback_data: *mut c_void,
            callback: Option<
                unsafe extern "C" fn(
                    callback_data: *mut c_void,
                    result: EDiscordResult,
                    user: *mut DiscordUser,
                ),
            >,
        ),
    >,
    pub get_current_user_premium_type: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordUserManager,
            premium_type: *mut EDiscordPremiumType,
        ) -> EDiscordResult,
    >,
    pub current_user_has_flag: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordUserManager,
            flag: EDiscordUserFlag,
            has_flag: *mut bool,
        ) -> EDiscordResult,
    >,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordImageManager {
    pub fetch: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordImageManager,
            handle: DiscordImageHandle,
            refresh: bool,
            callback_data: *mut c_void,
            callback: Option<
                unsafe extern "C" fn(
                    callback_data: *mut c_void,
                    result: EDiscordResult,
                    handle_result: DiscordImageHandle,
                ),
            >,
        ),
    >,
    pub get_dimensions: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordImageManager,
            handle: DiscordImageHandle,
            dimensions: *mut DiscordImageDimensions,
        ) -> EDiscordResult,
    >,
    pub get_data: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordImageManager,
            handle: DiscordImageHandle,
            data: *mut u8,
            data_length: u32,
        ) -> EDiscordResult,
    >,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordActivityManager {
    pub register_command: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordActivityManager,
            command: *const c_char,
        ) -> EDiscordResult,
    >,
    pub register_steam: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordActivityManager,
            steam_id: u32,
        ) -> EDiscordResult,
    >,
    pub update_activity: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordActivityManager,
            activity: *mut DiscordActivity,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub clear_activity: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordActivityManager,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub send_request_reply: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordActivityManager,
            user_id: DiscordUserId,
            reply: EDiscordActivityJoinRequestReply,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub send_invite: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordActivityManager,
            user_id: DiscordUserId,
            type_: EDiscordActivityActionType,
            content: *const c_char,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub accept_invite: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordActivityManager,
            user_id: DiscordUserId,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordRelationshipManager {
    pub filter: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordRelationshipManager,
            filter_data: *mut c_void,
            filter: Option<
                unsafe extern "C" fn(
                    filter_data: *mut c_void,
                    relationship: *mut DiscordRelationship,
                ) -> bool,
            >,
        ),
    >,
    pub count: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordRelationshipManager,
            count: *mut i32,
        ) -> EDiscordResult,
    >,
    pub get: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordRelationshipManager,
            user_id: DiscordUserId,
            relationship: *mut DiscordRelationship,
        ) -> EDiscordResult,
    >,
    pub get_at: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordRelationshipManager,
            index: u32,
            relationship: *mut DiscordRelationship,
        ) -> EDiscordResult,
    >,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordLobbyTransaction {
    pub set_type: Option<
        unsafe extern "C" fn(
            lobby_transaction: *mut IDiscordLobbyTransaction,
            type_: EDiscordLobbyType,
        ) -> EDiscordResult,
    >,
    pub set_owner: Option<
        unsafe extern "C" fn(
            lobby_transaction: *mut IDiscordLobbyTransaction,
            owner_id: DiscordUserId,
        ) -> EDiscordResult,
    >,
    pub set_capacity: Option<
        unsafe extern "C" fn(
            lobby_transaction: *mut IDiscordLobbyTransaction,
            capacity: u32,
        ) -> EDiscordResult,
    >,
    pub set_metadata: Option<
        unsafe extern "C" fn(
            lobby_transaction: *mut IDiscordLobbyTransaction,
            key: *const c_char,
            value: *const c_char,
        ) -> EDiscordResult,
    >,
    pub delete_metadata: Option<
        unsafe extern "C" fn(
            lobby_transaction: *mut IDiscordLobbyTransaction,
            key: *const c_char,
        ) -> EDiscordResult,
    >,
    pub set_locked: Option<
        unsafe extern "C" fn(
            lobby_transaction: *mut IDiscordLobbyTransaction,
            locked: bool,
        ) -> EDiscordResult,
    >,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordLobbyMemberTransaction {
    pub set_metadata: Option<
        unsafe extern "C" fn(
            lobby_member_transaction: *mut IDiscordLobbyMemberTransaction,
            key: *const c_char,
            value: *const c_char,
        ) -> EDiscordResult,
    >,
    pub delete_metadata: Option<
        unsafe extern "C" fn(
            lobby_member_transaction: *mut IDiscordLobbyMemberTransaction,
            key: *const c_char,
        ) -> EDiscordResult,
    >,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordLobbySearchQuery {
    pub filter: Option<
        unsafe extern "C" fn(
            lobby_search_query: *mut IDiscordLobbySearchQuery,
            key: *const c_char,
            comparison: EDiscordLobbySearchComparison,
            cast: EDiscordLobbySearchCast,
            value: *const c_char,
        ) -> EDiscordResult,
    >,
    pub sort: Option<
        unsafe extern "C" fn(
            lobby_search_query: *mut IDiscordLobbySearchQuery,
            key: *const c_char,
            cast: EDiscordLobbySearchCast,
            value: *const c_char,
        ) -> EDiscordResult,
    >,
    pub limit: Option<
        unsafe extern "C" fn(
            lobby_search_query: *mut IDiscordLobbySearchQuery,
            limit: u32,
        ) -> EDiscordResult,
    >,
    pub distance: Option<
        unsafe extern "C" fn(
            lobby_search_query: *mut IDiscordLobbySearchQuery,
            distance: EDiscordLobbySearchDistance,
        ) -> EDiscordResult,
    >,
}

pub type DiscordLobbyCallback = Option<
    unsafe extern "C" fn(
        callback_data: *mut c_void,
        result: EDiscordResult,
        lobby: *mut DiscordLobby,
    ),
>;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordLobbyManager {
    pub get_lobby_create_transaction: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            transaction: *mut *mut IDiscordLobbyTransaction,
        ) -> EDiscordResult,
    >,
    pub get_lobby_update_transaction: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            transaction: *mut *mut IDiscordLobbyTransaction,
        ) -> EDiscordResult,
    >,
    pub get_member_update_transaction: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            user_id: DiscordUserId,
            transaction: *mut *mut IDiscordLobbyMemberTransaction,
        ) -> EDiscordResult,
    >,
    pub create_lobby: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            transaction: *mut IDiscordLobbyTransaction,
            callback_data: *mut c_void,
            callback: DiscordLobbyCallback,
        ),
    >,
    pub update_lobby: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            transaction: *mut IDiscordLobbyTransaction,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub delete_lobby: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub connect_lobby: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            secret: *const c_char,
            callback_data: *mut c_void,
            callback: DiscordLobbyCallback,
        ),
    >,
    pub connect_lobby_with_activity_secret: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            activity_secret: *const c_char,
            callback_data: *mut c_void,
            callback: DiscordLobbyCallback,
        ),
    >,
    pub disconnect_lobby: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub get_lobby: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            lobby: *mut DiscordLobby,
        ) -> EDiscordResult,
    >,
    pub get_lobby_activity_secret: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            secret: *mut DiscordLobbySecret,
        ) -> EDiscordResult,
    >,
    pub get_lobby_metadata_value: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            key: *const c_char,
            value: *mut DiscordMetadataValue,
        ) -> EDiscordResult,
    >,
    pub get_lobby_metadata_key: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            index: i32,
            key: *mut DiscordMetadataKey,
        ) -> EDiscordResult,
    >,
    pub lobby_metadata_count: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            count: *mut i32,
        ) -> EDiscordResult,
    >,
    pub member_count: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            count: *mut i32,
        ) -> EDiscordResult,
    >,
    pub get_member_user_id: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            index: i32,
            user_id: *mut DiscordUserId,
        ) -> EDiscordResult,
    >,
    pub get_member_user: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            user_id: DiscordUserId,
            user: *mut DiscordUser,
        ) -> EDiscordResult,
    >,
    pub get_member_metadata_value: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            user_id: DiscordUserId,
            key: *const c_char,
            value: *mut DiscordMetadataValue,
        ) -> EDiscordResult,
    >,
    pub get_member_metadata_key: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            user_id: DiscordUserId,
            index: i32,
            key: *mut DiscordMetadataKey,
        ) -> EDiscordResult,
    >,
    pub member_metadata_count: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            user_id: DiscordUserId,
            count: *mut i32,
        ) -> EDiscordResult,
    >,
    pub update_member: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            user_id: DiscordUserId,
            transaction: *mut IDiscordLobbyMemberTransaction,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub send_lobby_message: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            data: *mut u8,
            data_length: u32,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub get_search_query: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            query: *mut *mut IDiscordLobbySearchQuery,
        ) -> EDiscordResult,
    >,
    pub search: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            query: *mut IDiscordLobbySearchQuery,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub lobby_count: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            count: *mut i32,
        ),
    >,
    pub get_lobby_id: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            index: i32,
            lobby_id: *mut DiscordLobbyId,
        ) -> EDiscordResult,
    >,
    pub connect_voice: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub disconnect_voice: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub connect_network: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
        ) -> EDiscordResult,
    >,
    pub disconnect_network: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
        ) -> EDiscordResult,
    >,
    pub flush_network:
        Option<unsafe extern "C" fn(manager: *mut IDiscordLobbyManager) -> EDiscordResult>,
    pub open_network_channel: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            channel_id: u8,
            reliable: bool,
        ) -> EDiscordResult,
    >,
    pub send_network_message: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordLobbyManager,
            lobby_id: DiscordLobbyId,
            user_id: DiscordUserId,
            channel_id: u8,
            data: *mut u8,
            data_length: u32,
        ) -> EDiscordResult,
    >,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordNetworkManager {
    pub get_peer_id: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordNetworkManager,
            peer_id: *mut DiscordNetworkPeerId,
        ),
    >,
    pub flush: Option<unsafe extern "C" fn(manager: *mut IDiscordNetworkManager) -> EDiscordResult>,
    pub open_peer: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordNetworkManager,
            peer_id: DiscordNetworkPeerId,
            route_data: *const c_char,
        ) -> EDiscordResult,
    >,
    pub update_peer: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordNetworkManager,
            peer_id: DiscordNetworkPeerId,
            route_data: *const c_char,
        ) -> EDiscordResult,
    >,
    pub close_peer: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordNetworkManager,
            peer_id: DiscordNetworkPeerId,
        ) -> EDiscordResult,
    >,
    pub open_channel: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordNetworkManager,
            peer_id: DiscordNetworkPeerId,
            channel_id: DiscordNetworkChannelId,
            reliable: bool,
        ) -> EDiscordResult,
    >,
    pub close_channel: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordNetworkManager,
            peer_id: DiscordNetworkPeerId,
            channel_id: DiscordNetworkChannelId,
        ) -> EDiscordResult,
    >,
    pub send_message: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordNetworkManager,
            peer_id: DiscordNetworkPeerId,
            channel_id: DiscordNetworkChannelId,
            data: *mut u8,
            data_length: u32,
        ) -> EDiscordResult,
    >,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordOverlayManager {
    pub is_enabled:
        Option<unsafe extern "C" fn(manager: *mut IDiscordOverlayManager, enabled: *mut bool)>,
    pub is_locked:
        Option<unsafe extern "C" fn(manager: *mut IDiscordOverlayManager, locked: *mut bool)>,
    pub set_locked: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordOverlayManager,
            locked: bool,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub open_activity_invite: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordOverlayManager,
            type_: EDiscordActivityActionType,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub open_guild_invite: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordOverlayManager,
            code: *const c_char,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub open_voice_settings: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordOverlayManager,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
}

pub type DiscordDataCallback = Option<
    unsafe extern "C" fn(
        callback_data: *mut c_void,
        result: EDiscordResult,
        data: *mut u8,
        data_length: u32,
    ),
>;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordStorageManager {
    pub read: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStorageManager,
            name: *const c_char,
            data: *mut u8,
            data_length: u32,
            read: *mut u32,
        ) -> EDiscordResult,
    >,
    pub read_async: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStorageManager,
            name: *const c_char,
            callback_data: *mut c_void,
            callback: DiscordDataCallback,
        ),
    >,
    pub read_async_partial: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStorageManager,
            name: *const c_char,
            offset: u64,
            length: u64,
            callback_data: *mut c_void,
            callback: DiscordDataCallback,
        ),
    >,
    pub write: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStorageManager,
            name: *const c_char,
            data: *mut u8,
            data_length: u32,
        ) -> EDiscordResult,
    >,
    pub write_async: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStorageManager,
            name: *const c_char,
            data: *mut u8,
            data_length: u32,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub delete_: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStorageManager,
            name: *const c_char,
        ) -> EDiscordResult,
    >,
    pub exists: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStorageManager,
            name: *const c_char,
            exists: *mut bool,
        ) -> EDiscordResult,
    >,
    pub count: Option<unsafe extern "C" fn(manager: *mut IDiscordStorageManager, count: *mut i32)>,
    pub stat: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStorageManager,
            name: *const c_char,
            stat: *mut DiscordFileStat,
        ) -> EDiscordResult,
    >,
    pub stat_at: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStorageManager,
            index: i32,
            stat: *mut DiscordFileStat,
        ) -> EDiscordResult,
    >,
    pub get_path: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStorageManager,
            path: *mut DiscordPath,
        ) -> EDiscordResult,
    >,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordStoreManager {
    pub fetch_skus: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStoreManager,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub count_skus: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStoreManager,
            count: *mut i32,
        ),
    >,
    pub get_sku: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStoreManager,
            sku_id: DiscordSnowflake,
            sku: *mut DiscordSku,
        ) -> EDiscordResult,
    >,
    pub get_sku_at: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStoreManager,
            index: i32,
            sku: *mut DiscordSku,
        ) -> EDiscordResult,
    >,
    pub fetch_entitlements: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStoreManager,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub count_entitlements:
        Option<unsafe extern "C" fn(manager: *mut IDiscordStoreManager, count: *mut i32)>,
    pub get_entitlement: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStoreManager,
            entitlement_id: DiscordSnowflake,
            entitlement: *mut DiscordEntitlement,
        ) -> EDiscordResult,
    >,
    pub get_entitlement_at: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStoreManager,
            index: i32,
            entitlement: *mut DiscordEntitlement,
        ) -> EDiscordResult,
    >,
    pub has_sku_entitlement: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStoreManager,
            sku_id: DiscordSnowflake,
            has_entitlement: *mut bool,
        ) -> EDiscordResult,
    >,
    pub start_purchase: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordStoreManager,
            sku_id: DiscordSnowflake,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordVoiceManager {
    pub get_input_mode: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordVoiceManager,
            input_mode: *mut DiscordInputMode,
        ) -> EDiscordResult,
    >,
    pub set_input_mode: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordVoiceManager,
            input_mode: DiscordInputMode,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub is_self_mute: Option<
        unsafe extern "C" fn(manager: *mut IDiscordVoiceManager, mute: *mut bool) -> EDiscordResult,
    >,
    pub set_self_mute: Option<
        unsafe extern "C" fn(manager: *mut IDiscordVoiceManager, mute: bool) -> EDiscordResult,
    >,
    pub is_self_deaf: Option<
        unsafe extern "C" fn(manager: *mut IDiscordVoiceManager, deaf: *mut bool) -> EDiscordResult,
    >,
    pub set_self_deaf: Option<
        unsafe extern "C" fn(manager: *mut IDiscordVoiceManager, deaf: bool) -> EDiscordResult,
    >,
    pub is_local_mute: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordVoiceManager,
            user_id: DiscordSnowflake,
            mute: *mut bool,
        ) -> EDiscordResult,
    >,
    pub set_local_mute: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordVoiceManager,
            user_id: DiscordSnowflake,
            mute: bool,
        ) -> EDiscordResult,
    >,
    pub get_local_volume: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordVoiceManager,
            user_id: DiscordSnowflake,
            volume: *mut u8,
        ) -> EDiscordResult,
    >,
    pub set_local_volume: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordVoiceManager,
            user_id: DiscordSnowflake,
            volume: u8,
        ) -> EDiscordResult,
    >,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IDiscordAchievementManager {
    pub set_user_achievement: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordAchievementManager,
            achievement_id: DiscordSnowflake,
            percent_complete: u8,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub fetch_user_achievements: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordAchievementManager,
            callback_data: *mut c_void,
            callback: DiscordResultCallback,
        ),
    >,
    pub count_user_achievements:
        Option<unsafe extern "C" fn(manager: *mut IDiscordAchievementManager, count: *mut i32)>,
    pub get_user_achievement: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordAchievementManager,
            user_achievement_id: DiscordSnowflake,
            user_achievement: *mut DiscordUserAchievement,
        ) -> EDiscordResult,
    >,
    pub get_user_achievement_at: Option<
        unsafe extern "C" fn(
            manager: *mut IDiscordAchievementManager,
            index: i32,
            user_achievement: *mut DiscordUserAchievement,
        ) -> EDiscordResult,
    >,
}
