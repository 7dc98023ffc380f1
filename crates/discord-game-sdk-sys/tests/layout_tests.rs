//! Layout checks for the ABI mirrors.
//!
//! Sizes and offsets are those of the C header compiled for a 64-bit target.

#![cfg(target_pointer_width = "64")]

use discord_game_sdk_sys::*;
use std::mem::{align_of, offset_of, size_of};

// ============================================================================
// Text buffers
// ============================================================================

#[test]
fn text_buffer_lengths() {
    assert_eq!(size_of::<DiscordLocale>(), 128);
    assert_eq!(size_of::<DiscordBranch>(), 4096);
    assert_eq!(size_of::<DiscordLobbySecret>(), 128);
    assert_eq!(size_of::<DiscordMetadataKey>(), 256);
    assert_eq!(size_of::<DiscordMetadataValue>(), 4096);
    assert_eq!(size_of::<DiscordPath>(), 4096);
    assert_eq!(size_of::<DiscordDateTime>(), 64);
}

// ============================================================================
// Records
// ============================================================================

#[test]
fn user_layout() {
    assert_eq!(size_of::<DiscordUser>(), 408);
    assert_eq!(align_of::<DiscordUser>(), 8);
    assert_eq!(offset_of!(DiscordUser, username), 8);
    assert_eq!(offset_of!(DiscordUser, discriminator), 264);
    assert_eq!(offset_of!(DiscordUser, avatar), 272);
    assert_eq!(offset_of!(DiscordUser, bot), 400);
}

#[test]
fn activity_layout() {
    assert_eq!(size_of::<DiscordActivityTimestamps>(), 16);
    assert_eq!(size_of::<DiscordActivityAssets>(), 512);
    assert_eq!(size_of::<DiscordPartySize>(), 8);
    assert_eq!(size_of::<DiscordActivityParty>(), 136);
    assert_eq!(size_of::<DiscordActivitySecrets>(), 384);

    assert_eq!(offset_of!(DiscordActivity, application_id), 8);
    assert_eq!(offset_of!(DiscordActivity, name), 16);
    assert_eq!(offset_of!(DiscordActivity, state), 144);
    assert_eq!(offset_of!(DiscordActivity, details), 272);
    assert_eq!(offset_of!(DiscordActivity, timestamps), 400);
    assert_eq!(offset_of!(DiscordActivity, assets), 416);
    assert_eq!(offset_of!(DiscordActivity, party), 928);
    assert_eq!(offset_of!(DiscordActivity, secrets), 1064);
    assert_eq!(offset_of!(DiscordActivity, instance), 1448);
    assert_eq!(size_of::<DiscordActivity>(), 1456);
}

#[test]
fn relationship_layout() {
    assert_eq!(size_of::<DiscordPresence>(), 1464);
    assert_eq!(offset_of!(DiscordPresence, activity), 8);
    assert_eq!(offset_of!(DiscordRelationship, user), 8);
    assert_eq!(offset_of!(DiscordRelationship, presence), 416);
    assert_eq!(size_of::<DiscordRelationship>(), 1880);
}

#[test]
fn lobby_layout() {
    assert_eq!(offset_of!(DiscordLobby, type_), 8);
    assert_eq!(offset_of!(DiscordLobby, owner_id), 16);
    assert_eq!(offset_of!(DiscordLobby, secret), 24);
    assert_eq!(offset_of!(DiscordLobby, capacity), 152);
    assert_eq!(offset_of!(DiscordLobby, locked), 156);
    assert_eq!(size_of::<DiscordLobby>(), 160);
}

#[test]
fn image_layout() {
    assert_eq!(offset_of!(DiscordImageHandle, id), 8);
    assert_eq!(offset_of!(DiscordImageHandle, size), 16);
    assert_eq!(size_of::<DiscordImageHandle>(), 24);
    assert_eq!(size_of::<DiscordImageDimensions>(), 8);
}

#[test]
fn application_and_voice_layout() {
    assert_eq!(offset_of!(DiscordOAuth2Token, scopes), 128);
    assert_eq!(offset_of!(DiscordOAuth2Token, expires), 1152);
    assert_eq!(size_of::<DiscordOAuth2Token>(), 1160);

    assert_eq!(offset_of!(DiscordInputMode, shortcut), 4);
    assert_eq!(size_of::<DiscordInputMode>(), 260);
}

#[test]
fn storage_and_store_layout() {
    assert_eq!(offset_of!(DiscordFileStat, size), 264);
    assert_eq!(offset_of!(DiscordFileStat, last_modified), 272);
    assert_eq!(size_of::<DiscordFileStat>(), 280);

    assert_eq!(size_of::<DiscordEntitlement>(), 24);
    assert_eq!(offset_of!(DiscordEntitlement, sku_id), 16);

    assert_eq!(offset_of!(DiscordSkuPrice, currency), 4);
    assert_eq!(size_of::<DiscordSkuPrice>(), 20);
    assert_eq!(offset_of!(DiscordSku, name), 12);
    assert_eq!(offset_of!(DiscordSku, price), 268);
    assert_eq!(size_of::<DiscordSku>(), 288);
}

#[test]
fn achievement_layout() {
    assert_eq!(offset_of!(DiscordUserAchievement, percent_complete), 16);
    assert_eq!(offset_of!(DiscordUserAchievement, unlocked_at), 17);
    assert_eq!(size_of::<DiscordUserAchievement>(), 88);
}

// ============================================================================
// Tables and create params
// ============================================================================

#[test]
fn method_tables_are_pointer_arrays() {
    let ptr = size_of::<usize>();
    assert_eq!(size_of::<IDiscordCore>(), 15 * ptr);
    assert_eq!(size_of::<IDiscordApplicationManager>(), 5 * ptr);
    assert_eq!(size_of::<IDiscordUserManager>(), 4 * ptr);
    assert_eq!(size_of::<IDiscordImageManager>(), 3 * ptr);
    assert_eq!(size_of::<IDiscordActivityManager>(), 7 * ptr);
    assert_eq!(size_of::<IDiscordRelationshipManager>(), 4 * ptr);
    assert_eq!(size_of::<IDiscordLobbyManager>(), 33 * ptr);
    assert_eq!(size_of::<IDiscordLobbyTransaction>(), 6 * ptr);
    assert_eq!(size_of::<IDiscordLobbyMemberTransaction>(), 2 * ptr);
    assert_eq!(size_of::<IDiscordLobbySearchQuery>(), 4 * ptr);
    assert_eq!(size_of::<IDiscordNetworkManager>(), 8 * ptr);
    assert_eq!(size_of::<IDiscordOverlayManager>(), 6 * ptr);
    assert_eq!(size_of::<IDiscordStorageManager>(), 11 * ptr);
    assert_eq!(size_of::<IDiscordStoreManager>(), 10 * ptr);
    assert_eq!(size_of::<IDiscordVoiceManager>(), 10 * ptr);
    assert_eq!(size_of::<IDiscordAchievementManager>(), 5 * ptr);
}

#[test]
fn event_blocks_are_pointer_arrays() {
    let ptr = size_of::<usize>();
    assert_eq!(size_of::<IDiscordUserEvents>(), ptr);
    assert_eq!(size_of::<IDiscordActivityEvents>(), 4 * ptr);
    assert_eq!(size_of::<IDiscordRelationshipEvents>(), 2 * ptr);
    assert_eq!(size_of::<IDiscordLobbyEvents>(), 8 * ptr);
    assert_eq!(size_of::<IDiscordNetworkEvents>(), 2 * ptr);
    assert_eq!(size_of::<IDiscordOverlayEvents>(), ptr);
    assert_eq!(size_of::<IDiscordStoreEvents>(), 2 * ptr);
    assert_eq!(size_of::<IDiscordVoiceEvents>(), ptr);
    assert_eq!(size_of::<IDiscordAchievementEvents>(), ptr);
}

#[test]
fn create_params_layout() {
    assert_eq!(offset_of!(DiscordCreateParams, events), 16);
    assert_eq!(offset_of!(DiscordCreateParams, event_data), 24);
    assert_eq!(offset_of!(DiscordCreateParams, application_events), 32);
    assert_eq!(offset_of!(DiscordCreateParams, application_version), 40);
    assert_eq!(offset_of!(DiscordCreateParams, user_events), 48);
    assert_eq!(offset_of!(DiscordCreateParams, achievement_events), 208);
    assert_eq!(offset_of!(DiscordCreateParams, achievement_version), 216);
    assert_eq!(size_of::<DiscordCreateParams>(), 224);
}

#[test]
fn create_params_default_sets_versions() {
    let params = DiscordCreateParams::default();
    assert!(params.events.is_null());
    assert_eq!(params.lobby_version, DISCORD_LOBBY_MANAGER_VERSION);
    assert_eq!(params.achievement_version, 1);
    assert_eq!(DISCORD_VERSION, 2);
}
