//! One manager per SDK domain. Each wraps a native method table and forwards
//! calls to it; persistent events are delivered through the client's handler
//! lists.

mod achievement;
mod activity;
mod application;
mod image;
mod lobby;
mod network;
mod overlay;
mod relationship;
mod storage;
mod store;
mod user;
mod voice;

pub use achievement::AchievementManager;
pub(crate) use achievement::AchievementEvents;
pub use activity::ActivityManager;
pub(crate) use activity::ActivityEvents;
pub use application::ApplicationManager;
pub use image::ImageManager;
pub use lobby::{LobbyManager, LobbyMemberTransaction, LobbySearchQuery, LobbyTransaction};
pub(crate) use lobby::LobbyEvents;
pub use network::NetworkManager;
pub(crate) use network::NetworkEvents;
pub use overlay::OverlayManager;
pub(crate) use overlay::OverlayEvents;
pub use relationship::RelationshipManager;
pub(crate) use relationship::RelationshipEvents;
pub use storage::StorageManager;
pub use store::StoreManager;
pub(crate) use store::StoreEvents;
pub use user::UserManager;
pub(crate) use user::UserEvents;
pub use voice::VoiceManager;
pub(crate) use voice::VoiceEvents;

use crate::error::{Error, Result};
use crate::types::ResultCode;

/// Both pointers come from the SDK or the client; either being null means the
/// manager cannot work.
pub(crate) fn check_tables<M, E>(name: &str, methods: *mut M, events: *mut E) -> Result<()> {
    if events.is_null() {
        tracing::error!("{name}: event block is null");
        return Err(Error::Discord(ResultCode::InternalError));
    }
    if methods.is_null() {
        tracing::error!("{name}: method table is null");
        return Err(Error::Discord(ResultCode::InternalError));
    }
    tracing::trace!("{name} ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discord::ClientShared;
    use discord_game_sdk_sys as sys;
    use std::ptr;
    use std::rc::Rc;

    fn shared() -> Rc<ClientShared> {
        Rc::new(ClientShared::new(u64::MAX))
    }

    fn assert_internal_error<T>(result: Result<T>) {
        match result {
            Err(err) => assert!(err.is_discord_error(ResultCode::InternalError)),
            Ok(_) => panic!("expected InternalError"),
        }
    }

    #[test]
    fn null_event_block_is_rejected() {
        let mut methods = sys::IDiscordActivityManager::default();
        assert_internal_error(ActivityManager::new(&mut methods, ptr::null_mut(), shared()));

        let mut methods = sys::IDiscordLobbyManager::default();
        assert_internal_error(LobbyManager::new(&mut methods, ptr::null_mut(), shared()));
    }

    #[test]
    fn null_method_table_is_rejected() {
        let mut events = ActivityManager::event_table();
        assert_internal_error(ActivityManager::new(ptr::null_mut(), &mut events, shared()));

        let mut events: sys::IDiscordStorageEvents = ptr::null_mut();
        assert_internal_error(StorageManager::new(ptr::null_mut(), &mut events, shared()));

        let mut events = UserManager::event_table();
        assert_internal_error(UserManager::new(ptr::null_mut(), &mut events, shared()));
    }

    #[test]
    fn calls_on_an_unready_client_never_reach_the_table() {
        // Every entry is null; reaching one would report MissingMethod instead.
        let mut methods = sys::IDiscordVoiceManager::default();
        let mut events = VoiceManager::event_table();
        let voice = VoiceManager::new(&mut methods, &mut events, shared()).unwrap();
        assert!(matches!(voice.is_self_mute(), Err(Error::NotInitialized)));
    }
}
