use std::ffi::c_void;
use std::rc::Rc;

use discord_game_sdk_sys as sys;

use crate::callback_manager::CallbackManager;
use crate::discord::ClientShared;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::managers::check_tables;
use crate::types::UserAchievement;

#[derive(Default)]
pub(crate) struct AchievementEvents {
    pub(crate) user_achievement_update: Event<dyn FnMut(&UserAchievement)>,
}

pub struct AchievementManager {
    methods: *mut sys::IDiscordAchievementManager,
    shared: Rc<ClientShared>,
}

impl AchievementManager {
    pub(crate) fn new(
        methods: *mut sys::IDiscordAchievementManager,
        events: *mut sys::IDiscordAchievementEvents,
        shared: Rc<ClientShared>,
    ) -> Result<Self> {
        check_tables("AchievementManager", methods, events)?;
        Ok(Self { methods, shared })
    }

    pub(crate) fn event_table() -> sys::IDiscordAchievementEvents {
        sys::IDiscordAchievementEvents {
            on_user_achievement_update: Some(on_user_achievement_update),
        }
    }

    fn methods(&self) -> Result<*mut sys::IDiscordAchievementManager> {
        self.shared.ensure_ready()?;
        Ok(self.methods)
    }

    /// The SDK rejects a `percent_complete` above 100 through the callback.
    pub fn set_user_achievement(
        &self,
        achievement_id: i64,
        percent_complete: u8,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let set_user_achievement = method!(m, set_user_achievement);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            set_user_achievement(
                m,
                achievement_id,
                percent_complete,
                data,
                Some(CallbackManager::cvoid_result_callback),
            )
        };
        Ok(())
    }

    /// Fills the cache read by [`count_user_achievements`] and friends.
    ///
    /// [`count_user_achievements`]: AchievementManager::count_user_achievements
    pub fn fetch_user_achievements(
        &self,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let fetch = method!(m, fetch_user_achievements);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe { fetch(m, data, Some(CallbackManager::cvoid_result_callback)) };
        Ok(())
    }

    pub fn count_user_achievements(&self) -> Result<i32> {
        let m = self.methods()?;
        let count = method!(m, count_user_achievements);
        let mut value = 0;
        unsafe { count(m, &mut value) };
        Ok(value)
    }

    pub fn user_achievement(&self, achievement_id: i64) -> Result<UserAchievement> {
        let m = self.methods()?;
        let get_user_achievement = method!(m, get_user_achievement);
        let mut raw = sys::DiscordUserAchievement::default();
        Error::from_code(unsafe { get_user_achievement(m, achievement_id, &mut raw) })?;
        Ok(UserAchievement::from(&raw))
    }

    pub fn user_achievement_at(&self, index: i32) -> Result<UserAchievement> {
        let m = self.methods()?;
        let get_user_achievement_at = method!(m, get_user_achievement_at);
        let mut raw = sys::DiscordUserAchievement::default();
        Error::from_code(unsafe { get_user_achievement_at(m, index, &mut raw) })?;
        Ok(UserAchievement::from(&raw))
    }

    pub fn user_achievements(&self) -> Result<Vec<UserAchievement>> {
        (0..self.count_user_achievements()?)
            .map(|index| self.user_achievement_at(index))
            .collect()
    }

    pub fn on_user_achievement_update(&self, handler: impl FnMut(&UserAchievement) + 'static) {
        self.shared
            .achievement
            .user_achievement_update
            .subscribe(Box::new(handler));
    }
}

unsafe extern "C" fn on_user_achievement_update(
    event_data: *mut c_void,
    user_achievement: *mut sys::DiscordUserAchievement,
) {
    let Some(shared) = CallbackManager::client(event_data) else {
        return;
    };
    if let Some(achievement) = unsafe { user_achievement.as_ref() }.map(UserAchievement::from) {
        shared
            .achievement
            .user_achievement_update
            .emit(|handler| handler(&achievement));
    }
}
