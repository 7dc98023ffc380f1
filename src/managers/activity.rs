use std::ffi::{CString, c_char, c_void};
use std::rc::Rc;

use discord_game_sdk_sys as sys;

use crate::callback_manager::CallbackManager;
use crate::discord::ClientShared;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::internal::utils::read_cstring;
use crate::managers::check_tables;
use crate::types::{Activity, ActivityActionType, ActivityJoinRequestReply, User};

#[derive(Default)]
pub(crate) struct ActivityEvents {
    pub(crate) join: Event<dyn FnMut(&str)>,
    pub(crate) spectate: Event<dyn FnMut(&str)>,
    pub(crate) join_request: Event<dyn FnMut(&User)>,
    pub(crate) invite: Event<dyn FnMut(ActivityActionType, &User, &Activity)>,
}

/// Rich presence, invites and join requests.
pub struct ActivityManager {
    methods: *mut sys::IDiscordActivityManager,
    shared: Rc<ClientShared>,
}

impl ActivityManager {
    pub(crate) fn new(
        methods: *mut sys::IDiscordActivityManager,
        events: *mut sys::IDiscordActivityEvents,
        shared: Rc<ClientShared>,
    ) -> Result<Self> {
        check_tables("ActivityManager", methods, events)?;
        Ok(Self { methods, shared })
    }

    pub(crate) fn event_table() -> sys::IDiscordActivityEvents {
        sys::IDiscordActivityEvents {
            on_activity_join: Some(on_activity_join),
            on_activity_spectate: Some(on_activity_spectate),
            on_activity_join_request: Some(on_activity_join_request),
            on_activity_invite: Some(on_activity_invite),
        }
    }

    fn methods(&self) -> Result<*mut sys::IDiscordActivityManager> {
        self.shared.ensure_ready()?;
        Ok(self.methods)
    }

    /// Registers a command line Discord uses to launch the game, such as
    /// `"my-game://run --full-screen"`.
    pub fn register_command(&self, command: &str) -> Result<()> {
        let m = self.methods()?;
        let register_command = method!(m, register_command);
        let command = CString::new(command)?;
        Error::from_code(unsafe { register_command(m, command.as_ptr()) })
    }

    pub fn register_steam(&self, steam_id: u32) -> Result<()> {
        let m = self.methods()?;
        let register_steam = method!(m, register_steam);
        Error::from_code(unsafe { register_steam(m, steam_id) })
    }

    /// Sets the user's rich presence.
    ///
    /// The SDK rate-limits this to five updates per twenty seconds; extra
    /// updates are queued by the SDK, not by this crate.
    pub fn update_activity(
        &self,
        activity: &Activity,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let update_activity = method!(m, update_activity);
        let mut raw = activity.to_raw()?;
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            update_activity(
                m,
                &mut raw,
                data,
                Some(CallbackManager::cvoid_result_callback),
            )
        };
        Ok(())
    }

    pub fn clear_activity(&self, callback: impl FnOnce(Result<()>) + 'static) -> Result<()> {
        let m = self.methods()?;
        let clear_activity = method!(m, clear_activity);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe { clear_activity(m, data, Some(CallbackManager::cvoid_result_callback)) };
        Ok(())
    }

    pub fn send_request_reply(
        &self,
        user_id: i64,
        reply: ActivityJoinRequestReply,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let send_request_reply = method!(m, send_request_reply);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            send_request_reply(
                m,
                user_id,
                reply.into(),
                data,
                Some(CallbackManager::cvoid_result_callback),
            )
        };
        Ok(())
    }

    pub fn send_invite(
        &self,
        user_id: i64,
        action: ActivityActionType,
        content: &str,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let send_invite = method!(m, send_invite);
        let content = CString::new(content)?;
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            send_invite(
                m,
                user_id,
                action.into(),
                content.as_ptr(),
                data,
                Some(CallbackManager::cvoid_result_callback),
            )
        };
        Ok(())
    }

    pub fn accept_invite(
        &self,
        user_id: i64,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let accept_invite = method!(m, accept_invite);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            accept_invite(
                m,
                user_id,
                data,
                Some(CallbackManager::cvoid_result_callback),
            )
        };
        Ok(())
    }

    /// Fires with the join secret when the user accepts an invite or a join
    /// request is approved.
    pub fn on_activity_join(&self, handler: impl FnMut(&str) + 'static) {
        self.shared.activity.join.subscribe(Box::new(handler));
    }

    pub fn on_activity_spectate(&self, handler: impl FnMut(&str) + 'static) {
        self.shared.activity.spectate.subscribe(Box::new(handler));
    }

    pub fn on_activity_join_request(&self, handler: impl FnMut(&User) + 'static) {
        self.shared.activity.join_request.subscribe(Box::new(handler));
    }

    pub fn on_activity_invite(
        &self,
        handler: impl FnMut(ActivityActionType, &User, &Activity) + 'static,
    ) {
        self.shared.activity.invite.subscribe(Box::new(handler));
    }
}

unsafe extern "C" fn on_activity_join(event_data: *mut c_void, secret: *const c_char) {
    if let Some(shared) = CallbackManager::client(event_data) {
        let secret = unsafe { read_cstring(secret) };
        shared.activity.join.emit(|handler| handler(&secret));
    }
}

unsafe extern "C" fn on_activity_spectate(event_data: *mut c_void, secret: *const c_char) {
    if let Some(shared) = CallbackManager::client(event_data) {
        let secret = unsafe { read_cstring(secret) };
        shared.activity.spectate.emit(|handler| handler(&secret));
    }
}

unsafe extern "C" fn on_activity_join_request(
    event_data: *mut c_void,
    user: *mut sys::DiscordUser,
) {
    let Some(user) = (unsafe { user.as_ref() }) else {
        return;
    };
    if let Some(shared) = CallbackManager::client(event_data) {
        let user = User::from(user);
        shared.activity.join_request.emit(|handler| handler(&user));
    }
}

unsafe extern "C" fn on_activity_invite(
    event_data: *mut c_void,
    action: sys::EDiscordActivityActionType,
    user: *mut sys::DiscordUser,
    activity: *mut sys::DiscordActivity,
) {
    let (Some(user), Some(activity)) = (unsafe { user.as_ref() }, unsafe { activity.as_ref() })
    else {
        return;
    };
    let Ok(action) = ActivityActionType::try_from(action) else {
        tracing::warn!(action, "activity invite with unknown action dropped");
        return;
    };
    if let Some(shared) = CallbackManager::client(event_data) {
        let user = User::from(user);
        let activity = Activity::from(activity);
        shared.activity.invite.emit(|handler| handler(action, &user, &activity));
    }
}
