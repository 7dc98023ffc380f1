use std::ffi::{CString, c_void};
use std::rc::Rc;

use discord_game_sdk_sys as sys;

use crate::callback_manager::CallbackManager;
use crate::discord::ClientShared;
use crate::error::Result;
use crate::event::Event;
use crate::managers::check_tables;
use crate::types::ActivityActionType;

#[derive(Default)]
pub(crate) struct OverlayEvents {
    pub(crate) toggle: Event<dyn FnMut(bool)>,
}

pub struct OverlayManager {
    methods: *mut sys::IDiscordOverlayManager,
    shared: Rc<ClientShared>,
}

impl OverlayManager {
    pub(crate) fn new(
        methods: *mut sys::IDiscordOverlayManager,
        events: *mut sys::IDiscordOverlayEvents,
        shared: Rc<ClientShared>,
    ) -> Result<Self> {
        check_tables("OverlayManager", methods, events)?;
        Ok(Self { methods, shared })
    }

    pub(crate) fn event_table() -> sys::IDiscordOverlayEvents {
        sys::IDiscordOverlayEvents {
            on_toggle: Some(on_toggle),
        }
    }

    fn methods(&self) -> Result<*mut sys::IDiscordOverlayManager> {
        self.shared.ensure_ready()?;
        Ok(self.methods)
    }

    pub fn is_enabled(&self) -> Result<bool> {
        let m = self.methods()?;
        let is_enabled = method!(m, is_enabled);
        let mut enabled = false;
        unsafe { is_enabled(m, &mut enabled) };
        Ok(enabled)
    }

    /// A locked overlay is closed and does not take input.
    pub fn is_locked(&self) -> Result<bool> {
        let m = self.methods()?;
        let is_locked = method!(m, is_locked);
        let mut locked = false;
        unsafe { is_locked(m, &mut locked) };
        Ok(locked)
    }

    pub fn set_locked(
        &self,
        locked: bool,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let set_locked = method!(m, set_locked);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            set_locked(
                m,
                locked,
                data,
                Some(CallbackManager::cvoid_result_callback),
            )
        };
        Ok(())
    }

    pub fn open_activity_invite(
        &self,
        action: ActivityActionType,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let open_activity_invite = method!(m, open_activity_invite);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            open_activity_invite(
                m,
                action.into(),
                data,
                Some(CallbackManager::cvoid_result_callback),
            )
        };
        Ok(())
    }

    /// `code` is the invite code, not the full invite URL.
    pub fn open_guild_invite(
        &self,
        code: &str,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let open_guild_invite = method!(m, open_guild_invite);
        let code = CString::new(code)?;
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            open_guild_invite(
                m,
                code.as_ptr(),
                data,
                Some(CallbackManager::cvoid_result_callback),
            )
        };
        Ok(())
    }

    pub fn open_voice_settings(&self, callback: impl FnOnce(Result<()>) + 'static) -> Result<()> {
        let m = self.methods()?;
        let open_voice_settings = method!(m, open_voice_settings);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe { open_voice_settings(m, data, Some(CallbackManager::cvoid_result_callback)) };
        Ok(())
    }

    /// Handler receives the new locked state.
    pub fn on_toggle(&self, handler: impl FnMut(bool) + 'static) {
        self.shared.overlay.toggle.subscribe(Box::new(handler));
    }
}

unsafe extern "C" fn on_toggle(event_data: *mut c_void, locked: bool) {
    if let Some(shared) = CallbackManager::client(event_data) {
        shared.overlay.toggle.emit(|handler| handler(locked));
    }
}
