use std::ffi::c_void;
use std::rc::Rc;

use discord_game_sdk_sys as sys;

use crate::callback_manager::CallbackManager;
use crate::discord::ClientShared;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::managers::check_tables;
use crate::types::InputMode;

#[derive(Default)]
pub(crate) struct VoiceEvents {
    pub(crate) settings_update: Event<dyn FnMut()>,
}

pub struct VoiceManager {
    methods: *mut sys::IDiscordVoiceManager,
    shared: Rc<ClientShared>,
}

impl VoiceManager {
    pub(crate) fn new(
        methods: *mut sys::IDiscordVoiceManager,
        events: *mut sys::IDiscordVoiceEvents,
        shared: Rc<ClientShared>,
    ) -> Result<Self> {
        check_tables("VoiceManager", methods, events)?;
        Ok(Self { methods, shared })
    }

    pub(crate) fn event_table() -> sys::IDiscordVoiceEvents {
        sys::IDiscordVoiceEvents {
            on_settings_update: Some(on_settings_update),
        }
    }

    fn methods(&self) -> Result<*mut sys::IDiscordVoiceManager> {
        self.shared.ensure_ready()?;
        Ok(self.methods)
    }

    pub fn input_mode(&self) -> Result<InputMode> {
        let m = self.methods()?;
        let get_input_mode = method!(m, get_input_mode);
        let mut raw = sys::DiscordInputMode::default();
        Error::from_code(unsafe { get_input_mode(m, &mut raw) })?;
        Ok(InputMode::from(&raw))
    }

    pub fn set_input_mode(
        &self,
        input_mode: &InputMode,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let set_input_mode = method!(m, set_input_mode);
        let raw = input_mode.to_raw()?;
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe { set_input_mode(m, raw, data, Some(CallbackManager::cvoid_result_callback)) };
        Ok(())
    }

    pub fn is_self_mute(&self) -> Result<bool> {
        let m = self.methods()?;
        let is_self_mute = method!(m, is_self_mute);
        let mut mute = false;
        Error::from_code(unsafe { is_self_mute(m, &mut mute) })?;
        Ok(mute)
    }

    pub fn set_self_mute(&self, mute: bool) -> Result<()> {
        let m = self.methods()?;
        let set_self_mute = method!(m, set_self_mute);
        Error::from_code(unsafe { set_self_mute(m, mute) })
    }

    pub fn is_self_deaf(&self) -> Result<bool> {
        let m = self.methods()?;
        let is_self_deaf = method!(m, is_self_deaf);
        let mut deaf = false;
        Error::from_code(unsafe { is_self_deaf(m, &mut deaf) })?;
        Ok(deaf)
    }

    pub fn set_self_deaf(&self, deaf: bool) -> Result<()> {
        let m = self.methods()?;
        let set_self_deaf = method!(m, set_self_deaf);
        Error::from_code(unsafe { set_self_deaf(m, deaf) })
    }

    pub fn is_local_mute(&self, user_id: i64) -> Result<bool> {
        let m = self.methods()?;
        let is_local_mute = method!(m, is_local_mute);
        let mut mute = false;
        Error::from_code(unsafe { is_local_mute(m, user_id, &mut mute) })?;
        Ok(mute)
    }

    pub fn set_local_mute(&self, user_id: i64, mute: bool) -> Result<()> {
        let m = self.methods()?;
        let set_local_mute = method!(m, set_local_mute);
        Error::from_code(unsafe { set_local_mute(m, user_id, mute) })
    }

    /// Volume for one user, from 0 to 200; 100 is unchanged.
    pub fn local_volume(&self, user_id: i64) -> Result<u8> {
        let m = self.methods()?;
        let get_local_volume = method!(m, get_local_volume);
        let mut volume = 0;
        Error::from_code(unsafe { get_local_volume(m, user_id, &mut volume) })?;
        Ok(volume)
    }

    pub fn set_local_volume(&self, user_id: i64, volume: u8) -> Result<()> {
        let m = self.methods()?;
        let set_local_volume = method!(m, set_local_volume);
        Error::from_code(unsafe { set_local_volume(m, user_id, volume) })
    }

    pub fn on_settings_update(&self, handler: impl FnMut() + 'static) {
        self.shared.voice.settings_update.subscribe(Box::new(handler));
    }
}

unsafe extern "C" fn on_settings_update(event_data: *mut c_void) {
    if let Some(shared) = CallbackManager::client(event_data) {
        shared.voice.settings_update.emit(|handler| handler());
    }
}
