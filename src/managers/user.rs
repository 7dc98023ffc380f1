use std::ffi::c_void;
use std::rc::Rc;

use discord_game_sdk_sys as sys;

use crate::callback_manager::CallbackManager;
use crate::discord::ClientShared;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::managers::check_tables;
use crate::types::{PremiumType, User, UserFlags};

#[derive(Default)]
pub(crate) struct UserEvents {
    pub(crate) current_user_update: Event<dyn FnMut()>,
}

pub struct UserManager {
    methods: *mut sys::IDiscordUserManager,
    shared: Rc<ClientShared>,
}

impl UserManager {
    pub(crate) fn new(
        methods: *mut sys::IDiscordUserManager,
        events: *mut sys::IDiscordUserEvents,
        shared: Rc<ClientShared>,
    ) -> Result<Self> {
        check_tables("UserManager", methods, events)?;
        Ok(Self { methods, shared })
    }

    pub(crate) fn event_table() -> sys::IDiscordUserEvents {
        sys::IDiscordUserEvents {
            on_current_user_update: Some(on_current_user_update),
        }
    }

    fn methods(&self) -> Result<*mut sys::IDiscordUserManager> {
        self.shared.ensure_ready()?;
        Ok(self.methods)
    }

    /// Only available after the first `on_current_user_update` event.
    pub fn current_user(&self) -> Result<User> {
        let m = self.methods()?;
        let get_current_user = method!(m, get_current_user);
        let mut user = sys::DiscordUser::default();
        Error::from_code(unsafe { get_current_user(m, &mut user) })?;
        Ok(User::from(&user))
    }

    pub fn user(&self, user_id: i64, callback: impl FnOnce(Result<User>) + 'static) -> Result<()> {
        let m = self.methods()?;
        let get_user = method!(m, get_user);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe { get_user(m, user_id, data, Some(CallbackManager::cvoid_user_callback)) };
        Ok(())
    }

    pub fn current_user_premium_type(&self) -> Result<PremiumType> {
        let m = self.methods()?;
        let get_premium_type = method!(m, get_current_user_premium_type);
        let mut premium_type = 0;
        Error::from_code(unsafe { get_premium_type(m, &mut premium_type) })?;
        Ok(PremiumType::from(premium_type))
    }

    pub fn current_user_has_flag(&self, flag: UserFlags) -> Result<bool> {
        let m = self.methods()?;
        let has_flag = method!(m, current_user_has_flag);
        let mut result = false;
        Error::from_code(unsafe { has_flag(m, flag.bits(), &mut result) })?;
        Ok(result)
    }

    pub fn on_current_user_update(&self, handler: impl FnMut() + 'static) {
        self.shared.user.current_user_update.subscribe(Box::new(handler));
    }
}

unsafe extern "C" fn on_current_user_update(event_data: *mut c_void) {
    if let Some(shared) = CallbackManager::client(event_data) {
        shared.user.current_user_update.emit(|handler| handler());
    }
}
