use std::rc::Rc;

use discord_game_sdk_sys as sys;

use crate::callback_manager::CallbackManager;
use crate::discord::ClientShared;
use crate::error::Result;
use crate::internal::utils::read_fixed;
use crate::managers::check_tables;
use crate::types::OAuth2Token;

pub struct ApplicationManager {
    methods: *mut sys::IDiscordApplicationManager,
    shared: Rc<ClientShared>,
}

impl ApplicationManager {
    pub(crate) fn new(
        methods: *mut sys::IDiscordApplicationManager,
        events: *mut sys::IDiscordApplicationEvents,
        shared: Rc<ClientShared>,
    ) -> Result<Self> {
        check_tables("ApplicationManager", methods, events)?;
        Ok(Self { methods, shared })
    }

    fn methods(&self) -> Result<*mut sys::IDiscordApplicationManager> {
        self.shared.ensure_ready()?;
        Ok(self.methods)
    }

    /// Checks that the current user owns the game. The Discord client closes
    /// the game when validation fails.
    pub fn validate_or_exit(&self, callback: impl FnOnce(Result<()>) + 'static) -> Result<()> {
        let m = self.methods()?;
        let validate_or_exit = method!(m, validate_or_exit);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe { validate_or_exit(m, data, Some(CallbackManager::cvoid_result_callback)) };
        Ok(())
    }

    pub fn current_locale(&self) -> Result<String> {
        let m = self.methods()?;
        let get_current_locale = method!(m, get_current_locale);
        let mut locale: sys::DiscordLocale = [0; 128];
        unsafe { get_current_locale(m, &mut locale) };
        Ok(read_fixed(&locale))
    }

    pub fn current_branch(&self) -> Result<String> {
        let m = self.methods()?;
        let get_current_branch = method!(m, get_current_branch);
        let mut branch: sys::DiscordBranch = [0; 4096];
        unsafe { get_current_branch(m, &mut branch) };
        Ok(read_fixed(&branch))
    }

    pub fn oauth2_token(
        &self,
        callback: impl FnOnce(Result<OAuth2Token>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let get_oauth2_token = method!(m, get_oauth2_token);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe { get_oauth2_token(m, data, Some(CallbackManager::cvoid_oauth2_token_callback)) };
        Ok(())
    }

    /// Requests a signed application ticket for the current user.
    pub fn ticket(&self, callback: impl FnOnce(Result<String>) + 'static) -> Result<()> {
        let m = self.methods()?;
        let get_ticket = method!(m, get_ticket);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe { get_ticket(m, data, Some(CallbackManager::cvoid_ticket_callback)) };
        Ok(())
    }
}
