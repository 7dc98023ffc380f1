use std::ffi::{CString, c_void};
use std::ptr;
use std::rc::Rc;

use discord_game_sdk_sys as sys;

use crate::callback_manager::CallbackManager;
use crate::discord::ClientShared;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::internal::utils::{buffer_len, read_bytes, read_fixed};
use crate::managers::check_tables;
use crate::types::{
    Lobby, LobbySearchCast, LobbySearchComparison, LobbySearchDistance, LobbyType, ResultCode,
    User,
};

#[derive(Default)]
pub(crate) struct LobbyEvents {
    pub(crate) update: Event<dyn FnMut(i64)>,
    pub(crate) delete: Event<dyn FnMut(i64, u32)>,
    pub(crate) member_connect: Event<dyn FnMut(i64, i64)>,
    pub(crate) member_update: Event<dyn FnMut(i64, i64)>,
    pub(crate) member_disconnect: Event<dyn FnMut(i64, i64)>,
    pub(crate) message: Event<dyn FnMut(i64, i64, &[u8])>,
    pub(crate) speaking: Event<dyn FnMut(i64, i64, bool)>,
    pub(crate) network_message: Event<dyn FnMut(i64, i64, u8, &[u8])>,
}

/// Lobby lifetime, membership, metadata, search, voice and networking.
pub struct LobbyManager {
    methods: *mut sys::IDiscordLobbyManager,
    shared: Rc<ClientShared>,
}

impl LobbyManager {
    pub(crate) fn new(
        methods: *mut sys::IDiscordLobbyManager,
        events: *mut sys::IDiscordLobbyEvents,
        shared: Rc<ClientShared>,
    ) -> Result<Self> {
        check_tables("LobbyManager", methods, events)?;
        Ok(Self { methods, shared })
    }

    pub(crate) fn event_table() -> sys::IDiscordLobbyEvents {
        sys::IDiscordLobbyEvents {
            on_lobby_update: Some(on_lobby_update),
            on_lobby_delete: Some(on_lobby_delete),
            on_member_connect: Some(on_member_connect),
            on_member_update: Some(on_member_update),
            on_member_disconnect: Some(on_member_disconnect),
            on_lobby_message: Some(on_lobby_message),
            on_speaking: Some(on_speaking),
            on_network_message: Some(on_network_message),
        }
    }

    fn methods(&self) -> Result<*mut sys::IDiscordLobbyManager> {
        self.shared.ensure_ready()?;
        Ok(self.methods)
    }

    // Transactions

    pub fn lobby_create_transaction(&self) -> Result<LobbyTransaction> {
        let m = self.methods()?;
        let get_transaction = method!(m, get_lobby_create_transaction);
        let mut raw = ptr::null_mut();
        Error::from_code(unsafe { get_transaction(m, &mut raw) })?;
        Ok(LobbyTransaction::new(raw, self.shared.clone()))
    }

    pub fn lobby_update_transaction(&self, lobby_id: i64) -> Result<LobbyTransaction> {
        let m = self.methods()?;
        let get_transaction = method!(m, get_lobby_update_transaction);
        let mut raw = ptr::null_mut();
        Error::from_code(unsafe { get_transaction(m, lobby_id, &mut raw) })?;
        Ok(LobbyTransaction::new(raw, self.shared.clone()))
    }

    pub fn member_update_transaction(
        &self,
        lobby_id: i64,
        user_id: i64,
    ) -> Result<LobbyMemberTransaction> {
        let m = self.methods()?;
        let get_transaction = method!(m, get_member_update_transaction);
        let mut raw = ptr::null_mut();
        Error::from_code(unsafe { get_transaction(m, lobby_id, user_id, &mut raw) })?;
        Ok(LobbyMemberTransaction::new(raw, self.shared.clone()))
    }

    // Lifetime

    /// Submits `transaction`, which is inert afterwards.
    pub fn create_lobby(
        &self,
        transaction: &mut LobbyTransaction,
        callback: impl FnOnce(Result<Lobby>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let create_lobby = method!(m, create_lobby);
        let raw = transaction.submit()?;
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe { create_lobby(m, raw, data, Some(CallbackManager::cvoid_lobby_callback)) };
        Ok(())
    }

    /// Submits `transaction`, which is inert afterwards.
    pub fn update_lobby(
        &self,
        lobby_id: i64,
        transaction: &mut LobbyTransaction,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let update_lobby = method!(m, update_lobby);
        let raw = transaction.submit()?;
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            update_lobby(
                m,
                lobby_id,
                raw,
                data,
                Some(CallbackManager::cvoid_result_callback),
            )
        };
        Ok(())
    }

    pub fn delete_lobby(
        &self,
        lobby_id: i64,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let delete_lobby = method!(m, delete_lobby);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            delete_lobby(
                m,
                lobby_id,
                data,
                Some(CallbackManager::cvoid_result_callback),
            )
        };
        Ok(())
    }

    pub fn connect_lobby(
        &self,
        lobby_id: i64,
        secret: &str,
        callback: impl FnOnce(Result<Lobby>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let connect_lobby = method!(m, connect_lobby);
        let secret = CString::new(secret)?;
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            connect_lobby(
                m,
                lobby_id,
                secret.as_ptr(),
                data,
                Some(CallbackManager::cvoid_lobby_callback),
            )
        };
        Ok(())
    }

    pub fn connect_lobby_with_activity_secret(
        &self,
        activity_secret: &str,
        callback: impl FnOnce(Result<Lobby>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let connect = method!(m, connect_lobby_with_activity_secret);
        let secret = CString::new(activity_secret)?;
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            connect(
                m,
                secret.as_ptr(),
                data,
                Some(CallbackManager::cvoid_lobby_callback),
            )
        };
        Ok(())
    }

    pub fn disconnect_lobby(
        &self,
        lobby_id: i64,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let disconnect_lobby = method!(m, disconnect_lobby);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            disconnect_lobby(
                m,
                lobby_id,
                data,
                Some(CallbackManager::cvoid_result_callback),
            )
        };
        Ok(())
    }

    // Lobby queries

    pub fn lobby(&self, lobby_id: i64) -> Result<Lobby> {
        let m = self.methods()?;
        let get_lobby = method!(m, get_lobby);
        let mut raw = sys::DiscordLobby::default();
        Error::from_code(unsafe { get_lobby(m, lobby_id, &mut raw) })?;
        Ok(Lobby::from(&raw))
    }

    /// Secret suitable for `ActivitySecrets::join`.
    pub fn lobby_activity_secret(&self, lobby_id: i64) -> Result<String> {
        let m = self.methods()?;
        let get_secret = method!(m, get_lobby_activity_secret);
        let mut secret: sys::DiscordLobbySecret = [0; 128];
        Error::from_code(unsafe { get_secret(m, lobby_id, &mut secret) })?;
        Ok(read_fixed(&secret))
    }

    pub fn lobby_metadata_value(&self, lobby_id: i64, key: &str) -> Result<String> {
        let m = self.methods()?;
        let get_value = method!(m, get_lobby_metadata_value);
        let key = CString::new(key)?;
        let mut value: sys::DiscordMetadataValue = [0; 4096];
        Error::from_code(unsafe { get_value(m, lobby_id, key.as_ptr(), &mut value) })?;
        Ok(read_fixed(&value))
    }

    pub fn lobby_metadata_key(&self, lobby_id: i64, index: i32) -> Result<String> {
        let m = self.methods()?;
        let get_key = method!(m, get_lobby_metadata_key);
        let mut key: sys::DiscordMetadataKey = [0; 256];
        Error::from_code(unsafe { get_key(m, lobby_id, index, &mut key) })?;
        Ok(read_fixed(&key))
    }

    pub fn lobby_metadata_count(&self, lobby_id: i64) -> Result<i32> {
        let m = self.methods()?;
        let count = method!(m, lobby_metadata_count);
        let mut value = 0;
        Error::from_code(unsafe { count(m, lobby_id, &mut value) })?;
        Ok(value)
    }

    // Members

    pub fn member_count(&self, lobby_id: i64) -> Result<i32> {
        let m = self.methods()?;
        let member_count = method!(m, member_count);
        let mut value = 0;
        Error::from_code(unsafe { member_count(m, lobby_id, &mut value) })?;
        Ok(value)
    }

    pub fn member_user_id(&self, lobby_id: i64, index: i32) -> Result<i64> {
        let m = self.methods()?;
        let get_user_id = method!(m, get_member_user_id);
        let mut user_id = 0;
        Error::from_code(unsafe { get_user_id(m, lobby_id, index, &mut user_id) })?;
        Ok(user_id)
    }

    pub fn member_user(&self, lobby_id: i64, user_id: i64) -> Result<User> {
        let m = self.methods()?;
        let get_user = method!(m, get_member_user);
        let mut raw = sys::DiscordUser::default();
        Error::from_code(unsafe { get_user(m, lobby_id, user_id, &mut raw) })?;
        Ok(User::from(&raw))
    }

    /// Every member of the lobby, in the SDK's order.
    pub fn member_users(&self, lobby_id: i64) -> Result<Vec<User>> {
        (0..self.member_count(lobby_id)?)
            .map(|index| {
                let user_id = self.member_user_id(lobby_id, index)?;
                self.member_user(lobby_id, user_id)
            })
            .collect()
    }

    pub fn member_metadata_value(&self, lobby_id: i64, user_id: i64, key: &str) -> Result<String> {
        let m = self.methods()?;
        let get_value = method!(m, get_member_metadata_value);
        let key = CString::new(key)?;
        let mut value: sys::DiscordMetadataValue = [0; 4096];
        Error::from_code(unsafe { get_value(m, lobby_id, user_id, key.as_ptr(), &mut value) })?;
        Ok(read_fixed(&value))
    }

    pub fn member_metadata_key(&self, lobby_id: i64, user_id: i64, index: i32) -> Result<String> {
        let m = self.methods()?;
        let get_key = method!(m, get_member_metadata_key);
        let mut key: sys::DiscordMetadataKey = [0; 256];
        Error::from_code(unsafe { get_key(m, lobby_id, user_id, index, &mut key) })?;
        Ok(read_fixed(&key))
    }

    pub fn member_metadata_count(&self, lobby_id: i64, user_id: i64) -> Result<i32> {
        let m = self.methods()?;
        let count = method!(m, member_metadata_count);
        let mut value = 0;
        Error::from_code(unsafe { count(m, lobby_id, user_id, &mut value) })?;
        Ok(value)
    }

    /// Submits `transaction`, which is inert afterwards.
    pub fn update_member(
        &self,
        lobby_id: i64,
        user_id: i64,
        transaction: &mut LobbyMemberTransaction,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let update_member = method!(m, update_member);
        let raw = transaction.submit()?;
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            update_member(
                m,
                lobby_id,
                user_id,
                raw,
                data,
                Some(CallbackManager::cvoid_result_callback),
            )
        };
        Ok(())
    }

    /// Sends a message to every member; text goes as its UTF-8 bytes.
    pub fn send_lobby_message(
        &self,
        lobby_id: i64,
        data: impl AsRef<[u8]>,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let send_lobby_message = method!(m, send_lobby_message);
        let bytes = data.as_ref();
        let len = buffer_len(bytes.len())?;
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            send_lobby_message(
                m,
                lobby_id,
                bytes.as_ptr().cast_mut(),
                len,
                data,
                Some(CallbackManager::cvoid_result_callback),
            )
        };
        Ok(())
    }

    // Search

    pub fn search_query(&self) -> Result<LobbySearchQuery> {
        let m = self.methods()?;
        let get_search_query = method!(m, get_search_query);
        let mut raw = ptr::null_mut();
        Error::from_code(unsafe { get_search_query(m, &mut raw) })?;
        Ok(LobbySearchQuery::new(raw, self.shared.clone()))
    }

    /// Runs `query`, which is inert afterwards. Results are read with
    /// [`lobby_count`] and [`lobby_id`] once the callback reports success.
    ///
    /// [`lobby_count`]: LobbyManager::lobby_count
    /// [`lobby_id`]: LobbyManager::lobby_id
    pub fn search(
        &self,
        query: &mut LobbySearchQuery,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let search = method!(m, search);
        let raw = query.submit()?;
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe { search(m, raw, data, Some(CallbackManager::cvoid_result_callback)) };
        Ok(())
    }

    pub fn lobby_count(&self) -> Result<i32> {
        let m = self.methods()?;
        let lobby_count = method!(m, lobby_count);
        let mut count = 0;
        unsafe { lobby_count(m, &mut count) };
        Ok(count)
    }

    pub fn lobby_id(&self, index: i32) -> Result<i64> {
        let m = self.methods()?;
        let get_lobby_id = method!(m, get_lobby_id);
        let mut lobby_id = 0;
        Error::from_code(unsafe { get_lobby_id(m, index, &mut lobby_id) })?;
        Ok(lobby_id)
    }

    // Voice

    pub fn connect_voice(
        &self,
        lobby_id: i64,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let connect_voice = method!(m, connect_voice);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            connect_voice(
                m,
                lobby_id,
                data,
                Some(CallbackManager::cvoid_result_callback),
            )
        };
        Ok(())
    }

    pub fn disconnect_voice(
        &self,
        lobby_id: i64,
        callback: impl FnOnce(Result<()>) + 'static,
    ) -> Result<()> {
        let m = self.methods()?;
        let disconnect_voice = method!(m, disconnect_voice);
        let data = CallbackManager::register_completion(self.shared.token, callback);
        unsafe {
            disconnect_voice(
                m,
                lobby_id,
                data,
                Some(CallbackManager::cvoid_result_callback),
            )
        };
        Ok(())
    }

    // Networking

    pub fn connect_network(&self, lobby_id: i64) -> Result<()> {
        let m = self.methods()?;
        let connect_network = method!(m, connect_network);
        Error::from_code(unsafe { connect_network(m, lobby_id) })
    }

    pub fn disconnect_network(&self, lobby_id: i64) -> Result<()> {
        let m = self.methods()?;
        let disconnect_network = method!(m, disconnect_network);
        Error::from_code(unsafe { disconnect_network(m, lobby_id) })
    }

    /// Sends queued lobby network messages. Call once per frame after sending.
    pub fn flush_network(&self) -> Result<()> {
        let m = self.methods()?;
        let flush_network = method!(m, flush_network);
        Error::from_code(unsafe { flush_network(m) })
    }

    pub fn open_network_channel(
        &self,
        lobby_id: i64,
        channel_id: u8,
        reliable: bool,
    ) -> Result<()> {
        let m = self.methods()?;
        let open_channel = method!(m, open_network_channel);
        Error::from_code(unsafe { open_channel(m, lobby_id, channel_id, reliable) })
    }

    pub fn send_network_message(
        &self,
        lobby_id: i64,
        user_id: i64,
        channel_id: u8,
        data: &[u8],
    ) -> Result<()> {
        let m = self.methods()?;
        let send_message = method!(m, send_network_message);
        let len = buffer_len(data.len())?;
        Error::from_code(unsafe {
            send_message(
                m,
                lobby_id,
                user_id,
                channel_id,
                data.as_ptr().cast_mut(),
                len,
            )
        })
    }

    // Events

    pub fn on_lobby_update(&self, handler: impl FnMut(i64) + 'static) {
        self.shared.lobby.update.subscribe(Box::new(handler));
    }

    /// Handler receives the lobby id and the SDK's deletion reason.
    pub fn on_lobby_delete(&self, handler: impl FnMut(i64, u32) + 'static) {
        self.shared.lobby.delete.subscribe(Box::new(handler));
    }

    pub fn on_member_connect(&self, handler: impl FnMut(i64, i64) + 'static) {
        self.shared.lobby.member_connect.subscribe(Box::new(handler));
    }

    pub fn on_member_update(&self, handler: impl FnMut(i64, i64) + 'static) {
        self.shared.lobby.member_update.subscribe(Box::new(handler));
    }

    pub fn on_member_disconnect(&self, handler: impl FnMut(i64, i64) + 'static) {
        self.shared.lobby.member_disconnect.subscribe(Box::new(handler));
    }

    pub fn on_lobby_message(&self, handler: impl FnMut(i64, i64, &[u8]) + 'static) {
        self.shared.lobby.message.subscribe(Box::new(handler));
    }

    pub fn on_speaking(&self, handler: impl FnMut(i64, i64, bool) + 'static) {
        self.shared.lobby.speaking.subscribe(Box::new(handler));
    }

    pub fn on_network_message(&self, handler: impl FnMut(i64, i64, u8, &[u8]) + 'static) {
        self.shared.lobby.network_message.subscribe(Box::new(handler));
    }
}

/// Pending change to a lobby's properties.
///
/// Once handed to [`LobbyManager::create_lobby`] or
/// [`LobbyManager::update_lobby`] the SDK owns the native transaction; every
/// setter then does nothing and returns `Ok(())`, and submitting it again
/// fails with `TransactionAborted`.
pub struct LobbyTransaction {
    raw: *mut sys::IDiscordLobbyTransaction,
    shared: Rc<ClientShared>,
}

impl LobbyTransaction {
    fn new(raw: *mut sys::IDiscordLobbyTransaction, shared: Rc<ClientShared>) -> Self {
        Self { raw, shared }
    }

    fn submit(&mut self) -> Result<*mut sys::IDiscordLobbyTransaction> {
        if self.raw.is_null() {
            return Err(Error::Discord(ResultCode::TransactionAborted));
        }
        Ok(std::mem::replace(&mut self.raw, ptr::null_mut()))
    }

    pub fn is_submitted(&self) -> bool {
        self.raw.is_null()
    }

    fn table(&self) -> Result<Option<*mut sys::IDiscordLobbyTransaction>> {
        if self.raw.is_null() {
            return Ok(None);
        }
        self.shared.ensure_ready()?;
        Ok(Some(self.raw))
    }

    pub fn set_type(&mut self, kind: LobbyType) -> Result<()> {
        let Some(t) = self.table()? else { return Ok(()) };
        let set_type = method!(t, set_type);
        Error::from_code(unsafe { set_type(t, kind.into()) })
    }

    pub fn set_owner(&mut self, owner_id: i64) -> Result<()> {
        let Some(t) = self.table()? else { return Ok(()) };
        let set_owner = method!(t, set_owner);
        Error::from_code(unsafe { set_owner(t, owner_id) })
    }

    pub fn set_capacity(&mut self, capacity: u32) -> Result<()> {
        let Some(t) = self.table()? else { return Ok(()) };
        let set_capacity = method!(t, set_capacity);
        Error::from_code(unsafe { set_capacity(t, capacity) })
    }

    pub fn set_metadata(&mut self, key: &str, value: &str) -> Result<()> {
        let Some(t) = self.table()? else { return Ok(()) };
        let set_metadata = method!(t, set_metadata);
        let key = CString::new(key)?;
        let value = CString::new(value)?;
        Error::from_code(unsafe { set_metadata(t, key.as_ptr(), value.as_ptr()) })
    }

    pub fn delete_metadata(&mut self, key: &str) -> Result<()> {
        let Some(t) = self.table()? else { return Ok(()) };
        let delete_metadata = method!(t, delete_metadata);
        let key = CString::new(key)?;
        Error::from_code(unsafe { delete_metadata(t, key.as_ptr()) })
    }

    pub fn set_locked(&mut self, locked: bool) -> Result<()> {
        let Some(t) = self.table()? else { return Ok(()) };
        let set_locked = method!(t, set_locked);
        Error::from_code(unsafe { set_locked(t, locked) })
    }
}

/// Pending change to one member's metadata. Inert after
/// [`LobbyManager::update_member`].
pub struct LobbyMemberTransaction {
    raw: *mut sys::IDiscordLobbyMemberTransaction,
    shared: Rc<ClientShared>,
}

impl LobbyMemberTransaction {
    fn new(raw: *mut sys::IDiscordLobbyMemberTransaction, shared: Rc<ClientShared>) -> Self {
        Self { raw, shared }
    }

    fn submit(&mut self) -> Result<*mut sys::IDiscordLobbyMemberTransaction> {
        if self.raw.is_null() {
            return Err(Error::Discord(ResultCode::TransactionAborted));
        }
        Ok(std::mem::replace(&mut self.raw, ptr::null_mut()))
    }

    pub fn is_submitted(&self) -> bool {
        self.raw.is_null()
    }

    fn table(&self) -> Result<Option<*mut sys::IDiscordLobbyMemberTransaction>> {
        if self.raw.is_null() {
            return Ok(None);
        }
        self.shared.ensure_ready()?;
        Ok(Some(self.raw))
    }

    pub fn set_metadata(&mut self, key: &str, value: &str) -> Result<()> {
        let Some(t) = self.table()? else { return Ok(()) };
        let set_metadata = method!(t, set_metadata);
        let key = CString::new(key)?;
        let value = CString::new(value)?;
        Error::from_code(unsafe { set_metadata(t, key.as_ptr(), value.as_ptr()) })
    }

    pub fn delete_metadata(&mut self, key: &str) -> Result<()> {
        let Some(t) = self.table()? else { return Ok(()) };
        let delete_metadata = method!(t, delete_metadata);
        let key = CString::new(key)?;
        Error::from_code(unsafe { delete_metadata(t, key.as_ptr()) })
    }
}

/// Lobby search criteria. Inert after [`LobbyManager::search`].
pub struct LobbySearchQuery {
    raw: *mut sys::IDiscordLobbySearchQuery,
    shared: Rc<ClientShared>,
}

impl LobbySearchQuery {
    fn new(raw: *mut sys::IDiscordLobbySearchQuery, shared: Rc<ClientShared>) -> Self {
        Self { raw, shared }
    }

    fn submit(&mut self) -> Result<*mut sys::IDiscordLobbySearchQuery> {
        if self.raw.is_null() {
            return Err(Error::Discord(ResultCode::TransactionAborted));
        }
        Ok(std::mem::replace(&mut self.raw, ptr::null_mut()))
    }

    pub fn is_submitted(&self) -> bool {
        self.raw.is_null()
    }

    fn table(&self) -> Result<Option<*mut sys::IDiscordLobbySearchQuery>> {
        if self.raw.is_null() {
            return Ok(None);
        }
        self.shared.ensure_ready()?;
        Ok(Some(self.raw))
    }

    /// Keeps lobbies whose metadata `key` compares to `value`. Metadata keys
    /// are addressed as `"metadata.<key>"`.
    pub fn filter(
        &mut self,
        key: &str,
        comparison: LobbySearchComparison,
        cast: LobbySearchCast,
        value: &str,
    ) -> Result<()> {
        let Some(q) = self.table()? else { return Ok(()) };
        let filter = method!(q, filter);
        let key = CString::new(key)?;
        let value = CString::new(value)?;
        Error::from_code(unsafe {
            filter(
                q,
                key.as_ptr(),
                comparison.into(),
                cast.into(),
                value.as_ptr(),
            )
        })
    }

    /// Orders results by closeness of `key` to `value`.
    pub fn sort(&mut self, key: &str, cast: LobbySearchCast, value: &str) -> Result<()> {
        let Some(q) = self.table()? else { return Ok(()) };
        let sort = method!(q, sort);
        let key = CString::new(key)?;
        let value = CString::new(value)?;
        Error::from_code(
            unsafe { sort(q, key.as_ptr(), cast.into(), value.as_ptr()) },
        )
    }

    pub fn limit(&mut self, limit: u32) -> Result<()> {
        let Some(q) = self.table()? else { return Ok(()) };
        let set_limit = method!(q, limit);
        Error::from_code(unsafe { set_limit(q, limit) })
    }

    pub fn distance(&mut self, distance: LobbySearchDistance) -> Result<()> {
        let Some(q) = self.table()? else { return Ok(()) };
        let set_distance = method!(q, distance);
        Error::from_code(unsafe { set_distance(q, distance.into()) })
    }
}

unsafe extern "C" fn on_lobby_update(event_data: *mut c_void, lobby_id: i64) {
    if let Some(shared) = CallbackManager::client(event_data) {
        shared.lobby.update.emit(|handler| handler(lobby_id));
    }
}

unsafe extern "C" fn on_lobby_delete(event_data: *mut c_void, lobby_id: i64, reason: u32) {
    if let Some(shared) = CallbackManager::client(event_data) {
        shared.lobby.delete.emit(|handler| handler(lobby_id, reason));
    }
}

unsafe extern "C" fn on_member_connect(event_data: *mut c_void, lobby_id: i64, user_id: i64) {
    if let Some(shared) = CallbackManager::client(event_data) {
        shared.lobby.member_connect.emit(|handler| handler(lobby_id, user_id));
    }
}

unsafe extern "C" fn on_member_update(event_data: *mut c_void, lobby_id: i64, user_id: i64) {
    if let Some(shared) = CallbackManager::client(event_data) {
        shared.lobby.member_update.emit(|handler| handler(lobby_id, user_id));
    }
}

unsafe extern "C" fn on_member_disconnect(event_data: *mut c_void, lobby_id: i64, user_id: i64) {
    if let Some(shared) = CallbackManager::client(event_data) {
        shared.lobby.member_disconnect.emit(|handler| handler(lobby_id, user_id));
    }
}

unsafe extern "C" fn on_lobby_message(
    event_data: *mut c_void,
    lobby_id: i64,
    user_id: i64,
    data: *mut u8,
    len: u32,
) {
    if let Some(shared) = CallbackManager::client(event_data) {
        let data = unsafe { read_bytes(data, len) };
        shared.lobby.message.emit(|handler| handler(lobby_id, user_id, &data));
    }
}

unsafe extern "C" fn on_speaking(
    event_data: *mut c_void,
    lobby_id: i64,
    user_id: i64,
    speaking: bool,
) {
    if let Some(shared) = CallbackManager::client(event_data) {
        shared.lobby.speaking.emit(|handler| handler(lobby_id, user_id, speaking));
    }
}

unsafe extern "C" fn on_network_message(
    event_data: *mut c_void,
    lobby_id: i64,
    user_id: i64,
    channel_id: u8,
    data: *mut u8,
    len: u32,
) {
    if let Some(shared) = CallbackManager::client(event_data) {
        let data = unsafe { read_bytes(data, len) };
        shared
            .lobby
            .network_message
            .emit(|handler| handler(lobby_id, user_id, channel_id, &data));
    }
}
