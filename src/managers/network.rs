use std::ffi::{CString, c_char, c_void};
use std::rc::Rc;

use discord_game_sdk_sys as sys;

use crate::callback_manager::CallbackManager;
use crate::discord::ClientShared;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::internal::utils::{buffer_len, read_bytes, read_cstring};
use crate::managers::check_tables;

#[derive(Default)]
pub(crate) struct NetworkEvents {
    pub(crate) message: Event<dyn FnMut(u64, u8, &[u8])>,
    pub(crate) route_update: Event<dyn FnMut(&str)>,
}

/// Peer-to-peer messaging over Discord's relay network.
///
/// Peers exchange their [`peer_id`](NetworkManager::peer_id) and route data
/// out of band (lobby metadata is the usual channel), then open numbered
/// channels to each other. Messages are buffered until [`flush`] runs, which
/// should happen once per frame.
///
/// [`flush`]: NetworkManager::flush
pub struct NetworkManager {
    methods: *mut sys::IDiscordNetworkManager,
    shared: Rc<ClientShared>,
}

impl NetworkManager {
    pub(crate) fn new(
        methods: *mut sys::IDiscordNetworkManager,
        events: *mut sys::IDiscordNetworkEvents,
        shared: Rc<ClientShared>,
    ) -> Result<Self> {
        check_tables("NetworkManager", methods, events)?;
        Ok(Self { methods, shared })
    }

    pub(crate) fn event_table() -> sys::IDiscordNetworkEvents {
        sys::IDiscordNetworkEvents {
            on_message: Some(on_message),
            on_route_update: Some(on_route_update),
        }
    }

    fn methods(&self) -> Result<*mut sys::IDiscordNetworkManager> {
        self.shared.ensure_ready()?;
        Ok(self.methods)
    }

    pub fn peer_id(&self) -> Result<u64> {
        let m = self.methods()?;
        let get_peer_id = method!(m, get_peer_id);
        let mut peer_id = 0;
        unsafe { get_peer_id(m, &mut peer_id) };
        Ok(peer_id)
    }

    pub fn flush(&self) -> Result<()> {
        let m = self.methods()?;
        let flush = method!(m, flush);
        Error::from_code(unsafe { flush(m) })
    }

    pub fn open_peer(&self, peer_id: u64, route: &str) -> Result<()> {
        let m = self.methods()?;
        let open_peer = method!(m, open_peer);
        let route = CString::new(route)?;
        Error::from_code(unsafe { open_peer(m, peer_id, route.as_ptr()) })
    }

    /// Call after the remote peer reports a new route.
    pub fn update_peer(&self, peer_id: u64, route: &str) -> Result<()> {
        let m = self.methods()?;
        let update_peer = method!(m, update_peer);
        let route = CString::new(route)?;
        Error::from_code(unsafe { update_peer(m, peer_id, route.as_ptr()) })
    }

    pub fn close_peer(&self, peer_id: u64) -> Result<()> {
        let m = self.methods()?;
        let close_peer = method!(m, close_peer);
        Error::from_code(unsafe { close_peer(m, peer_id) })
    }

    pub fn open_channel(&self, peer_id: u64, channel_id: u8, reliable: bool) -> Result<()> {
        let m = self.methods()?;
        let open_channel = method!(m, open_channel);
        Error::from_code(unsafe { open_channel(m, peer_id, channel_id, reliable) })
    }

    pub fn close_channel(&self, peer_id: u64, channel_id: u8) -> Result<()> {
        let m = self.methods()?;
        let close_channel = method!(m, close_channel);
        Error::from_code(unsafe { close_channel(m, peer_id, channel_id) })
    }

    pub fn send_message(&self, peer_id: u64, channel_id: u8, data: &[u8]) -> Result<()> {
        let m = self.methods()?;
        let send_message = method!(m, send_message);
        let len = buffer_len(data.len())?;
        Error::from_code(unsafe {
            send_message(m, peer_id, channel_id, data.as_ptr().cast_mut(), len)
        })
    }

    pub fn on_message(&self, handler: impl FnMut(u64, u8, &[u8]) + 'static) {
        self.shared.network.message.subscribe(Box::new(handler));
    }

    /// Fires when this peer's route changes; forward it to remote peers.
    pub fn on_route_update(&self, handler: impl FnMut(&str) + 'static) {
        self.shared.network.route_update.subscribe(Box::new(handler));
    }
}

unsafe extern "C" fn on_message(
    event_data: *mut c_void,
    peer_id: sys::DiscordNetworkPeerId,
    channel_id: sys::DiscordNetworkChannelId,
    data: *mut u8,
    len: u32,
) {
    if let Some(shared) = CallbackManager::client(event_data) {
        let data = unsafe { read_bytes(data, len) };
        shared.network.message.emit(|handler| handler(peer_id, channel_id, &data));
    }
}

unsafe extern "C" fn on_route_update(event_data: *mut c_void, route: *const c_char) {
    if let Some(shared) = CallbackManager::client(event_data) {
        let route = unsafe { read_cstring(route) };
        shared.network.route_update.emit(|handler| handler(&route));
    }
}
