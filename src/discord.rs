use std::cell::{Cell, OnceCell};
use std::ptr;
use std::rc::Rc;

use discord_game_sdk_sys as sys;

use crate::callback_manager::{CallbackManager, LogHookFn, token_to_ptr};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::library::{InstanceGuard, SdkLibrary};
use crate::managers::*;
use crate::types::{LogLevel, ResultCode};

/// Lifecycle of a [`Discord`] client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientState {
    /// `DiscordCreate` has not succeeded yet.
    #[default]
    Uninitialized,
    Ready,
    /// [`Discord::shutdown`] ran; every call fails with [`Error::NotInitialized`].
    Disposed,
}

/// State shared between a client, its managers and the event trampolines.
#[derive(Default)]
pub(crate) struct ClientShared {
    pub(crate) token: u64,
    state: Cell<ClientState>,
    pub(crate) log_hook: Event<LogHookFn>,
    pub(crate) user: UserEvents,
    pub(crate) activity: ActivityEvents,
    pub(crate) relationship: RelationshipEvents,
    pub(crate) lobby: LobbyEvents,
    pub(crate) network: NetworkEvents,
    pub(crate) overlay: OverlayEvents,
    pub(crate) store: StoreEvents,
    pub(crate) voice: VoiceEvents,
    pub(crate) achievement: AchievementEvents,
}

impl ClientShared {
    pub(crate) fn new(token: u64) -> Self {
        Self {
            token,
            ..Default::default()
        }
    }

    pub(crate) fn state(&self) -> ClientState {
        self.state.get()
    }

    pub(crate) fn ensure_ready(&self) -> Result<()> {
        match self.state.get() {
            ClientState::Ready => Ok(()),
            ClientState::Uninitialized | ClientState::Disposed => Err(Error::NotInitialized),
        }
    }
}

/// Event blocks handed to `DiscordCreate`. The SDK keeps pointers into this
/// until the core is destroyed.
struct EventBlocks {
    core: sys::IDiscordCoreEvents,
    application: sys::IDiscordApplicationEvents,
    user: sys::IDiscordUserEvents,
    image: sys::IDiscordImageEvents,
    activity: sys::IDiscordActivityEvents,
    relationship: sys::IDiscordRelationshipEvents,
    lobby: sys::IDiscordLobbyEvents,
    network: sys::IDiscordNetworkEvents,
    overlay: sys::IDiscordOverlayEvents,
    storage: sys::IDiscordStorageEvents,
    store: sys::IDiscordStoreEvents,
    voice: sys::IDiscordVoiceEvents,
    achievement: sys::IDiscordAchievementEvents,
}

impl EventBlocks {
    fn new() -> Self {
        Self {
            core: ptr::null_mut(),
            application: ptr::null_mut(),
            user: UserManager::event_table(),
            image: ptr::null_mut(),
            activity: ActivityManager::event_table(),
            relationship: RelationshipManager::event_table(),
            lobby: LobbyManager::event_table(),
            network: NetworkManager::event_table(),
            overlay: OverlayManager::event_table(),
            storage: ptr::null_mut(),
            store: StoreManager::event_table(),
            voice: VoiceManager::event_table(),
            achievement: AchievementManager::event_table(),
        }
    }
}

/// A connection to the Discord client through the Game SDK.
///
/// The SDK is single-threaded: a `Discord` and its managers stay on the
/// thread that created them, and nothing happens until [`run_callbacks`]
/// is called, typically once per frame.
///
/// [`run_callbacks`]: Discord::run_callbacks
pub struct Discord {
    core: *mut sys::IDiscordCore,
    events: *mut EventBlocks,
    shared: Rc<ClientShared>,
    application: OnceCell<ApplicationManager>,
    user: OnceCell<UserManager>,
    image: OnceCell<ImageManager>,
    activity: OnceCell<ActivityManager>,
    relationship: OnceCell<RelationshipManager>,
    lobby: OnceCell<LobbyManager>,
    network: OnceCell<NetworkManager>,
    overlay: OnceCell<OverlayManager>,
    storage: OnceCell<StorageManager>,
    store: OnceCell<StoreManager>,
    voice: OnceCell<VoiceManager>,
    achievement: OnceCell<AchievementManager>,
    _instance: Option<InstanceGuard>,
    // Dropped last: the core's code lives in the library.
    _library: Option<SdkLibrary>,
}

impl Discord {
    /// Loads the SDK from the default location and creates a client.
    pub fn new(client_id: i64, flags: crate::types::CreateFlags) -> Result<Self> {
        Self::with_config(&ClientConfig::new(client_id).flags(flags))
    }

    pub fn builder(client_id: i64) -> ClientConfig {
        ClientConfig::new(client_id)
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let library = SdkLibrary::load(config.resolve_library_path())?;
        let instance = InstanceGuard::acquire()?;
        let create = library.create_fn();
        // SAFETY: `create` was resolved from the library kept alive by the client.
        unsafe { Self::create(create, config, Some(library), Some(instance)) }
    }

    /// Creates a client through an already resolved `DiscordCreate`.
    ///
    /// # Safety
    ///
    /// `create` must behave as the SDK entry point and the code behind it must
    /// stay loaded for the life of the client.
    pub unsafe fn from_entry_point(
        create: sys::DiscordCreateFn,
        config: &ClientConfig,
    ) -> Result<Self> {
        unsafe { Self::create(create, config, None, None) }
    }

    unsafe fn create(
        create: sys::DiscordCreateFn,
        config: &ClientConfig,
        library: Option<SdkLibrary>,
        instance: Option<InstanceGuard>,
    ) -> Result<Self> {
        let shared = Rc::new(ClientShared::new(CallbackManager::next_token()));
        let event_data = CallbackManager::register_client(shared.clone());
        let events = Box::into_raw(Box::new(EventBlocks::new()));

        // From here on, `Drop` releases the registry entry and the event blocks.
        let mut discord = Discord {
            core: ptr::null_mut(),
            events,
            shared,
            application: OnceCell::new(),
            user: OnceCell::new(),
            image: OnceCell::new(),
            activity: OnceCell::new(),
            relationship: OnceCell::new(),
            lobby: OnceCell::new(),
            network: OnceCell::new(),
            overlay: OnceCell::new(),
            storage: OnceCell::new(),
            store: OnceCell::new(),
            voice: OnceCell::new(),
            achievement: OnceCell::new(),
            _instance: instance,
            _library: library,
        };

        let mut params = unsafe {
            sys::DiscordCreateParams {
                client_id: config.client_id,
                flags: config.flags.bits(),
                events: &raw mut (*events).core,
                event_data,
                application_events: &raw mut (*events).application,
                user_events: &raw mut (*events).user,
                image_events: &raw mut (*events).image,
                activity_events: &raw mut (*events).activity,
                relationship_events: &raw mut (*events).relationship,
                lobby_events: &raw mut (*events).lobby,
                network_events: &raw mut (*events).network,
                overlay_events: &raw mut (*events).overlay,
                storage_events: &raw mut (*events).storage,
                store_events: &raw mut (*events).store,
                voice_events: &raw mut (*events).voice,
                achievement_events: &raw mut (*events).achievement,
                ..Default::default()
            }
        };

        let mut core = ptr::null_mut();
        let result = unsafe { create(sys::DISCORD_VERSION, &mut params, &mut core) };
        if let Err(err) = Error::from_code(result) {
            tracing::error!(client_id = config.client_id, "DiscordCreate failed: {err}");
            return Err(err);
        }
        if core.is_null() {
            return Err(Error::Discord(ResultCode::InternalError));
        }

        discord.core = core;
        discord.shared.state.set(ClientState::Ready);
        tracing::info!(client_id = config.client_id, "discord client created");

        if let Some(level) = config.log_level {
            discord.set_log_hook(level, forward_to_tracing)?;
        }
        Ok(discord)
    }

    pub fn state(&self) -> ClientState {
        self.shared.state()
    }

    /// Pumps the SDK: dispatches queued events and completes pending calls.
    ///
    /// Fails with `ResultCode::NotRunning` once the Discord client has gone away.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn run_callbacks(&self) -> Result<()> {
        self.shared.ensure_ready()?;
        let run_callbacks = method!(self.core, run_callbacks);
        Error::from_code(unsafe { run_callbacks(self.core) })
    }

    /// Routes SDK log messages at or above `min_level` to `hook`, replacing any
    /// previous hook.
    pub fn set_log_hook(
        &self,
        min_level: LogLevel,
        hook: impl FnMut(LogLevel, &str) + 'static,
    ) -> Result<()> {
        self.shared.ensure_ready()?;
        let set_log_hook = method!(self.core, set_log_hook);
        self.shared.log_hook.replace(Box::new(hook));
        unsafe {
            set_log_hook(
                self.core,
                min_level.into(),
                token_to_ptr(self.shared.token),
                Some(CallbackManager::cvoid_log_hook),
            )
        };
        Ok(())
    }

    /// Number of one-shot callbacks issued by this client that have not completed yet.
    pub fn pending_callbacks(&self) -> usize {
        CallbackManager::pending_count(self.shared.token)
    }

    /// Destroys the native core and releases everything the client registered.
    ///
    /// Idempotent; also run on drop. Callbacks still pending are dropped
    /// without being invoked.
    pub fn shutdown(&mut self) {
        if self.shared.state() == ClientState::Disposed {
            return;
        }
        self.shared.state.set(ClientState::Disposed);

        if !self.core.is_null() {
            // SAFETY: `core` came from a successful `DiscordCreate`.
            if let Some(destroy) = unsafe { (*self.core).destroy } {
                unsafe { destroy(self.core) };
            }
            self.core = ptr::null_mut();
            tracing::info!("discord client destroyed");
        }

        if !self.events.is_null() {
            // SAFETY: allocated in `create`; the SDK no longer references it.
            drop(unsafe { Box::from_raw(self.events) });
            self.events = ptr::null_mut();
        }

        self.shared.log_hook.clear();
        CallbackManager::unregister_client(self.shared.token);
    }

    fn manager<'a, M>(
        &'a self,
        cell: &'a OnceCell<M>,
        init: impl FnOnce() -> Result<M>,
    ) -> Result<&'a M> {
        self.shared.ensure_ready()?;
        if let Some(manager) = cell.get() {
            return Ok(manager);
        }
        let manager = init()?;
        Ok(cell.get_or_init(|| manager))
    }

    pub fn application_manager(&self) -> Result<&ApplicationManager> {
        self.manager(&self.application, || {
            let get = method!(self.core, get_application_manager);
            let methods = unsafe { get(self.core) };
            ApplicationManager::new(
                methods,
                unsafe { &raw mut (*self.events).application },
                self.shared.clone(),
            )
        })
    }

    pub fn user_manager(&self) -> Result<&UserManager> {
        self.manager(&self.user, || {
            let get = method!(self.core, get_user_manager);
            let methods = unsafe { get(self.core) };
            UserManager::new(
                methods,
                unsafe { &raw mut (*self.events).user },
                self.shared.clone(),
            )
        })
    }

    pub fn image_manager(&self) -> Result<&ImageManager> {
        self.manager(&self.image, || {
            let get = method!(self.core, get_image_manager);
            let methods = unsafe { get(self.core) };
            ImageManager::new(
                methods,
                unsafe { &raw mut (*self.events).image },
                self.shared.clone(),
            )
        })
    }

    pub fn activity_manager(&self) -> Result<&ActivityManager> {
        self.manager(&self.activity, || {
            let get = method!(self.core, get_activity_manager);
            let methods = unsafe { get(self.core) };
            ActivityManager::new(
                methods,
                unsafe { &raw mut (*self.events).activity },
                self.shared.clone(),
            )
        })
    }

    pub fn relationship_manager(&self) -> Result<&RelationshipManager> {
        self.manager(&self.relationship, || {
            let get = method!(self.core, get_relationship_manager);
            let methods = unsafe { get(self.core) };
            RelationshipManager::new(
                methods,
                unsafe { &raw mut (*self.events).relationship },
                self.shared.clone(),
            )
        })
    }

    pub fn lobby_manager(&self) -> Result<&LobbyManager> {
        self.manager(&self.lobby, || {
            let get = method!(self.core, get_lobby_manager);
            let methods = unsafe { get(self.core) };
            LobbyManager::new(
                methods,
                unsafe { &raw mut (*self.events).lobby },
                self.shared.clone(),
            )
        })
    }

    pub fn network_manager(&self) -> Result<&NetworkManager> {
        self.manager(&self.network, || {
            let get = method!(self.core, get_network_manager);
            let methods = unsafe { get(self.core) };
            NetworkManager::new(
                methods,
                unsafe { &raw mut (*self.events).network },
                self.shared.clone(),
            )
        })
    }

    pub fn overlay_manager(&self) -> Result<&OverlayManager> {
        self.manager(&self.overlay, || {
            let get = method!(self.core, get_overlay_manager);
            let methods = unsafe { get(self.core) };
            OverlayManager::new(
                methods,
                unsafe { &raw mut (*self.events).overlay },
                self.shared.clone(),
            )
        })
    }

    pub fn storage_manager(&self) -> Result<&StorageManager> {
        self.manager(&self.storage, || {
            let get = method!(self.core, get_storage_manager);
            let methods = unsafe { get(self.core) };
            StorageManager::new(
                methods,
                unsafe { &raw mut (*self.events).storage },
                self.shared.clone(),
            )
        })
    }

    pub fn store_manager(&self) -> Result<&StoreManager> {
        self.manager(&self.store, || {
            let get = method!(self.core, get_store_manager);
            let methods = unsafe { get(self.core) };
            StoreManager::new(
                methods,
                unsafe { &raw mut (*self.events).store },
                self.shared.clone(),
            )
        })
    }

    pub fn voice_manager(&self) -> Result<&VoiceManager> {
        self.manager(&self.voice, || {
            let get = method!(self.core, get_voice_manager);
            let methods = unsafe { get(self.core) };
            VoiceManager::new(
                methods,
                unsafe { &raw mut (*self.events).voice },
                self.shared.clone(),
            )
        })
    }

    pub fn achievement_manager(&self) -> Result<&AchievementManager> {
        self.manager(&self.achievement, || {
            let get = method!(self.core, get_achievement_manager);
            let methods = unsafe { get(self.core) };
            AchievementManager::new(
                methods,
                unsafe { &raw mut (*self.events).achievement },
                self.shared.clone(),
            )
        })
    }
}

impl Drop for Discord {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for Discord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Discord")
            .field("state", &self.state())
            .field("token", &self.shared.token)
            .finish_non_exhaustive()
    }
}

fn forward_to_tracing(level: LogLevel, message: &str) {
    const TARGET: &str = "discord_game_sdk::native";
    match level {
        LogLevel::Error => tracing::error!(target: TARGET, "{message}"),
        LogLevel::Warn => tracing::warn!(target: TARGET, "{message}"),
        LogLevel::Info => tracing::info!(target: TARGET, "{message}"),
        LogLevel::Debug => tracing::debug!(target: TARGET, "{message}"),
    }
}
