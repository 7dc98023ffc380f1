//! Client configuration.
//!
//! The SDK itself also reads a few environment variables, mostly useful when
//! testing a game outside the Discord launcher. They are listed here for
//! reference; this crate does not interpret them.

use std::path::PathBuf;

use crate::discord::Discord;
use crate::error::Result;
use crate::types::{CreateFlags, LogLevel};

/// Overrides the path of the SDK shared library.
pub const LIBRARY_PATH_ENV: &str = "DISCORD_GAME_SDK_PATH";

/// Read by the SDK: locale reported by `ApplicationManager::current_locale`.
pub const CURRENT_LOCALE_ENV: &str = "DISCORD_CURRENT_LOCALE";
/// Read by the SDK: branch reported by `ApplicationManager::current_branch`.
pub const CURRENT_BRANCH_ENV: &str = "DISCORD_CURRENT_BRANCH";
/// Read by the SDK: bearer token used instead of the launcher's.
pub const ACCESS_TOKEN_ENV: &str = "DISCORD_ACCESS_TOKEN";
/// Read by the SDK: root directory of `StorageManager` files.
pub const STORAGE_PATH_ENV: &str = "DISCORD_STORAGE_PATH";

#[cfg(target_os = "windows")]
pub const DEFAULT_LIBRARY_NAME: &str = "discord_game_sdk.dll";
#[cfg(target_os = "macos")]
pub const DEFAULT_LIBRARY_NAME: &str = "discord_game_sdk.dylib";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const DEFAULT_LIBRARY_NAME: &str = "libdiscord_game_sdk.so";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub client_id: i64,
    pub flags: CreateFlags,
    pub library_path: Option<PathBuf>,
    /// When set, SDK log output at or above this level is forwarded to `tracing`.
    pub log_level: Option<LogLevel>,
}

impl ClientConfig {
    pub fn new(client_id: i64) -> Self {
        Self {
            client_id,
            flags: CreateFlags::default(),
            library_path: None,
            log_level: None,
        }
    }

    pub fn flags(mut self, flags: CreateFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_path = Some(path.into());
        self
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Explicit path, then [`LIBRARY_PATH_ENV`], then the vendor file name.
    pub fn resolve_library_path(&self) -> PathBuf {
        if let Some(path) = &self.library_path {
            return path.clone();
        }
        match std::env::var_os(LIBRARY_PATH_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => PathBuf::from(DEFAULT_LIBRARY_NAME),
        }
    }

    /// Loads the SDK and creates a client with this configuration.
    pub fn build(self) -> Result<Discord> {
        Discord::with_config(&self)
    }
}
