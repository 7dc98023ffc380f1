use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use discord_game_sdk_sys as sys;
use libloading::Library;

use crate::error::{Error, Result};

/// The SDK shared library with its `DiscordCreate` entry point resolved.
pub struct SdkLibrary {
    create: sys::DiscordCreateFn,
    // Must outlive `create`.
    _library: Library,
}

impl SdkLibrary {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        // SAFETY: loading runs the SDK's initialisers, which have no preconditions.
        let library = unsafe { Library::new(path) }?;
        // SAFETY: the symbol has the signature declared in the C header.
        let create = unsafe { *library.get::<sys::DiscordCreateFn>(sys::DISCORD_CREATE_SYMBOL)? };
        tracing::debug!("loaded discord game sdk from {}", path.display());
        Ok(Self {
            create,
            _library: library,
        })
    }

    pub fn create_fn(&self) -> sys::DiscordCreateFn {
        self.create
    }
}

impl std::fmt::Debug for SdkLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkLibrary").finish_non_exhaustive()
    }
}

static SDK_IN_USE: AtomicBool = AtomicBool::new(false);

/// Held by the one client allowed to run against the loaded SDK.
#[derive(Debug)]
pub(crate) struct InstanceGuard(());

impl InstanceGuard {
    pub(crate) fn acquire() -> Result<Self> {
        SDK_IN_USE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InstanceGuard(()))
            .map_err(|_| Error::AlreadyRunning)
    }
}

impl Drop for InstanceGuard {
    fn drop(&mut self) {
        SDK_IN_USE.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_guard_at_a_time() {
        let guard = InstanceGuard::acquire().unwrap();
        assert!(matches!(InstanceGuard::acquire(), Err(Error::AlreadyRunning)));
        drop(guard);
        let again = InstanceGuard::acquire();
        assert!(again.is_ok());
    }

    #[test]
    fn missing_library_is_a_load_error() {
        let result = SdkLibrary::load("/nonexistent/libdiscord_game_sdk.so");
        assert!(matches!(result, Err(Error::Library(_))));
    }
}
