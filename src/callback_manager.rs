//! Token registry standing between the SDK's opaque `void*` context values and
//! Rust closures.
//!
//! Every pending one-shot completion and every live client is stored under a
//! `u64` token, and the token itself is what crosses the boundary as the
//! context pointer. The SDK is driven from one thread, so the registry is
//! thread-local.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::{c_char, c_void};
use std::rc::Rc;

use discord_game_sdk_sys as sys;

use crate::discord::ClientShared;
use crate::error::{Error, Result};
use crate::internal::utils::{read_bytes, read_cstring};
use crate::types::{ImageHandle, LogLevel, Lobby, OAuth2Token, ResultCode, User};

thread_local! {
    static CALLBACK_MANAGER: RefCell<CallbackManager> = RefCell::new(CallbackManager::default());
}

struct PendingCallback {
    owner: u64,
    callback: Box<dyn Any>,
}

#[derive(Default)]
pub(crate) struct CallbackManager {
    last_token: u64,
    pending: HashMap<u64, PendingCallback>,
    clients: HashMap<u64, Rc<ClientShared>>,
}

pub(crate) fn token_to_ptr(token: u64) -> *mut c_void {
    token as usize as *mut c_void
}

pub(crate) fn ptr_to_token(data: *mut c_void) -> u64 {
    data as usize as u64
}

impl CallbackManager {
    pub(crate) fn next_token() -> u64 {
        CALLBACK_MANAGER.with_borrow_mut(|manager| {
            manager.last_token += 1;
            manager.last_token
        })
    }

    // Clients

    pub(crate) fn register_client(shared: Rc<ClientShared>) -> *mut c_void {
        let token = shared.token;
        CALLBACK_MANAGER.with_borrow_mut(|manager| manager.clients.insert(token, shared));
        token_to_ptr(token)
    }

    pub(crate) fn client(data: *mut c_void) -> Option<Rc<ClientShared>> {
        let token = ptr_to_token(data);
        let client =
            CALLBACK_MANAGER.with_borrow(|manager| manager.clients.get(&token).cloned());
        if client.is_none() {
            tracing::debug!(token, "event for unregistered client dropped");
        }
        client
    }

    /// Removes the client entry and every completion it still owns.
    pub(crate) fn unregister_client(token: u64) -> bool {
        // Closures are dropped outside the borrow; their captures may touch the registry.
        let (removed, orphaned) = CALLBACK_MANAGER.with_borrow_mut(|manager| {
            let removed = manager.clients.remove(&token).is_some();
            let owned: Vec<u64> = manager
                .pending
                .iter()
                .filter(|(_, pending)| pending.owner == token)
                .map(|(key, _)| *key)
                .collect();
            let orphaned: Vec<PendingCallback> = owned
                .iter()
                .filter_map(|key| manager.pending.remove(key))
                .collect();
            (removed, orphaned)
        });
        if !orphaned.is_empty() {
            tracing::debug!(
                token,
                count = orphaned.len(),
                "dropping uncompleted callbacks"
            );
        }
        drop(orphaned);
        removed
    }

    #[cfg(test)]
    pub(crate) fn client_count() -> usize {
        CALLBACK_MANAGER.with_borrow(|manager| manager.clients.len())
    }

    // One-shot completions

    pub(crate) fn register_completion<T: 'static>(
        owner: u64,
        callback: impl FnOnce(Result<T>) + 'static,
    ) -> *mut c_void {
        let callback: CompletionFn<T> = Box::new(callback);
        let token = Self::next_token();
        CALLBACK_MANAGER.with_borrow_mut(|manager| {
            manager.pending.insert(
                token,
                PendingCallback {
                    owner,
                    callback: Box::new(callback),
                },
            )
        });
        token_to_ptr(token)
    }

    /// Removes the completion registered under `data`. Returns `None` for
    /// unknown tokens or a token registered with a different result type.
    pub(crate) fn take_completion<T: 'static>(data: *mut c_void) -> Option<CompletionFn<T>> {
        let token = ptr_to_token(data);
        let pending = CALLBACK_MANAGER.with_borrow_mut(|manager| manager.pending.remove(&token))?;
        match pending.callback.downcast::<CompletionFn<T>>() {
            Ok(callback) => Some(*callback),
            Err(_) => {
                tracing::error!(token, "completion registered with a different result type");
                None
            }
        }
    }

    pub(crate) fn pending_count(owner: u64) -> usize {
        CALLBACK_MANAGER.with_borrow(|manager| {
            manager
                .pending
                .values()
                .filter(|pending| pending.owner == owner)
                .count()
        })
    }

    // Trampolines

    pub(crate) unsafe extern "C" fn cvoid_result_callback(
        data: *mut c_void,
        result: sys::EDiscordResult,
    ) {
        complete(data, || Error::from_code(result));
    }

    pub(crate) unsafe extern "C" fn cvoid_lobby_callback(
        data: *mut c_void,
        result: sys::EDiscordResult,
        lobby: *mut sys::DiscordLobby,
    ) {
        complete(data, || {
            Error::from_code(result)?;
            // SAFETY: the SDK passes a lobby valid for the duration of the call.
            unsafe { lobby.as_ref() }
                .map(Lobby::from)
                .ok_or(Error::Discord(ResultCode::InternalError))
        });
    }

    pub(crate) unsafe extern "C" fn cvoid_user_callback(
        data: *mut c_void,
        result: sys::EDiscordResult,
        user: *mut sys::DiscordUser,
    ) {
        complete(data, || {
            Error::from_code(result)?;
            unsafe { user.as_ref() }
                .map(User::from)
                .ok_or(Error::Discord(ResultCode::InternalError))
        });
    }

    pub(crate) unsafe extern "C" fn cvoid_oauth2_token_callback(
        data: *mut c_void,
        result: sys::EDiscordResult,
        token: *mut sys::DiscordOAuth2Token,
    ) {
        complete(data, || {
            Error::from_code(result)?;
            unsafe { token.as_ref() }
                .map(OAuth2Token::from)
                .ok_or(Error::Discord(ResultCode::InternalError))
        });
    }

    pub(crate) unsafe extern "C" fn cvoid_ticket_callback(
        data: *mut c_void,
        result: sys::EDiscordResult,
        ticket: *const c_char,
    ) {
        complete(data, || {
            Error::from_code(result)?;
            Ok(unsafe { read_cstring(ticket) })
        });
    }

    pub(crate) unsafe extern "C" fn cvoid_image_callback(
        data: *mut c_void,
        result: sys::EDiscordResult,
        handle: sys::DiscordImageHandle,
    ) {
        complete(data, || {
            Error::from_code(result)?;
            Ok(ImageHandle::from(handle))
        });
    }

    pub(crate) unsafe extern "C" fn cvoid_data_callback(
        data: *mut c_void,
        result: sys::EDiscordResult,
        bytes: *mut u8,
        len: u32,
    ) {
        complete(data, || {
            Error::from_code(result)?;
            Ok(unsafe { read_bytes(bytes, len) })
        });
    }

    pub(crate) unsafe extern "C" fn cvoid_log_hook(
        data: *mut c_void,
        level: sys::EDiscordLogLevel,
        message: *const c_char,
    ) {
        let Some(shared) = CallbackManager::client(data) else {
            return;
        };
        let level = LogLevel::try_from(level).unwrap_or_else(|_| {
            tracing::trace!(level, "unknown sdk log level forwarded as debug");
            LogLevel::Debug
        });
        let message = unsafe { read_cstring(message) };
        shared.log_hook.emit(|hook| hook(level, &message));
    }
}

fn complete<T: 'static>(data: *mut c_void, outcome: impl FnOnce() -> Result<T>) {
    match CallbackManager::take_completion::<T>(data) {
        Some(callback) => callback(outcome()),
        None => tracing::warn!(
            token = ptr_to_token(data),
            "completion for unknown callback"
        ),
    }
}

// Callback type aliases
pub(crate) type CompletionFn<T> = Box<dyn FnOnce(Result<T>)>;
pub(crate) type LogHookFn = dyn FnMut(LogLevel, &str);
