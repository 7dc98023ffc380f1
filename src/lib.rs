//! Safe bindings to the Discord Game SDK.
//!
//! The native library is loaded at runtime (see [`ClientConfig`]); every
//! domain of the SDK is reached through a manager borrowed from a
//! [`Discord`] client. Nothing runs in the background: asynchronous
//! operations and events are delivered from inside
//! [`Discord::run_callbacks`], on the thread that owns the client.
//!
//! ```no_run
//! use discord_game_sdk::prelude::*;
//!
//! # fn main() -> discord_game_sdk::Result<()> {
//! let discord = Discord::builder(758184866411315221)
//!     .log_level(LogLevel::Info)
//!     .build()?;
//!
//! let activity = Activity::default().with_state("In the menus");
//! discord.activity_manager()?.update_activity(&activity, |result| {
//!     if let Err(err) = result {
//!         eprintln!("activity update failed: {err}");
//!     }
//! })?;
//!
//! loop {
//!     discord.run_callbacks()?;
//!     # break;
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod internal;

mod callback_manager;
mod config;
mod discord;
mod error;
mod event;
mod library;

pub mod managers;
pub mod types;

pub use discord_game_sdk_sys as sys;

pub use config::{
    ACCESS_TOKEN_ENV, CURRENT_BRANCH_ENV, CURRENT_LOCALE_ENV, ClientConfig, DEFAULT_LIBRARY_NAME,
    LIBRARY_PATH_ENV, STORAGE_PATH_ENV,
};
pub use discord::{ClientState, Discord};
pub use error::{Error, Result};
pub use library::SdkLibrary;

pub mod prelude {
    pub use crate::config::ClientConfig;
    pub use crate::discord::{ClientState, Discord};
    pub use crate::error::{Error, Result};
    pub use crate::managers::*;
    pub use crate::types::*;
}
