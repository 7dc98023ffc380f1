//! Error type shared by every binding in the crate.
//!
//! ## Error Hierarchy
//!
//! ```text
//! Error
//! ├── Discord(ResultCode)  - non-Ok status reported by the SDK, verbatim
//! ├── UnknownResult        - status outside the documented range
//! ├── NotInitialized       - client not ready (failed create or shut down)
//! ├── AlreadyRunning       - a second client against the loaded SDK
//! ├── MissingMethod        - null entry in a native method table
//! ├── Library              - SDK artifact or entry point failed to load
//! ├── Nul / TextTooLong    - string marshaling at the boundary
//! └── PayloadTooLarge      - byte buffer longer than a 32-bit length
//! ```

use std::ffi::NulError;

use thiserror::Error;

use crate::types::ResultCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("discord sdk returned {0:?}")]
    Discord(ResultCode),

    #[error("discord sdk returned unknown result code {0}")]
    UnknownResult(i32),

    #[error("discord client is not initialized")]
    NotInitialized,

    #[error("another discord client is already running in this process")]
    AlreadyRunning,

    #[error("native method table has no entry for `{0}`")]
    MissingMethod(&'static str),

    #[error("failed to load the discord game sdk: {0}")]
    Library(#[from] libloading::Error),

    #[error("string contains an interior nul byte: {0}")]
    Nul(#[from] NulError),

    #[error("`{field}` is longer than {max} bytes")]
    TextTooLong { field: &'static str, max: usize },

    #[error("payload of {0} bytes does not fit a 32-bit length")]
    PayloadTooLarge(usize),
}

impl Error {
    /// Translates a native status into `Ok(())` or the matching error.
    pub fn from_code(code: i32) -> Result<()> {
        match ResultCode::try_from(code) {
            Ok(ResultCode::Ok) => Ok(()),
            Ok(result) => Err(Error::Discord(result)),
            Err(_) => Err(Error::UnknownResult(code)),
        }
    }

    /// Convenience method to check if this is a specific SDK result.
    pub fn is_discord_error(&self, code: ResultCode) -> bool {
        matches!(self, Error::Discord(result) if *result == code)
    }

    /// Get the underlying [`ResultCode`] if this error came from the SDK.
    pub fn as_discord_error(&self) -> Option<ResultCode> {
        match self {
            Error::Discord(code) => Some(*code),
            _ => None,
        }
    }
}
