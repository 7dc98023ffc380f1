use discord_game_sdk_sys as sys;

use crate::internal::utils::read_fixed;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileStat {
    pub filename: String,
    pub size: u64,
    pub last_modified: u64,
}

impl From<&sys::DiscordFileStat> for FileStat {
    fn from(raw: &sys::DiscordFileStat) -> Self {
        Self {
            filename: read_fixed(&raw.filename),
            size: raw.size,
            last_modified: raw.last_modified,
        }
    }
}
