use discord_game_sdk_sys as sys;

use crate::internal::utils::read_fixed;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAchievement {
    pub user_id: i64,
    pub achievement_id: i64,
    pub percent_complete: u8,
    /// ISO 8601 date-time, empty while locked.
    pub unlocked_at: String,
}

impl From<&sys::DiscordUserAchievement> for UserAchievement {
    fn from(raw: &sys::DiscordUserAchievement) -> Self {
        Self {
            user_id: raw.user_id,
            achievement_id: raw.achievement_id,
            percent_complete: raw.percent_complete,
            unlocked_at: read_fixed(&raw.unlocked_at),
        }
    }
}
