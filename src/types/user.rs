use discord_game_sdk_sys as sys;

use crate::internal::utils::read_fixed;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub discriminator: String,
    /// Avatar hash, empty when the user has none.
    pub avatar: String,
    pub bot: bool,
}

impl From<&sys::DiscordUser> for User {
    fn from(raw: &sys::DiscordUser) -> Self {
        Self {
            id: raw.id,
            username: read_fixed(&raw.username),
            discriminator: read_fixed(&raw.discriminator),
            avatar: read_fixed(&raw.avatar),
            bot: raw.bot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::utils::write_fixed;

    #[test]
    fn maximum_length_fields_survive_the_boundary() {
        let mut raw = sys::DiscordUser {
            id: 53908232506183680,
            bot: true,
            ..Default::default()
        };
        write_fixed(&mut raw.username, &"u".repeat(255), "username").unwrap();
        write_fixed(&mut raw.discriminator, "1234567", "discriminator").unwrap();
        write_fixed(&mut raw.avatar, &"a".repeat(127), "avatar").unwrap();

        let user = User::from(&raw);
        assert_eq!(user.id, 53908232506183680);
        assert_eq!(user.username.len(), 255);
        assert_eq!(user.discriminator, "1234567");
        assert_eq!(user.avatar.len(), 127);
        assert!(user.bot);
    }

    #[test]
    fn oversized_discriminator_is_rejected() {
        let mut raw = sys::DiscordUser::default();
        assert!(write_fixed(&mut raw.discriminator, "12345678", "discriminator").is_err());
    }
}
