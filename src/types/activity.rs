use discord_game_sdk_sys as sys;

use crate::error::Result;
use crate::internal::utils::{read_fixed, write_fixed};
use crate::types::ActivityType;

/// Rich presence shown on the user's profile.
///
/// Text fields hold at most 127 bytes of UTF-8; longer values are rejected when
/// the activity is sent rather than truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activity {
    pub kind: ActivityType,
    pub application_id: i64,
    pub name: String,
    pub state: String,
    pub details: String,
    pub timestamps: ActivityTimestamps,
    pub assets: ActivityAssets,
    pub party: ActivityParty,
    pub secrets: ActivitySecrets,
    pub instance: bool,
}

/// Unix timestamps in seconds; zero leaves the bound unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityTimestamps {
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityAssets {
    pub large_image: String,
    pub large_text: String,
    pub small_image: String,
    pub small_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityParty {
    pub id: String,
    pub size: PartySize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartySize {
    pub current_size: i32,
    pub max_size: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitySecrets {
    pub match_: String,
    pub join: String,
    pub spectate: String,
}

impl Activity {
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub(crate) fn to_raw(&self) -> Result<sys::DiscordActivity> {
        let mut raw = sys::DiscordActivity {
            type_: self.kind.into(),
            application_id: self.application_id,
            instance: self.instance,
            ..Default::default()
        };
        write_fixed(&mut raw.name, &self.name, "name")?;
        write_fixed(&mut raw.state, &self.state, "state")?;
        write_fixed(&mut raw.details, &self.details, "details")?;

        raw.timestamps.start = self.timestamps.start;
        raw.timestamps.end = self.timestamps.end;

        let assets = &self.assets;
        write_fixed(
            &mut raw.assets.large_image,
            &assets.large_image,
            "large_image",
        )?;
        write_fixed(&mut raw.assets.large_text, &assets.large_text, "large_text")?;
        write_fixed(
            &mut raw.assets.small_image,
            &assets.small_image,
            "small_image",
        )?;
        write_fixed(&mut raw.assets.small_text, &assets.small_text, "small_text")?;

        write_fixed(&mut raw.party.id, &self.party.id, "party.id")?;
        raw.party.size.current_size = self.party.size.current_size;
        raw.party.size.max_size = self.party.size.max_size;

        write_fixed(
            &mut raw.secrets.match_,
            &self.secrets.match_,
            "secrets.match",
        )?;
        write_fixed(&mut raw.secrets.join, &self.secrets.join, "secrets.join")?;
        write_fixed(
            &mut raw.secrets.spectate,
            &self.secrets.spectate,
            "secrets.spectate",
        )?;
        Ok(raw)
    }
}

impl From<&sys::DiscordActivity> for Activity {
    fn from(raw: &sys::DiscordActivity) -> Self {
        Self {
            kind: ActivityType::from(raw.type_),
            application_id: raw.application_id,
            name: read_fixed(&raw.name),
            state: read_fixed(&raw.state),
            details: read_fixed(&raw.details),
            timestamps: ActivityTimestamps {
                start: raw.timestamps.start,
                end: raw.timestamps.end,
            },
            assets: ActivityAssets {
                large_image: read_fixed(&raw.assets.large_image),
                large_text: read_fixed(&raw.assets.large_text),
                small_image: read_fixed(&raw.assets.small_image),
                small_text: read_fixed(&raw.assets.small_text),
            },
            party: ActivityParty {
                id: read_fixed(&raw.party.id),
                size: PartySize {
                    current_size: raw.party.size.current_size,
                    max_size: raw.party.size.max_size,
                },
            },
            secrets: ActivitySecrets {
                match_: read_fixed(&raw.secrets.match_),
                join: read_fixed(&raw.secrets.join),
                spectate: read_fixed(&raw.secrets.spectate),
            },
            instance: raw.instance,
        }
    }
}
