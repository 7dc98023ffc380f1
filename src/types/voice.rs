use discord_game_sdk_sys as sys;

use crate::error::Result;
use crate::internal::utils::{read_fixed, write_fixed};
use crate::types::InputModeType;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputMode {
    pub kind: InputModeType,
    /// Push-to-talk shortcut, such as `"ctrl+m"`. Ignored for voice activity.
    pub shortcut: String,
}

impl InputMode {
    pub(crate) fn to_raw(&self) -> Result<sys::DiscordInputMode> {
        let mut raw = sys::DiscordInputMode {
            type_: self.kind.into(),
            ..Default::default()
        };
        write_fixed(&mut raw.shortcut, &self.shortcut, "shortcut")?;
        Ok(raw)
    }
}

impl From<&sys::DiscordInputMode> for InputMode {
    fn from(raw: &sys::DiscordInputMode) -> Self {
        Self {
            kind: InputModeType::from(raw.type_),
            shortcut: read_fixed(&raw.shortcut),
        }
    }
}
