use discord_game_sdk_sys as sys;

use crate::types::ImageType;

/// Identifies an image the SDK can fetch, such as a user's avatar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    pub kind: ImageType,
    pub id: i64,
    /// Edge length in pixels: 16, 32, 64, 128, 256, 512 or 1024.
    pub size: u32,
}

impl ImageHandle {
    pub fn user_avatar(user_id: i64, size: u32) -> Self {
        Self {
            kind: ImageType::User,
            id: user_id,
            size,
        }
    }

    pub(crate) fn to_raw(self) -> sys::DiscordImageHandle {
        sys::DiscordImageHandle {
            type_: self.kind.into(),
            id: self.id,
            size: self.size,
        }
    }
}

impl From<sys::DiscordImageHandle> for ImageHandle {
    fn from(raw: sys::DiscordImageHandle) -> Self {
        Self {
            kind: ImageType::from(raw.type_),
            id: raw.id,
            size: raw.size,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    /// Byte length of the RGBA pixel data for these dimensions.
    pub fn rgba_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

impl From<sys::DiscordImageDimensions> for ImageDimensions {
    fn from(raw: sys::DiscordImageDimensions) -> Self {
        Self {
            width: raw.width,
            height: raw.height,
        }
    }
}
