use discord_game_sdk_sys as sys;

use crate::types::{Activity, RelationshipType, Status, User};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relationship {
    pub kind: RelationshipType,
    pub user: User,
    pub presence: Presence,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presence {
    pub status: Status,
    pub activity: Activity,
}

impl From<&sys::DiscordRelationship> for Relationship {
    fn from(raw: &sys::DiscordRelationship) -> Self {
        Self {
            kind: RelationshipType::from(raw.type_),
            user: User::from(&raw.user),
            presence: Presence {
                status: Status::from(raw.presence.status),
                activity: Activity::from(&raw.presence.activity),
            },
        }
    }
}
