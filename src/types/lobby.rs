use discord_game_sdk_sys as sys;

use crate::internal::utils::read_fixed;
use crate::types::LobbyType;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lobby {
    pub id: i64,
    pub kind: LobbyType,
    pub owner_id: i64,
    pub secret: String,
    pub capacity: u32,
    pub locked: bool,
}

impl From<&sys::DiscordLobby> for Lobby {
    fn from(raw: &sys::DiscordLobby) -> Self {
        Self {
            id: raw.id,
            kind: LobbyType::from(raw.type_),
            owner_id: raw.owner_id,
            secret: read_fixed(&raw.secret),
            capacity: raw.capacity,
            locked: raw.locked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::utils::write_fixed;

    #[test]
    fn decodes_every_field() {
        let mut raw = sys::DiscordLobby {
            id: 7,
            type_: sys::EDiscordLobbyType_DiscordLobbyType_Public,
            owner_id: 9,
            capacity: 16,
            locked: true,
            ..Default::default()
        };
        write_fixed(&mut raw.secret, &"k".repeat(127), "secret").unwrap();

        let lobby = Lobby::from(&raw);
        assert_eq!(lobby.kind, LobbyType::Public);
        assert_eq!(lobby.secret.len(), 127);
        assert_eq!((lobby.id, lobby.owner_id, lobby.capacity), (7, 9, 16));
        assert!(lobby.locked);
    }
}
