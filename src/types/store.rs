use discord_game_sdk_sys as sys;

use crate::internal::utils::read_fixed;
use crate::types::{EntitlementType, SkuType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sku {
    pub id: i64,
    pub kind: SkuType,
    pub name: String,
    pub price: SkuPrice,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkuPrice {
    /// Amount in the currency's smallest unit.
    pub amount: u32,
    pub currency: String,
}

impl From<&sys::DiscordSku> for Sku {
    fn from(raw: &sys::DiscordSku) -> Self {
        Self {
            id: raw.id,
            kind: SkuType::from(raw.type_),
            name: read_fixed(&raw.name),
            price: SkuPrice {
                amount: raw.price.amount,
                currency: read_fixed(&raw.price.currency),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entitlement {
    pub id: i64,
    pub kind: EntitlementType,
    pub sku_id: i64,
}

impl From<&sys::DiscordEntitlement> for Entitlement {
    fn from(raw: &sys::DiscordEntitlement) -> Self {
        Self {
            id: raw.id,
            kind: EntitlementType::from(raw.type_),
            sku_id: raw.sku_id,
        }
    }
}
