use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const MAX_CAMPAIGN_NAME_LEN: usize = 50;

#[cw_serde]
pub struct Campaign {
    pub name: String,
    pub description: String,
    pub total_funds: u128,
    pub active: bool,
    pub created_at: u64,
    pub creator: Addr,
}

#[cw_serde]
pub struct RefundRecord {
    pub amount: u128,
    pub requested: bool,
    pub approved: bool,
}

pub const ADMIN: Item<Addr> = Item::new("admin");
pub const PAUSED: Item<bool> = Item::new("paused");
pub const CAMPAIGN_COUNT: Item<u64> = Item::new("campaign_count");
pub const DONATION_DENOM: Item<String> = Item::new("donation_denom");
pub const CAMPAIGNS: Map<u64, Campaign> = Map::new("campaigns");
// Cumulative total ever donated by (donor, campaign); never reduced by refunds.
pub const CONTRIBUTIONS: Map<(&Addr, u64), u128> = Map::new("contributions");
pub const REFUNDS: Map<(&Addr, u64), RefundRecord> = Map::new("refunds");
