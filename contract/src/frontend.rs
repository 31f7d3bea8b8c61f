use crate::state::{AuctionConfig, AuctionHouseState};
use crate::{native_asset, ItemId};

use serde::{Deserialize, Serialize};
use solana_program::clock::UnixTimestamp;
use solana_program::pubkey::Pubkey;

use std::str::FromStr;

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FrontendAuctionConfig {
    pub token: String,
    /// Defaults to the native currency.
    pub payment_asset: Option<String>,
    pub treasury: String,
    pub time_buffer: UnixTimestamp,
    pub reserve_price: u64,
    pub min_bid_increment_percentage: u8,
    pub duration: UnixTimestamp,
    pub burn_unsold_items: Option<bool>,
}

fn parse_pubkey(pubkey: &str) -> Result<Pubkey, String> {
    Pubkey::from_str(pubkey).map_err(|e| e.to_string())
}

impl TryFrom<FrontendAuctionConfig> for AuctionConfig {
    type Error = String;
    fn try_from(config: FrontendAuctionConfig) -> Result<Self, Self::Error> {
        let payment_asset = if let Some(asset) = config.payment_asset {
            parse_pubkey(&asset)?
        } else {
            native_asset()
        };
        Ok(Self {
            token: parse_pubkey(&config.token)?,
            payment_asset,
            treasury: parse_pubkey(&config.treasury)?,
            time_buffer: config.time_buffer,
            reserve_price: config.reserve_price,
            min_bid_increment_percentage: config.min_bid_increment_percentage,
            duration: config.duration,
            burn_unsold_items: config.burn_unsold_items.unwrap_or(true),
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FrontendAuction {
    pub item_id: ItemId,
    pub amount: u64,
    pub bidder: Option<String>,
    pub start_time: UnixTimestamp,
    pub end_time: UnixTimestamp,
    pub settled: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FrontendAuctionHouse {
    pub token: String,
    pub payment_asset: String,
    pub treasury: String,
    pub reserve_price: u64,
    pub is_paused: bool,
    pub auction: Option<FrontendAuction>,
}

impl From<&AuctionHouseState> for FrontendAuctionHouse {
    fn from(state: &AuctionHouseState) -> Self {
        Self {
            token: state.config.token.to_string(),
            payment_asset: state.config.payment_asset.to_string(),
            treasury: state.config.treasury.to_string(),
            reserve_price: state.config.reserve_price,
            is_paused: state.is_paused,
            auction: state.auction.map(|auction| FrontendAuction {
                item_id: auction.item_id,
                amount: auction.amount,
                bidder: auction.bidder.map(|bidder| bidder.to_string()),
                start_time: auction.start_time,
                end_time: auction.end_time,
                settled: auction.settled,
            }),
        }
    }
}
