//! English auction house for sequentially minted NFTs, served from a fixed
//! address through an upgradeable proxy.
//!
//! Callers talk to an [`AuctionHouseProxy`](proxy::AuctionHouseProxy) which
//! owns the persistent storage and forwards every instruction to the
//! currently installed [`Implementation`](proxy::Implementation).
mod error;

/// Checks and assertions for validating inputs to the auction house.
pub mod assertions;
/// Events recorded by successful instructions.
pub mod events;
/// Parameters accepted from the frontend in JSON form.
#[cfg(feature = "client")]
pub mod frontend;
/// External collaborators of the auction house and their in-memory
/// implementations.
pub mod host;
/// Instructions that can be forwarded to the auction house.
pub mod instruction;
/// Processor that executes the incoming instructions on the proxy storage.
pub mod processor;
/// Fixed-address dispatcher holding storage and the implementation pointer.
pub mod proxy;
/// Data structures that describe the auction house's current state.
pub mod state;
/// Region layout of the proxy-owned storage.
pub mod storage;

pub use error::AuctionHouseError;
pub use solana_program;

use solana_program::clock::UnixTimestamp;
use solana_program::pubkey::Pubkey;

/// Identifier of an item minted by the token issuance service.
pub type ItemId = u64;

/// Minimum length of a single auction in seconds.
pub const MIN_AUCTION_DURATION: UnixTimestamp = 60; // one minute
/// Maximum length of a single auction in seconds.
pub const MAX_AUCTION_DURATION: UnixTimestamp = 31_557_600; // one year
/// Upper bound of the minimum bid increment (in percent).
pub const MAX_MIN_BID_INCREMENT_PERCENTAGE: u8 = 100;

/// Address denoting the native currency as payment asset.
pub fn native_asset() -> Pubkey {
    Pubkey::default()
}
