use num_derive::FromPrimitive;
use solana_program::program_error::ProgramError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
pub enum AuctionHouseError {
    InvalidInstruction = 500,
    Unauthorized = 501,
    NotInitialized = 502,
    AlreadyInitialized = 503,
    NoImplementation = 504,
    AuctionHousePaused = 505,
    NoActiveAuction = 506,
    StaleAuction = 507,
    AuctionExpired = 508,
    AuctionStillActive = 509,
    AlreadySettled = 510,
    BidTooLow = 511,
    InvalidDuration = 512,
    InvalidTimeBuffer = 513,
    InvalidBidIncrement = 514,
    PaymentAssetLocked = 515,
    NothingToWithdraw = 516,
    TokenContractNotEmpty = 517,
    ItemSequenceMismatch = 518,
    StorageOverflow = 519,
    ArithmeticError = 520,
    LastAdminRemoval = 521,
    InvalidRewardRate = 522,
}

impl From<AuctionHouseError> for ProgramError {
    fn from(e: AuctionHouseError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
