use crate::controller::CreatePool;
use crate::stream::Status;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Coin, Decimal256, Timestamp, Uint256};

/// The stream contract is instantiated by the controller from the creation
/// message, so the shapes are shared.
pub use crate::controller::CreateStreamMsg as InstantiateMsg;

#[cw_serde]
#[cfg_attr(feature = "interface", derive(cw_orch::ExecuteFns))]
pub enum ExecuteMsg {
    /// SyncStream synchronizes stream and distribution to reflect the current state of the stream.
    SyncStream {},
    #[cfg_attr(feature = "interface", cw_orch(payable))]
    Subscribe {},
    /// Withdraw unspent tokens in balance.
    Withdraw {
        cap: Option<Uint256>,
    },
    /// SyncPosition syncs the position index of the sender to the current state of the stream.
    SyncPosition {},
    /// FinalizeStream cleans up the stream and sends income (earned tokens_in) to the
    /// treasury. Returns error if called before the stream ends. Anyone can
    /// call this method.
    FinalizeStream {
        new_treasury: Option<String>,
        create_pool: Option<CreatePool>,
        /// Salt is required for vested address generation
        salt: Option<Binary>,
    },
    /// ExitStream withdraws (by a user who subscribed to the stream) purchased
    /// tokens_out from the pool and remaining tokens_in. Must be called after
    /// the stream ends.
    ExitStream {
        /// Salt is required for vested address generation
        salt: Option<Binary>,
    },
    CancelStream {},
    StreamAdminCancel {},
}

#[cw_serde]
#[derive(QueryResponses)]
#[cfg_attr(feature = "interface", derive(cw_orch::QueryFns))]
pub enum QueryMsg {
    /// Returns the controller parameters snapshotted at stream creation.
    #[returns(crate::controller::Params)]
    Params {},
    /// Returns a stream's current state.
    #[returns(StreamResponse)]
    Stream {},
    /// Returns current state of a position.
    #[returns(PositionResponse)]
    Position { owner: String },
    /// Returns list of positions paginated by `start_after` and `limit`.
    #[returns(PositionsResponse)]
    ListPositions {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Returns average price of a stream sale.
    #[returns(AveragePriceResponse)]
    AveragePrice {},
    /// Returns currently streaming price of a sale.
    #[returns(LatestStreamedPriceResponse)]
    LastStreamedPrice {},
    #[returns(Uint256)]
    Threshold {},
    /// Returns the terms of service version, either the stream's or the one
    /// accepted by `addr`.
    #[returns(String)]
    ToS { addr: Option<String> },
    /// Returns the vesting contract address instantiated for the creator.
    #[returns(Addr)]
    CreatorVesting {},
    /// Returns the vesting contract address instantiated for a subscriber.
    #[returns(Addr)]
    SubscriberVesting { addr: String },
}

#[cw_serde]
pub struct StreamResponse {
    /// Address of the treasury where the stream earnings will be sent.
    pub treasury: String,
    /// URL of the stream.
    pub url: Option<String>,
    /// Proportional distribution variable to calculate the distribution of in token_out to buyers.
    pub dist_index: Decimal256,
    /// Last updated time of stream.
    pub last_updated: Timestamp,

    pub out_asset: Coin,
    /// Total number of remaining out tokens at the time of update.
    pub out_remaining: Uint256,
    /// Denom of the `token_in`.
    pub in_denom: String,
    /// Total number of `token_in` on the buy side at latest state.
    pub in_supply: Uint256,
    /// Total number of `token_in` spent at latest state.
    pub spent_in: Uint256,
    /// Total number of shares minted.
    pub shares: Uint256,
    /// Start time when the token emission starts. in nanos.
    pub start_time: Timestamp,
    /// End time when the token emission ends.
    pub end_time: Timestamp,
    /// Price at when latest distribution is triggered.
    pub current_streamed_price: Decimal256,
    /// Status of the stream.
    pub status: Status,
    /// Address of the stream admin.
    pub stream_admin: String,
}

#[cw_serde]
pub struct PositionResponse {
    /// Creator of the position.
    pub owner: String,
    /// Current amount of tokens in buy pool
    pub in_balance: Uint256,
    pub shares: Uint256,
    // Index is used to calculate the distribution a position has
    pub index: Decimal256,
    // Last_updated is the time when the position was last updated
    pub last_updated: Timestamp,
    // Total amount of `token_out` purchased in tokens at latest calculation
    pub purchased: Uint256,
    // Pending purchased accumulates purchases after decimal truncation
    pub pending_purchase: Decimal256,
    // Total amount of `token_in` spent tokens at latest calculation
    pub spent: Uint256,
    // Exit date of the position
    pub exit_date: Timestamp,
}

#[cw_serde]
pub struct PositionsResponse {
    pub positions: Vec<PositionResponse>,
}

#[cw_serde]
pub struct AveragePriceResponse {
    pub average_price: Decimal256,
}

#[cw_serde]
pub struct LatestStreamedPriceResponse {
    pub current_streamed_price: Decimal256,
}

#[cw_serde]
pub struct MigrateMsg {}
