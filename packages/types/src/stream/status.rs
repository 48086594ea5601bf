use cosmwasm_schema::cw_serde;

/// Lifecycle of a stream. Transitions are owned by the stream contract;
/// clients only ever read this back from `QueryMsg::Stream`.
#[cw_serde]
pub enum Status {
    /// Stream is created and waiting for the bootstrapping period
    Waiting,
    /// Subscriptions are open but distribution has not started yet
    Bootstrapping,
    Active,
    Ended,
    Finalized(FinalizedStatus),
    Cancelled,
}

#[cw_serde]
pub enum FinalizedStatus {
    ThresholdReached,
    ThresholdNotReached,
}

impl Status {
    pub fn is_cancelled(&self) -> bool {
        self == &Status::Cancelled
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self, Status::Finalized(_))
    }
}
