use cascade_types::controller::{CreatePool, Params};
use cascade_types::stream::{
    AveragePriceResponse, ExecuteMsg, LatestStreamedPriceResponse, PositionResponse,
    PositionsResponse, QueryMsg, StreamResponse,
};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, CosmosMsg, QuerierWrapper, StdResult, Uint256, WasmMsg,
};

/// StreamContract is a wrapper around Addr that provides helpers
/// for composing messages to and querying a single stream contract.
#[cw_serde]
pub struct StreamContract(pub Addr);

impl StreamContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    /// Serializes an execute message targeting this stream. The message is
    /// not sent, only composed.
    pub fn call(&self, msg: ExecuteMsg, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        let msg = to_json_binary(&msg)?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds,
        }
        .into())
    }

    pub fn sync_stream(&self) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::SyncStream {}, vec![])
    }

    /// Funds are the in-denom amount the position is credited with.
    pub fn subscribe(&self, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::Subscribe {}, funds)
    }

    pub fn withdraw(&self, cap: Option<Uint256>) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::Withdraw { cap }, vec![])
    }

    pub fn sync_position(&self) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::SyncPosition {}, vec![])
    }

    pub fn finalize_stream(
        &self,
        new_treasury: Option<String>,
        create_pool: Option<CreatePool>,
        salt: Option<Binary>,
    ) -> StdResult<CosmosMsg> {
        self.call(
            ExecuteMsg::FinalizeStream {
                new_treasury,
                create_pool,
                salt,
            },
            vec![],
        )
    }

    pub fn exit_stream(&self, salt: Option<Binary>) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::ExitStream { salt }, vec![])
    }

    pub fn cancel_stream(&self) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::CancelStream {}, vec![])
    }

    pub fn stream_admin_cancel(&self) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::StreamAdminCancel {}, vec![])
    }

    pub fn params(&self, querier: &QuerierWrapper) -> StdResult<Params> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::Params {})
    }

    pub fn stream(&self, querier: &QuerierWrapper) -> StdResult<StreamResponse> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::Stream {})
    }

    pub fn position(
        &self,
        querier: &QuerierWrapper,
        owner: String,
    ) -> StdResult<PositionResponse> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::Position { owner })
    }

    pub fn list_positions(
        &self,
        querier: &QuerierWrapper,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> StdResult<PositionsResponse> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::ListPositions { start_after, limit })
    }

    pub fn average_price(&self, querier: &QuerierWrapper) -> StdResult<AveragePriceResponse> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::AveragePrice {})
    }

    pub fn last_streamed_price(
        &self,
        querier: &QuerierWrapper,
    ) -> StdResult<LatestStreamedPriceResponse> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::LastStreamedPrice {})
    }

    pub fn threshold(&self, querier: &QuerierWrapper) -> StdResult<Uint256> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::Threshold {})
    }

    pub fn tos(&self, querier: &QuerierWrapper, addr: Option<String>) -> StdResult<String> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::ToS { addr })
    }

    pub fn creator_vesting(&self, querier: &QuerierWrapper) -> StdResult<Addr> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::CreatorVesting {})
    }

    pub fn subscriber_vesting(&self, querier: &QuerierWrapper, addr: String) -> StdResult<Addr> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::SubscriberVesting { addr })
    }
}
