use cascade_types::controller::{
    CreateStreamMsg, ExecuteMsg, Params, QueryMsg, StreamsResponse,
};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Coin, CosmosMsg, Decimal256, QuerierWrapper, StdResult, WasmMsg,
};

/// ControllerContract is a wrapper around Addr that provides helpers
/// for composing messages to and querying the controller contract.
#[cw_serde]
pub struct ControllerContract(pub Addr);

impl ControllerContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    /// Serializes an execute message targeting this controller. The message is
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

    #[allow(clippy::too_many_arguments)]
    pub fn update_params(
        &self,
        min_stream_duration: Option<u64>,
        min_bootstrapping_duration: Option<u64>,
        min_waiting_duration: Option<u64>,
        stream_creation_fee: Option<Coin>,
        fee_collector: Option<String>,
        accepted_in_denoms: Option<Vec<String>>,
        exit_fee_percent: Option<Decimal256>,
    ) -> StdResult<CosmosMsg> {
        self.call(
            ExecuteMsg::UpdateParams {
                min_stream_duration,
                min_bootstrapping_duration,
                min_waiting_duration,
                stream_creation_fee,
                fee_collector,
                accepted_in_denoms,
                exit_fee_percent,
            },
            vec![],
        )
    }

    /// Funds must cover the out asset plus the stream creation fee.
    pub fn create_stream(&self, msg: CreateStreamMsg, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        self.call(
            ExecuteMsg::CreateStream { msg: Box::new(msg) },
            funds,
        )
    }

    pub fn freeze(&self) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::Freeze {}, vec![])
    }

    pub fn unfreeze(&self) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::Unfreeze {}, vec![])
    }

    pub fn params(&self, querier: &QuerierWrapper) -> StdResult<Params> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::Params {})
    }

    pub fn freezestate(&self, querier: &QuerierWrapper) -> StdResult<bool> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::Freezestate {})
    }

    pub fn last_stream_id(&self, querier: &QuerierWrapper) -> StdResult<u64> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::LastStreamId {})
    }

    pub fn list_streams(
        &self,
        querier: &QuerierWrapper,
        start_after: Option<u64>,
        limit: Option<u32>,
    ) -> StdResult<StreamsResponse> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::ListStreams { start_after, limit })
    }
}
