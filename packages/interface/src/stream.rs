use cascade_types::controller::CreateStreamMsg as InstantiateMsg;
use cascade_types::stream::{ExecuteMsg, MigrateMsg, QueryMsg};
use cw_orch::{interface, prelude::*};

pub const CONTRACT_ID: &str = "cascade_stream";

#[interface(InstantiateMsg, ExecuteMsg, QueryMsg, MigrateMsg, id = CONTRACT_ID)]
pub struct CascadeStreamContract;

impl<Chain> Uploadable for CascadeStreamContract<Chain> {
    /// Return the path to the wasm file corresponding to the contract
    fn wasm(_chain: &ChainInfoOwned) -> WasmPath {
        artifacts_dir_from_workspace!()
            .find_wasm_path(CONTRACT_ID)
            .unwrap()
    }
}
