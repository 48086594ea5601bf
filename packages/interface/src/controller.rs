use cascade_types::controller::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use cw_orch::{interface, prelude::*};

pub const CONTRACT_ID: &str = "cascade_controller";

#[interface(InstantiateMsg, ExecuteMsg, QueryMsg, MigrateMsg, id = CONTRACT_ID)]
pub struct CascadeControllerContract;

impl<Chain> Uploadable for CascadeControllerContract<Chain> {
    /// Return the path to the wasm file corresponding to the contract
    fn wasm(_chain: &ChainInfoOwned) -> WasmPath {
        artifacts_dir_from_workspace!()
            .find_wasm_path(CONTRACT_ID)
            .unwrap()
    }
}
