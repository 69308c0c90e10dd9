pub mod script;
pub mod tx;
pub mod units;

pub use script::{decode_script, ContractInvocation, ContractOp, ScriptMatch};
pub use tx::{fetch_transaction, translate_transaction, translate_with_raw};
pub use units::{
    eth_gas_to_qtum, eth_value_to_qtum_amount, qtum_amount_to_eth_value, QtumGas, MIN_GAS_PRICE,
};
