use serde::{Deserialize, Serialize};

/// JSON-RPC request to the Qtum node
#[derive(Debug, Serialize)]
pub struct QtumRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Vec<serde_json::Value>,
}

/// JSON-RPC response from the Qtum node
#[derive(Debug, Deserialize)]
pub struct QtumRpcResponse {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<QtumRpcError>,
}

/// JSON-RPC error from the Qtum node
#[derive(Debug, Deserialize)]
pub struct QtumRpcError {
    pub code: i64,
    pub message: String,
}

/// Response from gettransaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetTransactionResponse {
    pub amount: f64,
    #[serde(default)]
    pub fee: f64,
    #[serde(default)]
    pub confirmations: i64,
    #[serde(default)]
    pub blockhash: String,
    #[serde(default)]
    pub blockindex: u64,
    #[serde(default)]
    pub blocktime: u64,
    pub txid: String,
    #[serde(default)]
    pub time: u64,
    #[serde(default)]
    pub timereceived: u64,
    #[serde(rename = "bip125-replaceable", default)]
    pub bip125_replaceable: String,
    #[serde(default)]
    pub details: Vec<TransactionDetail>,
    pub hex: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetail {
    #[serde(default)]
    pub address: String,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub vout: u32,
    #[serde(default)]
    pub fee: Option<f64>,
    #[serde(default)]
    pub abandoned: Option<bool>,
}

/// Response from getrawtransaction (verbose)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRawTransactionResponse {
    pub txid: String,
    pub hex: String,
    #[serde(default)]
    pub confirmations: i64,
    #[serde(default)]
    pub blockhash: String,
    #[serde(default)]
    pub blocktime: u64,
    #[serde(default)]
    pub time: u64,
}

impl From<GetRawTransactionResponse> for GetTransactionResponse {
    /// Synthesize a wallet record for a transaction the wallet does not own.
    /// Wallet-only fields stay zeroed.
    fn from(raw: GetRawTransactionResponse) -> Self {
        Self {
            amount: 0.0,
            fee: 0.0,
            confirmations: raw.confirmations,
            blockhash: raw.blockhash,
            blocktime: raw.blocktime,
            txid: raw.txid,
            time: raw.time,
            hex: raw.hex,
            ..Default::default()
        }
    }
}

/// Response from decoderawtransaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecodedRawTransaction {
    pub txid: String,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub locktime: u64,
    #[serde(default)]
    pub vout: Vec<DecodedOutput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedOutput {
    #[serde(default)]
    pub value: f64,
    pub n: u32,
    pub script_pub_key: ScriptPubKey,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptPubKey {
    /// Space-separated disassembly of the output script.
    pub asm: String,
    #[serde(default)]
    pub hex: String,
    #[serde(rename = "type", default)]
    pub script_type: String,
    #[serde(default)]
    pub addresses: Vec<String>,
}

/// Response from getblockchaininfo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockchainInfo {
    pub chain: String,
    pub blocks: u64,
    #[serde(default)]
    pub headers: u64,
    #[serde(default)]
    pub bestblockhash: String,
}

/// Response from getblock at verbosity 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockResponse {
    pub hash: String,
    pub height: u64,
    #[serde(default)]
    pub tx: Vec<String>,
}

/// Response from getnetworkinfo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInfo {
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub subversion: String,
    pub networkactive: bool,
    #[serde(default)]
    pub connections: u64,
}
