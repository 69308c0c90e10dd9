use tracing::{debug, warn};

use super::script::{decode_script, ScriptMatch};
use super::units::qtum_amount_to_eth_value;
use crate::error::TransformError;
use crate::qtum::{GetRawTransactionResponse, GetTransactionResponse, QtumError, QtumRpc};
use crate::types::{add_hex_prefix, EthTransaction, ZERO_ADDRESS};

/// Fetch the wallet record for `txid`, synthesizing one from the raw
/// transaction when the wallet does not know it.
pub async fn fetch_transaction(
    qtum: &dyn QtumRpc,
    txid: &str,
) -> Result<GetTransactionResponse, TransformError> {
    fetch_with_raw(qtum, txid, None).await
}

/// Like [`fetch_transaction`], falling back to `raw` when it is given
/// instead of asking the node for it again.
async fn fetch_with_raw(
    qtum: &dyn QtumRpc,
    txid: &str,
    raw: Option<GetRawTransactionResponse>,
) -> Result<GetTransactionResponse, TransformError> {
    match qtum.get_transaction(txid).await {
        Ok(tx) => Ok(tx),
        Err(QtumError::NotFound(reason)) => {
            warn!("gettransaction {} not in wallet ({}), using raw transaction", txid, reason);
            let raw = match raw {
                Some(raw) => raw,
                None => qtum
                    .get_raw_transaction(txid)
                    .await
                    .map_err(TransformError::upstream("get raw transaction"))?,
            };
            Ok(raw.into())
        }
        Err(e) => Err(TransformError::upstream("get transaction")(e)),
    }
}

/// Build the EVM view of a Qtum transaction.
///
/// `block_number` and `tx_index` come from the caller: `gettransaction`
/// does not report the height, and `blockindex` is wallet-only.
pub async fn translate_transaction(
    qtum: &dyn QtumRpc,
    txid: &str,
    block_number: u64,
    tx_index: u64,
) -> Result<EthTransaction, TransformError> {
    let record = fetch_transaction(qtum, txid).await?;
    build_transaction(qtum, txid, record, block_number, tx_index).await
}

/// [`translate_transaction`] for a caller that already fetched the raw
/// transaction while locating it.
pub async fn translate_with_raw(
    qtum: &dyn QtumRpc,
    txid: &str,
    raw: GetRawTransactionResponse,
    block_number: u64,
    tx_index: u64,
) -> Result<EthTransaction, TransformError> {
    let record = fetch_with_raw(qtum, txid, Some(raw)).await?;
    build_transaction(qtum, txid, record, block_number, tx_index).await
}

async fn build_transaction(
    qtum: &dyn QtumRpc,
    txid: &str,
    record: GetTransactionResponse,
    block_number: u64,
    tx_index: u64,
) -> Result<EthTransaction, TransformError> {
    // Wallet records report sends as negative amounts.
    let value = qtum_amount_to_eth_value(record.amount.abs())?;

    let decoded = qtum
        .decode_raw_transaction(&record.hex)
        .await
        .map_err(TransformError::upstream("decode raw transaction"))?;

    let mut tx = EthTransaction {
        hash: add_hex_prefix(&record.txid),
        nonce: "0x01".to_string(),
        // Mempool transactions have no block.
        block_hash: (!record.blockhash.is_empty())
            .then(|| add_hex_prefix(&record.blockhash)),
        block_number: format!("0x{block_number:x}"),
        transaction_index: format!("0x{tx_index:x}"),
        from: ZERO_ADDRESS.to_string(),
        to: ZERO_ADDRESS.to_string(),
        value,
        // Raw fee, not unit-converted. Negative fees saturate to zero.
        gas_price: format!("0x{:x}", record.fee as u64),
        gas: "0x01".to_string(),
        input: "0x00".to_string(),
    };

    // At most one contract invocation per transaction: the first wins.
    for output in &decoded.vout {
        match decode_script(&output.script_pub_key.asm)? {
            ScriptMatch::NotContract => continue,
            ScriptMatch::Invocation(invocation) => {
                debug!(
                    "tx {} output {} is a contract {:?}",
                    txid, output.n, invocation.op
                );
                if let Some(from) = invocation.from {
                    tx.from = from;
                }
                if let Some(to) = invocation.to {
                    tx.to = to;
                }
                tx.gas = invocation.gas_limit;
                tx.gas_price = invocation.gas_price;
                tx.input = invocation.call_data;
                break;
            }
        }
    }

    Ok(tx)
}
