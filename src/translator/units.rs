//! Conversion between Ethereum hex values and Qtum 8-decimal coin amounts.
//!
//! All scaling is exact big-integer arithmetic on base units; `f64` only
//! appears at the edges where the node's JSON numbers come in and go out.

use std::iter;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Num, ToPrimitive};

use crate::error::TransformError;
use crate::types::{remove_hex_prefix, SendTransactionRequest};

/// Minimum gas price in coin, used when a request carries no gas price.
pub const MIN_GAS_PRICE: f64 = 0.0000004;

/// 10^8: base units per coin.
const COIN: u64 = 100_000_000;

/// Fractional digits of a coin amount.
const DECIMALS: usize = 8;

/// Decode a hex big integer, with or without a `0x` prefix.
pub fn decode_big(value: &str) -> Result<BigUint, TransformError> {
    let digits = remove_hex_prefix(value);
    let decode_err = |reason: &str| TransformError::Decode {
        value: value.to_string(),
        reason: reason.to_string(),
    };
    if digits.is_empty() {
        return Err(decode_err("empty hex number"));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(decode_err("invalid hex digit"));
    }
    BigUint::from_str_radix(digits, 16).map_err(|e| decode_err(&e.to_string()))
}

/// Encode a big integer as `0x`-prefixed lowercase hex without leading zeros.
pub fn encode_big(value: &BigInt) -> String {
    match value.sign() {
        Sign::Minus => format!("-0x{:x}", value.magnitude()),
        _ => format!("0x{:x}", value.magnitude()),
    }
}

/// Convert an Ethereum hex value to a Qtum coin amount (value * 10^-8).
///
/// The empty string is the minimum gas price, not an error.
pub fn eth_value_to_qtum_amount(value: &str) -> Result<f64, TransformError> {
    if value.is_empty() {
        return Ok(MIN_GAS_PRICE);
    }

    let integer = decode_big(value)?;
    let coin = BigUint::from(COIN);
    let whole = (&integer / &coin).to_f64();
    let frac = (&integer % &coin).to_f64();

    match (whole, frac) {
        (Some(whole), Some(frac)) if whole.is_finite() => Ok(whole + frac / COIN as f64),
        _ => Err(TransformError::Conversion(format!(
            "{integer} base units do not fit an f64"
        ))),
    }
}

/// Convert a Qtum coin amount to an Ethereum hex value (amount * 10^8),
/// truncating toward zero.
pub fn qtum_amount_to_eth_value(amount: f64) -> Result<String, TransformError> {
    if !amount.is_finite() {
        return Err(TransformError::Conversion(format!(
            "{amount} is not a finite amount"
        )));
    }

    // Display gives the shortest text that round-trips and never uses an
    // exponent, so 0.29 scales to exactly 29000000 rather than 28999999.
    let text = amount.abs().to_string();
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac: String = frac.chars().chain(iter::repeat('0')).take(DECIMALS).collect();

    let magnitude = BigInt::from_str_radix(&format!("{whole}{frac}"), 10).map_err(|e| {
        TransformError::Conversion(format!("{amount} is not a decimal amount: {e}"))
    })?;
    let value = if amount.is_sign_negative() { -magnitude } else { magnitude };

    Ok(encode_big(&value))
}

/// Gas parameters of an `eth_sendTransaction` call in node terms.
#[derive(Debug, Clone, PartialEq)]
pub struct QtumGas {
    pub gas_limit: Option<BigUint>,
    /// Fixed-point coin amount with exactly 8 fractional digits.
    pub gas_price: String,
}

/// Extract gas limit and gas price from a send-transaction request.
pub fn eth_gas_to_qtum(request: &SendTransactionRequest) -> Result<QtumGas, TransformError> {
    let gas_limit = match request.gas_hex() {
        "" => None,
        gas => Some(decode_big(gas)?),
    };

    let gas_price = eth_value_to_qtum_amount(request.gas_price_hex())?;

    Ok(QtumGas {
        gas_limit,
        gas_price: format!("{gas_price:.8}"),
    })
}
