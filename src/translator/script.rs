//! Contract invocation parsing for Qtum output scripts.
//!
//! The node's disassembly (`scriptPubKey.asm`) of a contract output looks like
//!
//! ```text
//! 4 25548 40 a9059cbb...0100 6b22910b1e302cf74803ffd1691c2ecb858d3712 OP_CALL
//! 4 6721975 100 6060604052...0029 OP_CREATE
//! ```
//!
//! optionally preceded by an explicit sender:
//!
//! ```text
//! 1 81e872329e767a0487de7e970992b13b644f1f4f 6b4830...8ce4 OP_SENDER 4 55000 40 a9059cbb... af1ae4e29253ba755c723bca25e883b8deb777b8 OP_CALL
//! ```
//!
//! Pushes of four bytes or fewer are printed as decimal script numbers, so
//! a bare selector call such as `totalSupply()` shows its call data as
//! `-1561138712` rather than `18160ddd`.

use crate::error::TransformError;
use crate::types::add_hex_prefix;

const OP_CALL: &str = "OP_CALL";
const OP_CREATE: &str = "OP_CREATE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractOp {
    Call,
    Create,
}

/// Sender, gas and call data of a contract call or creation.
/// Every field is `0x`-prefixed hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractInvocation {
    pub op: ContractOp,
    /// Present only when the script carries `OP_SENDER`.
    pub from: Option<String>,
    /// Destination contract; `None` for creations.
    pub to: Option<String>,
    pub gas_limit: String,
    pub gas_price: String,
    pub call_data: String,
}

/// Outcome of inspecting one output script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptMatch {
    Invocation(ContractInvocation),
    NotContract,
}

/// The contract opcode ending `tokens`, if any.
pub fn contract_op(tokens: &[&str]) -> Option<ContractOp> {
    match tokens.last() {
        Some(&OP_CALL) => Some(ContractOp::Call),
        Some(&OP_CREATE) => Some(ContractOp::Create),
        _ => None,
    }
}

/// Decode a space-separated script disassembly.
pub fn decode_script(asm: &str) -> Result<ScriptMatch, TransformError> {
    let tokens: Vec<&str> = asm.split_whitespace().collect();
    decode_script_tokens(&tokens)
}

/// Decode script tokens. Scripts not ending in `OP_CALL`/`OP_CREATE` are
/// [`ScriptMatch::NotContract`]; ones that do but have the wrong shape fail.
pub fn decode_script_tokens(tokens: &[&str]) -> Result<ScriptMatch, TransformError> {
    let Some(op) = contract_op(tokens) else {
        return Ok(ScriptMatch::NotContract);
    };

    let (from, body) = match tokens {
        [_, sender, _, "OP_SENDER", rest @ ..] => (Some(add_hex_prefix(sender)), rest),
        _ => (None, tokens),
    };

    let (to, gas_limit, gas_price, call_data) = match (op, body) {
        (ContractOp::Call, [_, gas_limit, gas_price, data, contract, _]) => {
            (Some(add_hex_prefix(contract)), gas_limit, gas_price, data)
        }
        (ContractOp::Create, [_, gas_limit, gas_price, data, _]) => {
            (None, gas_limit, gas_price, data)
        }
        _ => {
            return Err(TransformError::MalformedScript(format!(
                "unexpected {} token layout ({} tokens): {}",
                tokens[tokens.len() - 1],
                tokens.len(),
                tokens.join(" ")
            )))
        }
    };

    Ok(ScriptMatch::Invocation(ContractInvocation {
        op,
        from,
        to,
        gas_limit: script_number_to_hex(gas_limit)?,
        gas_price: script_number_to_hex(gas_price)?,
        call_data: call_data_to_hex(call_data)?,
    }))
}

/// Gas values appear as decimal script numbers in the disassembly.
fn script_number_to_hex(token: &str) -> Result<String, TransformError> {
    token
        .parse::<u64>()
        .map(|n| format!("0x{n:x}"))
        .map_err(|e| TransformError::MalformedScript(format!("bad gas value {token:?}: {e}")))
}

/// Call data is hex, or a script number when the push was four bytes or
/// fewer. Script numbers are read back as four little-endian bytes with the
/// sign in the top bit; `0` is the empty push.
fn call_data_to_hex(token: &str) -> Result<String, TransformError> {
    if let Ok(n) = token.parse::<i64>() {
        if n == 0 {
            return Ok("0x".to_string());
        }
        if n.unsigned_abs() <= i32::MAX as u64 {
            let mut bytes = (n.unsigned_abs() as u32).to_le_bytes();
            if n < 0 {
                bytes[3] |= 0x80;
            }
            return Ok(format!("0x{}", hex::encode(bytes)));
        }
    }

    if token.len() % 2 == 0 && token.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(add_hex_prefix(token))
    } else {
        Err(TransformError::MalformedScript(format!(
            "call data is neither hex nor a script number: {token:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALL: &str = "4 25548 40 a9059cbb0000000000000000000000000000000000000000000000000000000000000001 6b22910b1e302cf74803ffd1691c2ecb858d3712 OP_CALL";
    const CALL_SENDER: &str = "1 81e872329e767a0487de7e970992b13b644f1f4f 6b483045022100b83ef90bc808569fb00e29a0f6209d32c1795207c95a554c091401ac8fa8ab920220694b7ec801efd2facea2026d12e8eb5de7689c637f539a620f24c6da8fff235f0121021104b7672c2e08fe321f1bfaffc3768c2777adeedb857b4313ed9d2f15fc8ce4 OP_SENDER 4 55000 40 a9059cbb000000000000000000000000710e94d7f8a5d7a1e5be52bd783370d6e3008a2a0000000000000000000000000000000000000000000000000000000005f5e100 af1ae4e29253ba755c723bca25e883b8deb777b8 OP_CALL";
    const CREATE: &str = "4 6721975 100 6060604052 OP_CREATE";
    const CREATE_SENDER: &str = "1 7926223070547d2d15b2ef5e7383e541c338ffe9 69463043021f3ba540f52e0bae0c608c3d7135424fb683c77ee03217fcfe0af175c586aadc OP_SENDER 4 2500000 40 608060405234801561001057600080fd5b50 OP_CREATE";

    fn invocation(asm: &str) -> ContractInvocation {
        match decode_script(asm).unwrap() {
            ScriptMatch::Invocation(inv) => inv,
            ScriptMatch::NotContract => panic!("expected an invocation for {asm}"),
        }
    }

    #[test]
    fn final_token_selects_op() {
        assert_eq!(contract_op(&["a", "OP_CALL"]), Some(ContractOp::Call));
        assert_eq!(contract_op(&["OP_CREATE"]), Some(ContractOp::Create));
        assert_eq!(contract_op(&["OP_CALL", "OP_DROP"]), None);
        assert_eq!(contract_op(&[]), None);
    }

    #[test]
    fn plain_call() {
        let inv = invocation(CALL);
        assert_eq!(inv.op, ContractOp::Call);
        assert_eq!(inv.from, None);
        assert_eq!(
            inv.to.as_deref(),
            Some("0x6b22910b1e302cf74803ffd1691c2ecb858d3712")
        );
        assert_eq!(inv.gas_limit, "0x63cc");
        assert_eq!(inv.gas_price, "0x28");
        assert!(inv.call_data.starts_with("0xa9059cbb"));
    }

    #[test]
    fn call_with_sender() {
        let inv = invocation(CALL_SENDER);
        assert_eq!(inv.op, ContractOp::Call);
        assert_eq!(
            inv.from.as_deref(),
            Some("0x81e872329e767a0487de7e970992b13b644f1f4f")
        );
        assert_eq!(
            inv.to.as_deref(),
            Some("0xaf1ae4e29253ba755c723bca25e883b8deb777b8")
        );
        assert_eq!(inv.gas_limit, "0xd6d8");
        assert_eq!(inv.gas_price, "0x28");
        assert!(inv.call_data.ends_with("05f5e100"));
    }

    #[test]
    fn plain_create() {
        let inv = invocation(CREATE);
        assert_eq!(inv.op, ContractOp::Create);
        assert_eq!(inv.from, None);
        assert_eq!(inv.to, None);
        assert_eq!(inv.gas_limit, "0x6691b7");
        assert_eq!(inv.gas_price, "0x64");
        assert_eq!(inv.call_data, "0x6060604052");
    }

    #[test]
    fn create_with_sender() {
        let inv = invocation(CREATE_SENDER);
        assert_eq!(inv.op, ContractOp::Create);
        assert_eq!(
            inv.from.as_deref(),
            Some("0x7926223070547d2d15b2ef5e7383e541c338ffe9")
        );
        assert_eq!(inv.to, None);
        assert_eq!(inv.gas_limit, "0x2625a0");
        assert_eq!(inv.call_data, "0x608060405234801561001057600080fd5b50");
    }

    #[test]
    fn non_contract_scripts_are_skipped() {
        let p2pkh = "OP_DUP OP_HASH160 dbf0e2ee8a9f3ab4f7d72b3a5d8a1c1fd5d4c6a0 OP_EQUALVERIFY OP_CHECKSIG";
        assert_eq!(decode_script(p2pkh).unwrap(), ScriptMatch::NotContract);
        assert_eq!(decode_script("").unwrap(), ScriptMatch::NotContract);
    }

    #[test]
    fn wrong_token_count_is_malformed() {
        for asm in [
            "25548 40 a9059cbb OP_CALL",
            "4 25548 40 a9059cbb 6b22 extra OP_CALL",
            "4 40 6060 OP_CREATE",
            "OP_CALL",
            "1 81e8 6b48 OP_SENDER 4 55000 40 a905 OP_CALL",
        ] {
            let err = decode_script(asm).unwrap_err();
            assert!(matches!(err, TransformError::MalformedScript(_)), "{asm}");
        }
    }

    #[test]
    fn short_call_data_is_read_from_script_number() {
        let total_supply = "4 250000 40 -1561138712 6b22910b1e302cf74803ffd1691c2ecb858d3712 OP_CALL";
        assert_eq!(invocation(total_supply).call_data, "0x18160ddd");

        let balance_of = "4 250000 40 830644336 6b22910b1e302cf74803ffd1691c2ecb858d3712 OP_CALL";
        assert_eq!(invocation(balance_of).call_data, "0x70a08231");

        let fallback = "4 250000 40 0 6b22910b1e302cf74803ffd1691c2ecb858d3712 OP_CALL";
        assert_eq!(invocation(fallback).call_data, "0x");
    }

    #[test]
    fn non_hex_call_data_is_malformed() {
        for data in ["a9059cbbzz", "abc", "-99999999999"] {
            let asm = format!("4 250000 40 {data} 6b22910b1e302cf74803ffd1691c2ecb858d3712 OP_CALL");
            let err = decode_script(&asm).unwrap_err();
            assert!(matches!(err, TransformError::MalformedScript(_)), "{data}");
        }
    }

    #[test]
    fn non_numeric_gas_is_malformed() {
        let err = decode_script("4 ff 40 a9059cbb 6b22910b OP_CALL").unwrap_err();
        assert!(matches!(err, TransformError::MalformedScript(_)));
    }
}
