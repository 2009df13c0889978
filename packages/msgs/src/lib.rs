pub mod config;
pub mod error;
pub mod msg;
pub mod pop;
pub mod registry;
mod validate;

use bech32::{FromBase32, Variant};
use cosmwasm_std::CanonicalAddr;

pub use config::ValidationConfig;
pub use registry::{BtcStakingMsg, MsgKind, MsgRegistry};
pub use validate::{
    BitcoinTxVerifier, BtcTxVerifier, Validate, ValidationContext, MAX_TIME_LOCK,
};

use error::StakingMsgError;

pub type Bytes = Vec<u8>;

/// new_canonical_addr converts a bech32 address to a canonical address
/// ported from cosmwasm-std/testing/mock.rs
pub fn new_canonical_addr(addr: &str, prefix: &str) -> Result<CanonicalAddr, StakingMsgError> {
    // decode bech32 address
    let (decoded_prefix, decoded_data, variant) = bech32::decode(addr)
        .map_err(|e| StakingMsgError::InvalidAddress(format!("{addr}: {e}")))?;
    // check bech32 prefix
    if decoded_prefix != prefix {
        return Err(StakingMsgError::InvalidAddress(format!(
            "{addr}: wrong bech32 prefix, expected {prefix}"
        )));
    }
    // check bech32 variant
    if variant == Variant::Bech32m {
        return Err(StakingMsgError::InvalidAddress(format!(
            "{addr}: wrong bech32 variant"
        )));
    }
    // check bech32 data
    let bytes = Vec::<u8>::from_base32(&decoded_data)
        .map_err(|_| StakingMsgError::InvalidAddress(format!("{addr}: invalid bech32 data")))?;
    if bytes.is_empty() || bytes.len() > 255 {
        return Err(StakingMsgError::InvalidAddress(format!(
            "{addr}: invalid canonical address length"
        )));
    }
    // return canonical address
    Ok(bytes.into())
}
