use std::collections::HashSet;

use babylon_bitcoin::{Transaction, HASH_SIZE, MAX_HASH_STRING_SIZE};
use babylon_btcstaking::tx_verify;
use cosmwasm_std::{CanonicalAddr, Decimal};

use crate::config::ValidationConfig;
use crate::error::{StakingMsgError, TxInfoError, ValidatorSetError};
use crate::msg::{
    Bip340PubKey, Description, MsgAddCovenantSigs, MsgBtcUndelegate, MsgCreateBtcDelegation,
    MsgCreateBtcValidator, PubKey, TransactionInfo,
};
use crate::new_canonical_addr;
use crate::pop::ProofOfPossession;

/// Time locks are encoded in 16 bits in the staking scripts
pub const MAX_TIME_LOCK: u16 = u16::MAX;

/// A trait for validating the staking messages before they reach the keeper.
/// Checks run in a fixed order and the first violation is returned.
pub trait Validate {
    fn validate(&self, ctx: &ValidationContext) -> Result<(), StakingMsgError>;
}

/// Decoding and shape classification of Bitcoin transactions carried by the messages
pub trait BtcTxVerifier: Send + Sync {
    fn decode_btc_tx(&self, tx_bytes: &[u8]) -> babylon_btcstaking::Result<Transaction>;
    fn is_simple_transfer(&self, tx: &Transaction) -> babylon_btcstaking::Result<()>;
}

/// BitcoinTxVerifier uses Bitcoin consensus decoding and the BTC staking tx rules
#[derive(Clone, Copy, Debug, Default)]
pub struct BitcoinTxVerifier;

impl BtcTxVerifier for BitcoinTxVerifier {
    fn decode_btc_tx(&self, tx_bytes: &[u8]) -> babylon_btcstaking::Result<Transaction> {
        Ok(babylon_bitcoin::decode_btc_tx(tx_bytes)?)
    }

    fn is_simple_transfer(&self, tx: &Transaction) -> babylon_btcstaking::Result<()> {
        tx_verify::is_simple_transfer(tx)
    }
}

/// ValidationContext gives the validators access to the config and the external checks
#[derive(Clone, Copy)]
pub struct ValidationContext<'a> {
    pub config: &'a ValidationConfig,
    pub tx_verifier: &'a dyn BtcTxVerifier,
}

impl<'a> ValidationContext<'a> {
    pub fn new(config: &'a ValidationConfig, tx_verifier: &'a dyn BtcTxVerifier) -> Self {
        Self {
            config,
            tx_verifier,
        }
    }

    /// Context using Bitcoin consensus decoding for the transactions
    pub fn with_config(config: &'a ValidationConfig) -> Self {
        Self::new(config, &BitcoinTxVerifier)
    }

    pub fn address_from_text(&self, addr: &str) -> Result<CanonicalAddr, StakingMsgError> {
        new_canonical_addr(addr, &self.config.address_prefix)
    }
}

/// A reference field is present only if it is set and non-empty
trait Presence {
    fn is_present(&self) -> bool;
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for PubKey {
    fn is_present(&self) -> bool {
        !self.key.is_empty()
    }
}

impl Presence for Decimal {
    fn is_present(&self) -> bool {
        true
    }
}

impl Presence for Description {
    fn is_present(&self) -> bool {
        true
    }
}

impl Presence for ProofOfPossession {
    fn is_present(&self) -> bool {
        true
    }
}

impl Presence for TransactionInfo {
    fn is_present(&self) -> bool {
        true
    }
}

fn required<'a, T: Presence>(
    value: &'a Option<T>,
    field: &'static str,
) -> Result<&'a T, StakingMsgError> {
    match value {
        Some(v) if v.is_present() => Ok(v),
        _ => Err(StakingMsgError::missing(field)),
    }
}

fn bounded_time_lock(field: &'static str, value: u32) -> Result<u16, StakingMsgError> {
    u16::try_from(value).map_err(|_| StakingMsgError::BoundViolation {
        field,
        value: value.into(),
        max: MAX_TIME_LOCK.into(),
    })
}

fn bounded_length(field: &'static str, value: &str, max: usize) -> Result<(), StakingMsgError> {
    if value.len() > max {
        return Err(StakingMsgError::BoundViolation {
            field,
            value: value.len() as u64,
            max: max as u64,
        });
    }
    Ok(())
}

fn check_staking_tx_hash(staking_tx_hash: &str) -> Result<(), StakingMsgError> {
    if staking_tx_hash.len() != MAX_HASH_STRING_SIZE {
        return Err(StakingMsgError::MalformedHashReference {
            expected: MAX_HASH_STRING_SIZE,
            actual: staking_tx_hash.len(),
        });
    }
    Ok(())
}

fn check_validator_set(val_btc_pk_list: &[Bip340PubKey]) -> Result<(), ValidatorSetError> {
    if val_btc_pk_list.is_empty() {
        return Err(ValidatorSetError::EmptyValidatorList);
    }
    let mut val_btc_pk_set = HashSet::with_capacity(val_btc_pk_list.len());
    for val_btc_pk in val_btc_pk_list {
        if !val_btc_pk_set.insert(val_btc_pk) {
            return Err(ValidatorSetError::DuplicatedValidator(hex::encode(
                val_btc_pk,
            )));
        }
    }
    Ok(())
}

impl Description {
    /// ensure_length checks every field is within its length bound
    pub fn ensure_length(&self) -> Result<(), StakingMsgError> {
        bounded_length("moniker", &self.moniker, Self::MAX_MONIKER_LENGTH)?;
        bounded_length("identity", &self.identity, Self::MAX_IDENTITY_LENGTH)?;
        bounded_length("website", &self.website, Self::MAX_WEBSITE_LENGTH)?;
        bounded_length(
            "security_contact",
            &self.security_contact,
            Self::MAX_SECURITY_CONTACT_LENGTH,
        )?;
        bounded_length("details", &self.details, Self::MAX_DETAILS_LENGTH)
    }
}

impl TransactionInfo {
    /// validate_basic checks the staking tx info is well-formed.
    /// Inclusion of the tx in the referenced header is not verified here.
    pub fn validate_basic(&self) -> Result<(), TxInfoError> {
        let key = self.key.as_ref().ok_or(TxInfoError::EmptyKey)?;
        if key.hash.len() != HASH_SIZE {
            return Err(TxInfoError::InvalidBlockHash(HASH_SIZE, key.hash.len()));
        }
        if self.transaction.is_empty() {
            return Err(TxInfoError::EmptyTransaction);
        }
        if self.proof.is_empty() {
            return Err(TxInfoError::EmptyProof);
        }
        Ok(())
    }
}

impl Validate for MsgCreateBtcValidator {
    fn validate(&self, ctx: &ValidationContext) -> Result<(), StakingMsgError> {
        required(&self.commission, "commission")?;
        required(&self.description, "description")?.ensure_length()?;
        required(&self.babylon_pk, "babylon_pk")?;
        required(&self.btc_pk, "btc_pk")?;
        let pop = required(&self.pop, "pop")?;

        ctx.address_from_text(&self.signer)?;
        pop.validate_basic()?;

        Ok(())
    }
}

impl Validate for MsgCreateBtcDelegation {
    fn validate(&self, ctx: &ValidationContext) -> Result<(), StakingMsgError> {
        required(&self.babylon_pk, "babylon_pk")?;
        let pop = required(&self.pop, "pop")?;
        required(&self.btc_pk, "btc_pk")?;
        let staking_tx = required(&self.staking_tx, "staking_tx")?;
        required(&self.slashing_tx, "slashing_tx")?;
        required(&self.delegator_slashing_sig, "delegator_slashing_sig")?;
        ctx.address_from_text(&self.signer)?;

        bounded_time_lock("staking_time", self.staking_time)?;
        check_validator_set(&self.val_btc_pk_list)?;

        staking_tx.validate_basic()?;
        pop.validate_basic()?;

        // on-demand unbonding
        let unbonding_tx = required(&self.unbonding_tx, "unbonding_tx")?;
        required(&self.unbonding_slashing_tx, "unbonding_slashing_tx")?;
        required(
            &self.delegator_unbonding_slashing_sig,
            "delegator_unbonding_slashing_sig",
        )?;
        let unbonding_tx = ctx.tx_verifier.decode_btc_tx(unbonding_tx)?;
        ctx.tx_verifier.is_simple_transfer(&unbonding_tx)?;

        bounded_time_lock("unbonding_time", self.unbonding_time)?;

        Ok(())
    }
}

impl Validate for MsgAddCovenantSigs {
    fn validate(&self, _ctx: &ValidationContext) -> Result<(), StakingMsgError> {
        required(&self.pk, "pk")?;
        required(&self.slashing_tx_sigs, "slashing_tx_sigs")?;
        check_staking_tx_hash(&self.staking_tx_hash)?;

        // on-demand unbonding
        required(&self.unbonding_tx_sig, "unbonding_tx_sig")?;
        required(
            &self.slashing_unbonding_tx_sigs,
            "slashing_unbonding_tx_sigs",
        )?;

        Ok(())
    }
}

impl Validate for MsgBtcUndelegate {
    fn validate(&self, _ctx: &ValidationContext) -> Result<(), StakingMsgError> {
        check_staking_tx_hash(&self.staking_tx_hash)?;
        required(&self.unbonding_tx_sig, "unbonding_tx_sig")?;

        Ok(())
    }
}
