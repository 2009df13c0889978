/// BTC staking messages
/// The definitions here follow the same structure as the equivalent protobuf message types
/// of the `babylon.btcstaking.v1` package, already decoded into typed fields.
/// Optional fields are the reference fields that may be absent on the wire.
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;

use crate::pop::ProofOfPossession;
use crate::Bytes;

/// BIP-340 (x-only) public key bytes
pub type Bip340PubKey = Bytes;

/// BIP-340 Schnorr signature bytes
pub type Bip340Signature = Bytes;

/// PubKey defines a secp256k1 public key.
/// Key is the compressed form of the pubkey.
#[cw_serde]
pub struct PubKey {
    pub key: Bytes,
}

#[cw_serde]
pub struct Description {
    /// moniker is the name of the validator
    pub moniker: String,
    /// identity is the optional identity signature (ex. UPort or Keybase)
    pub identity: String,
    /// website is the website of the validator
    pub website: String,
    /// security_contact is the security contact of the validator
    pub security_contact: String,
    /// details is any other details of the validator
    pub details: String,
}

impl Description {
    /// Description field lengths
    pub const MAX_MONIKER_LENGTH: usize = 70;
    pub const MAX_IDENTITY_LENGTH: usize = 3000;
    pub const MAX_WEBSITE_LENGTH: usize = 140;
    pub const MAX_SECURITY_CONTACT_LENGTH: usize = 140;
    pub const MAX_DETAILS_LENGTH: usize = 280;
}

/// TransactionKey is the position of a BTC tx: the BTC header including it and its index
#[cw_serde]
pub struct TransactionKey {
    pub index: u32,
    /// hash is the hash of the BTC header including the tx
    pub hash: Bytes,
}

/// TransactionInfo is the info of a tx on Bitcoin, including its position, the tx itself and
/// a Merkle proof that it is included in the referenced header
#[cw_serde]
pub struct TransactionInfo {
    pub key: Option<TransactionKey>,
    pub transaction: Bytes,
    pub proof: Bytes,
}

/// MsgCreateBtcValidator registers a new BTC validator
#[cw_serde]
pub struct MsgCreateBtcValidator {
    /// signer is the bech32 address of the account registering the validator
    pub signer: String,
    /// description defines the description terms for the validator
    pub description: Option<Description>,
    /// commission defines the commission rate of the validator
    pub commission: Option<Decimal>,
    /// babylon_pk is the Babylon secp256k1 PK of this validator
    pub babylon_pk: Option<PubKey>,
    /// btc_pk is the Bitcoin secp256k1 PK of this validator
    pub btc_pk: Option<Bip340PubKey>,
    /// pop is the proof of possession of babylon_pk and btc_pk
    pub pop: Option<ProofOfPossession>,
}

/// MsgCreateBtcDelegation creates a new BTC delegation
#[cw_serde]
pub struct MsgCreateBtcDelegation {
    pub signer: String,
    /// babylon_pk is the Babylon secp256k1 PK of the BTC delegator
    pub babylon_pk: Option<PubKey>,
    /// pop is the proof of possession of babylon_pk and btc_pk
    pub pop: Option<ProofOfPossession>,
    /// btc_pk is the Bitcoin secp256k1 PK of the BTC delegator
    pub btc_pk: Option<Bip340PubKey>,
    /// val_btc_pk_list is the list of Bitcoin secp256k1 PKs of the BTC validators, if there is
    /// more than one validator pk it means that delegation is re-staked
    pub val_btc_pk_list: Vec<Bip340PubKey>,
    /// staking_time is the time lock used in staking transaction, in BTC blocks
    pub staking_time: u32,
    /// staking_tx is the staking tx along with the merkle proof of inclusion in btc block
    pub staking_tx: Option<TransactionInfo>,
    /// slashing_tx is the slashing tx
    pub slashing_tx: Option<Bytes>,
    /// delegator_slashing_sig is the signature on the slashing tx by the delegator
    /// (i.e., SK corresponding to btc_pk)
    pub delegator_slashing_sig: Option<Bip340Signature>,
    /// unbonding_time is the time lock used when funds are being unbonded, in BTC blocks
    pub unbonding_time: u32,
    /// unbonding_tx is the bitcoin unbonding transaction i.e. transaction that spends the
    /// staking output and sends it to the unbonding output
    pub unbonding_tx: Option<Bytes>,
    /// unbonding_slashing_tx is the slashing tx which slash unbonding contract
    pub unbonding_slashing_tx: Option<Bytes>,
    /// delegator_unbonding_slashing_sig is the signature on the slashing tx by the delegator
    pub delegator_unbonding_slashing_sig: Option<Bip340Signature>,
}

/// MsgAddCovenantSigs carries the signatures of one covenant member on a BTC delegation
#[cw_serde]
pub struct MsgAddCovenantSigs {
    pub signer: String,
    /// pk is the BTC public key of the covenant member
    pub pk: Option<Bip340PubKey>,
    /// staking_tx_hash is the hash of the staking tx, in hex.
    /// It uniquely identifies a BTC delegation
    pub staking_tx_hash: String,
    /// slashing_tx_sigs is a list of adaptor signatures of the covenant on the slashing tx,
    /// one per restaked validator
    pub slashing_tx_sigs: Option<Vec<Bytes>>,
    /// unbonding_tx_sig is the signature of the covenant on the unbonding tx submitted to Babylon
    pub unbonding_tx_sig: Option<Bip340Signature>,
    /// slashing_unbonding_tx_sigs is a list of adaptor signatures of the covenant on the
    /// slashing tx of the unbonding output
    pub slashing_unbonding_tx_sigs: Option<Vec<Bytes>>,
}

/// MsgBtcUndelegate is the message for early unbonding of a BTC delegation
#[cw_serde]
pub struct MsgBtcUndelegate {
    pub signer: String,
    /// staking_tx_hash is the hash of the staking tx, in hex.
    /// It uniquely identifies a BTC delegation
    pub staking_tx_hash: String,
    /// unbonding_tx_sig is the signature of the staker on the unbonding tx submitted to Babylon.
    /// It proves that the BTC delegator wants to unbond
    pub unbonding_tx_sig: Option<Bip340Signature>,
}
