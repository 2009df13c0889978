use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum StakingMsgError {
    #[error("Empty {field}")]
    MissingField { field: &'static str },
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Invalid {field}: {value}, max: {max}")]
    BoundViolation {
        field: &'static str,
        value: u64,
        max: u64,
    },
    #[error("{0}")]
    SetConstraintViolation(#[from] ValidatorSetError),
    #[error("Staking tx hash hex string is not {expected} chars long, got {actual}")]
    MalformedHashReference { expected: usize, actual: usize },
    #[error("Invalid unbonding tx: {0}")]
    MalformedTransaction(#[from] babylon_btcstaking::error::Error),
    #[error(transparent)]
    InvalidPop(#[from] PopError),
    #[error(transparent)]
    InvalidStakingTxInfo(#[from] TxInfoError),
    #[error("Unknown message type: {0}")]
    UnknownMsgType(String),
    #[error("Message type {type_url} does not match {kind} payload")]
    MsgKindMismatch {
        type_url: String,
        kind: &'static str,
    },
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl StakingMsgError {
    pub fn missing(field: &'static str) -> Self {
        StakingMsgError::MissingField { field }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidatorSetError {
    #[error("Empty list of validator BTC public keys")]
    EmptyValidatorList,
    #[error("Duplicated validator BTC public key: {0}")]
    DuplicatedValidator(String),
}

/// Structural errors of a proof of possession
#[derive(Error, Debug, PartialEq)]
pub enum PopError {
    #[error("Empty Babylon signature in proof of possession")]
    EmptyBabylonSig,
    #[error("Empty BTC signature in proof of possession")]
    EmptyBtcSig,
    #[error("Unknown BTC signature type: {0}")]
    UnknownBtcSigType(i32),
    #[error("Invalid BIP-340 signature in proof of possession: {0}")]
    InvalidBip340Sig(String),
    #[error("Invalid ECDSA signature in proof of possession: expected {0} bytes, got {1}")]
    InvalidEcdsaSigLength(usize, usize),
}

/// Structural errors of a staking tx info
#[derive(Error, Debug, PartialEq)]
pub enum TxInfoError {
    #[error("Empty key in staking tx info")]
    EmptyKey,
    #[error("Invalid BTC header hash in staking tx info: expected {0} bytes, got {1}")]
    InvalidBlockHash(usize, usize),
    #[error("Empty transaction in staking tx info")]
    EmptyTransaction,
    #[error("Empty inclusion proof in staking tx info")]
    EmptyProof,
}
