use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Bitcoin error: {0}")]
    BitcoinError(#[from] babylon_bitcoin::error::Error),
    #[error("Tx input count mismatch: expected {0}, got {1}")]
    TxInputCountMismatch(usize, usize),
    #[error("Tx output count mismatch: expected {0}, got {1}")]
    TxOutputCountMismatch(usize, usize),
    #[error("Transaction is replaceable.")]
    TxIsReplaceable {},
    #[error("Transaction has locktime.")]
    TxHasLocktime {},
}
