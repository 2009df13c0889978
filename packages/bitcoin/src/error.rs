use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Empty Btc tx bytes")]
    EmptyTx,
    #[error("Failed to decode Btc tx: {0}")]
    TxDecode(String),
}
