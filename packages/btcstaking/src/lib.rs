pub mod error;
pub mod tx_verify;
pub type Result<T> = std::result::Result<T, error::Error>;
