pub use bitcoin::{
    consensus::encode::Error as EncodeError,
    consensus::{serialize, Decodable},
    Transaction,
};

pub mod error;

pub type Result<T> = std::result::Result<T, error::Error>;

/// Hash size in bytes
pub const HASH_SIZE: usize = 32;

/// Length of the hex encoding of a hash, i.e. of a staking tx hash string
pub const MAX_HASH_STRING_SIZE: usize = HASH_SIZE * 2;

/// decode_btc_tx reads one consensus-encoded Bitcoin transaction from the start of the given
/// bytes. Bytes following the transaction are ignored.
pub fn decode_btc_tx(tx_bytes: &[u8]) -> Result<Transaction> {
    if tx_bytes.is_empty() {
        return Err(error::Error::EmptyTx);
    }
    let mut reader = tx_bytes;
    Transaction::consensus_decode(&mut reader)
        .map_err(|e: EncodeError| error::Error::TxDecode(e.to_string()))
}
