use bitcoin::{Sequence, Transaction};

use crate::error::Error;
use crate::Result;

/// Checks if a transaction has exactly one input and one output.
pub fn is_transfer_tx(tx: &Transaction) -> Result<()> {
    if tx.input.len() != 1 {
        return Err(Error::TxInputCountMismatch(1, tx.input.len()));
    }

    if tx.output.len() != 1 {
        return Err(Error::TxOutputCountMismatch(1, tx.output.len()));
    }

    Ok(())
}

/// Checks if a transaction is a simple transfer, meaning it has exactly one input and one output,
/// is not replaceable (sequence number is max), and has no locktime.
pub fn is_simple_transfer(tx: &Transaction) -> Result<()> {
    is_transfer_tx(tx)?;

    if tx.input[0].sequence != Sequence::MAX {
        return Err(Error::TxIsReplaceable {});
    }

    if tx.lock_time.to_consensus_u32() > 0 {
        return Err(Error::TxHasLocktime {});
    }

    Ok(())
}
