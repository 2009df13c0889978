use bech32::{ToBase32, Variant};
use bitcoin::absolute::LockTime;
use bitcoin::hashes::Hash;
use bitcoin::transaction::Version;
use bitcoin::{
    consensus::serialize, Amount, OutPoint, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Txid,
    Witness,
};
use k256::schnorr::signature::Signer;
use k256::schnorr::{Signature, SigningKey};

/// Bech32 prefix of Babylon account addresses
pub const ADDR_PREFIX: &str = "bbn";

const STAKING_VALUE_SAT: u64 = 1_000_000;
const UNBONDING_FEE_SAT: u64 = 1_000;

/// Deterministic secret key derived from a non-zero seed byte.
pub fn signing_key(seed: u8) -> SigningKey {
    assert_ne!(seed, 0, "seed must be non-zero");
    SigningKey::from_bytes(&[seed; 32]).unwrap()
}

/// BIP-340 (x-only) public key of the key derived from `seed`
pub fn bip340_pk(seed: u8) -> Vec<u8> {
    signing_key(seed).verifying_key().to_bytes().to_vec()
}

/// BIP-340 Schnorr signature over `msg` by the key derived from `seed`
pub fn bip340_sig(seed: u8, msg: &[u8]) -> Vec<u8> {
    let sig: Signature = signing_key(seed).sign(msg);
    sig.to_bytes().to_vec()
}

/// Compressed secp256k1 public key, as used for Babylon account keys
pub fn secp256k1_pk(seed: u8) -> Vec<u8> {
    let mut pk = vec![0x02];
    pk.extend(bip340_pk(seed));
    pk
}

/// Bech32 account address over a 20-byte payload derived from `seed`
pub fn bech32_address(prefix: &str, seed: u8) -> String {
    bech32::encode(prefix, [seed; 20].to_base32(), Variant::Bech32).unwrap()
}

fn taproot_script_pubkey() -> ScriptBuf {
    let mut script = vec![0x51, 0x20];
    script.extend(bip340_pk(9));
    ScriptBuf::from_bytes(script)
}

fn outpoint(idx: usize) -> OutPoint {
    OutPoint {
        txid: Txid::from_byte_array([(idx as u8).wrapping_add(1); 32]),
        vout: idx as u32,
    }
}

/// A transaction with `n_inputs` non-replaceable inputs and `n_outputs` outputs, and no locktime
pub fn transfer_tx_with_shape(n_inputs: usize, n_outputs: usize) -> Transaction {
    Transaction {
        version: Version::TWO,
        lock_time: LockTime::ZERO,
        input: (0..n_inputs)
            .map(|idx| TxIn {
                previous_output: outpoint(idx),
                script_sig: ScriptBuf::new(),
                sequence: Sequence::MAX,
                witness: Witness::new(),
            })
            .collect(),
        output: (0..n_outputs)
            .map(|_| TxOut {
                value: Amount::from_sat(
                    (STAKING_VALUE_SAT - UNBONDING_FEE_SAT) / n_outputs.max(1) as u64,
                ),
                script_pubkey: taproot_script_pubkey(),
            })
            .collect(),
    }
}

/// The staking transaction every fixture delegation refers to
pub fn staking_tx() -> Transaction {
    let mut tx = transfer_tx_with_shape(1, 2);
    tx.output[0].value = Amount::from_sat(STAKING_VALUE_SAT);
    tx
}

pub fn staking_tx_bytes() -> Vec<u8> {
    serialize(&staking_tx())
}

/// Hex-encoded hash of `staking_tx`, in Bitcoin display order
pub fn staking_tx_hash_hex() -> String {
    staking_tx().txid().to_string()
}

/// An unbonding transaction spending the staking output with a single output
pub fn simple_transfer_tx() -> Transaction {
    let mut tx = transfer_tx_with_shape(1, 1);
    tx.input[0].previous_output = OutPoint {
        txid: staking_tx().txid(),
        vout: 0,
    };
    tx
}

pub fn simple_transfer_tx_bytes() -> Vec<u8> {
    serialize(&simple_transfer_tx())
}

/// A slashing transaction paying to the slashing address and a change output
pub fn slashing_tx_bytes() -> Vec<u8> {
    let mut tx = transfer_tx_with_shape(1, 2);
    tx.input[0].previous_output = OutPoint {
        txid: staking_tx().txid(),
        vout: 0,
    };
    serialize(&tx)
}

/// Hash of the BTC header including the staking tx
pub fn btc_header_hash() -> Vec<u8> {
    hex::decode("00000000000000000002a7c4c1e48d76c5a37902165a270156b7a8d72728a054")
        .unwrap()
        .into_iter()
        .rev()
        .collect()
}

/// Merkle inclusion proof of the staking tx, as opaque bytes
pub fn staking_tx_inclusion_proof() -> Vec<u8> {
    [staking_tx().txid().to_byte_array(), [0xab; 32]].concat()
}
