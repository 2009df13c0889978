use cosmwasm_schema::cw_serde;
use k256::schnorr::Signature as SchnorrSignature;

use crate::error::PopError;
use crate::Bytes;

/// Length of an ECDSA signature in compact form with a leading recovery byte
pub const ECDSA_SIG_LENGTH: usize = 65;

/// BTCSigType indicates the type of btc_sig in a pop
#[cw_serde]
#[derive(Copy)]
pub enum BtcSigType {
    /// BIP340 means the btc_sig will follow the BIP-340 encoding
    Bip340 = 0,
    /// BIP322 means the btc_sig will follow the BIP-322 encoding
    Bip322 = 1,
    /// ECDSA means the btc_sig will follow the ECDSA encoding
    Ecdsa = 2,
}

impl TryFrom<i32> for BtcSigType {
    type Error = PopError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BtcSigType::Bip340),
            1 => Ok(BtcSigType::Bip322),
            2 => Ok(BtcSigType::Ecdsa),
            _ => Err(PopError::UnknownBtcSigType(value)),
        }
    }
}

/// ProofOfPossession is the proof of possession that a Babylon secp256k1
/// secret key and a Bitcoin secp256k1 secret key are held by the same
/// person
#[cw_serde]
pub struct ProofOfPossession {
    /// btc_sig_type indicates the type of btc_sig in the pop
    pub btc_sig_type: i32,
    /// babylon_sig is the signature generated via sign(sk_babylon, pk_btc)
    pub babylon_sig: Bytes,
    /// btc_sig is the signature generated via sign(sk_btc, babylon_sig)
    /// the signature follows encoding in either BIP-340 spec or BIP-322 spec
    pub btc_sig: Bytes,
}

impl ProofOfPossession {
    /// validate_basic checks the proof of possession is well-formed.
    /// It does not verify any of the signatures.
    pub fn validate_basic(&self) -> Result<(), PopError> {
        if self.babylon_sig.is_empty() {
            return Err(PopError::EmptyBabylonSig);
        }
        if self.btc_sig.is_empty() {
            return Err(PopError::EmptyBtcSig);
        }

        match BtcSigType::try_from(self.btc_sig_type)? {
            BtcSigType::Bip340 => {
                SchnorrSignature::try_from(self.btc_sig.as_slice())
                    .map_err(|e| PopError::InvalidBip340Sig(e.to_string()))?;
            }
            // The BIP-322 proof is an encoded witness; decoding it is up to the verifier
            BtcSigType::Bip322 => {}
            BtcSigType::Ecdsa => {
                if self.btc_sig.len() != ECDSA_SIG_LENGTH {
                    return Err(PopError::InvalidEcdsaSigLength(
                        ECDSA_SIG_LENGTH,
                        self.btc_sig.len(),
                    ));
                }
            }
        }

        Ok(())
    }
}
