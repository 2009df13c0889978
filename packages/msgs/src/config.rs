use cosmwasm_schema::cw_serde;
use derivative::Derivative;

use crate::error::StakingMsgError;

/// Default bech32 prefix of Babylon account addresses
pub const DEFAULT_ADDRESS_PREFIX: &str = "bbn";

/// ValidationConfig holds the chain-selectable settings of message validation
#[cw_serde]
#[derive(Derivative)]
#[derivative(Default)]
pub struct ValidationConfig {
    /// `address_prefix` is the bech32 human-readable part that signer addresses must carry
    #[derivative(Default(value = "String::from(DEFAULT_ADDRESS_PREFIX)"))]
    pub address_prefix: String,
}

impl ValidationConfig {
    /// Loads the config from its JSON representation
    pub fn from_json(data: impl AsRef<[u8]>) -> Result<Self, StakingMsgError> {
        let cfg: ValidationConfig = cosmwasm_std::from_json(data)
            .map_err(|e| StakingMsgError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), StakingMsgError> {
        if self.address_prefix.is_empty() {
            return Err(StakingMsgError::InvalidConfig(
                "empty address prefix".to_string(),
            ));
        }
        // bech32 human-readable parts are case-insensitive but decoded lowercase
        if self.address_prefix.to_lowercase() != self.address_prefix {
            return Err(StakingMsgError::InvalidConfig(format!(
                "address prefix must be lowercase: {}",
                self.address_prefix
            )));
        }
        Ok(())
    }
}
