use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use cosmwasm_schema::cw_serde;
use tracing::{debug, trace};

use crate::error::StakingMsgError;
use crate::msg::{MsgAddCovenantSigs, MsgBtcUndelegate, MsgCreateBtcDelegation, MsgCreateBtcValidator};
use crate::validate::{Validate, ValidationContext};

/// The kinds of BTC staking messages handled by the validator
#[cw_serde]
#[derive(Copy, Eq, Hash, PartialOrd, Ord)]
pub enum MsgKind {
    CreateBtcValidator,
    CreateBtcDelegation,
    AddCovenantSigs,
    BtcUndelegate,
}

impl MsgKind {
    pub const ALL: [MsgKind; 4] = [
        MsgKind::CreateBtcValidator,
        MsgKind::CreateBtcDelegation,
        MsgKind::AddCovenantSigs,
        MsgKind::BtcUndelegate,
    ];

    /// Protobuf type URL of the message kind
    pub fn type_url(&self) -> &'static str {
        match self {
            MsgKind::CreateBtcValidator => "/babylon.btcstaking.v1.MsgCreateBTCValidator",
            MsgKind::CreateBtcDelegation => "/babylon.btcstaking.v1.MsgCreateBTCDelegation",
            MsgKind::AddCovenantSigs => "/babylon.btcstaking.v1.MsgAddCovenantSigs",
            MsgKind::BtcUndelegate => "/babylon.btcstaking.v1.MsgBTCUndelegate",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MsgKind::CreateBtcValidator => "create_btc_validator",
            MsgKind::CreateBtcDelegation => "create_btc_delegation",
            MsgKind::AddCovenantSigs => "add_covenant_sigs",
            MsgKind::BtcUndelegate => "btc_undelegate",
        }
    }
}

impl fmt::Display for MsgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded BTC staking message of any kind
#[cw_serde]
pub enum BtcStakingMsg {
    CreateBtcValidator(MsgCreateBtcValidator),
    CreateBtcDelegation(MsgCreateBtcDelegation),
    AddCovenantSigs(MsgAddCovenantSigs),
    BtcUndelegate(MsgBtcUndelegate),
}

impl BtcStakingMsg {
    pub fn kind(&self) -> MsgKind {
        match self {
            BtcStakingMsg::CreateBtcValidator(_) => MsgKind::CreateBtcValidator,
            BtcStakingMsg::CreateBtcDelegation(_) => MsgKind::CreateBtcDelegation,
            BtcStakingMsg::AddCovenantSigs(_) => MsgKind::AddCovenantSigs,
            BtcStakingMsg::BtcUndelegate(_) => MsgKind::BtcUndelegate,
        }
    }
}

impl Validate for BtcStakingMsg {
    fn validate(&self, ctx: &ValidationContext) -> Result<(), StakingMsgError> {
        match self {
            BtcStakingMsg::CreateBtcValidator(msg) => msg.validate(ctx),
            BtcStakingMsg::CreateBtcDelegation(msg) => msg.validate(ctx),
            BtcStakingMsg::AddCovenantSigs(msg) => msg.validate(ctx),
            BtcStakingMsg::BtcUndelegate(msg) => msg.validate(ctx),
        }
    }
}

impl From<MsgCreateBtcValidator> for BtcStakingMsg {
    fn from(msg: MsgCreateBtcValidator) -> Self {
        BtcStakingMsg::CreateBtcValidator(msg)
    }
}

impl From<MsgCreateBtcDelegation> for BtcStakingMsg {
    fn from(msg: MsgCreateBtcDelegation) -> Self {
        BtcStakingMsg::CreateBtcDelegation(msg)
    }
}

impl From<MsgAddCovenantSigs> for BtcStakingMsg {
    fn from(msg: MsgAddCovenantSigs) -> Self {
        BtcStakingMsg::AddCovenantSigs(msg)
    }
}

impl From<MsgBtcUndelegate> for BtcStakingMsg {
    fn from(msg: MsgBtcUndelegate) -> Self {
        BtcStakingMsg::BtcUndelegate(msg)
    }
}

/// MsgRegistry maps the type URLs the dispatch layer routes on to message kinds.
/// It is immutable once built.
#[derive(Clone, Debug)]
pub struct MsgRegistry {
    kinds: BTreeMap<&'static str, MsgKind>,
}

impl Default for MsgRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgRegistry {
    pub fn new() -> Self {
        let kinds = MsgKind::ALL
            .iter()
            .map(|kind| (kind.type_url(), *kind))
            .collect();
        Self { kinds }
    }

    /// The process-wide registry
    pub fn global() -> &'static MsgRegistry {
        static REGISTRY: OnceLock<MsgRegistry> = OnceLock::new();
        REGISTRY.get_or_init(MsgRegistry::new)
    }

    pub fn kind_of(&self, type_url: &str) -> Result<MsgKind, StakingMsgError> {
        self.kinds
            .get(type_url)
            .copied()
            .ok_or_else(|| StakingMsgError::UnknownMsgType(type_url.to_string()))
    }

    pub fn type_urls(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.keys().copied()
    }

    /// Validates a message routed under `type_url`.
    /// The payload must be of the kind registered for the type URL.
    pub fn validate(
        &self,
        type_url: &str,
        msg: &BtcStakingMsg,
        ctx: &ValidationContext,
    ) -> Result<(), StakingMsgError> {
        let kind = self.kind_of(type_url)?;
        if kind != msg.kind() {
            return Err(StakingMsgError::MsgKindMismatch {
                type_url: type_url.to_string(),
                kind: msg.kind().as_str(),
            });
        }

        match msg.validate(ctx) {
            Ok(()) => {
                trace!(%kind, "message passed validation");
                Ok(())
            }
            Err(err) => {
                debug!(%kind, %err, "message rejected");
                Err(err)
            }
        }
    }
}
