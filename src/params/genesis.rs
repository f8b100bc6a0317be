// Genesis - Parameter subspaces of the standard application
// Principle: Declared once at startup, identical on every node

use super::subspace::{ParamKind, ParamsKeeper, Subspace};
use super::ParamsError;
use crate::types::*;
use std::time::Duration;

/// Unbonding period at genesis (21 days)
pub const DEFAULT_UNBONDING_TIME: Duration = Duration::from_secs(21 * 24 * 3600);

pub const DEFAULT_MAX_VALIDATORS: u32 = 100;
pub const DEFAULT_MAX_ENTRIES: u32 = 7;
pub const DEFAULT_HISTORICAL_ENTRIES: u32 = 10_000;

pub fn bank_subspace() -> Subspace {
    Subspace::new(BANK_SUBSPACE)
        .with_key(KEY_SEND_ENABLED, ParamKind::SendEnabled, ParamValue::SendEnabled(vec![]))
        .with_key(KEY_DEFAULT_SEND_ENABLED, ParamKind::Bool, ParamValue::Bool(true))
}

pub fn staking_subspace() -> Subspace {
    Subspace::new(STAKING_SUBSPACE)
        .with_key(
            KEY_UNBONDING_TIME,
            ParamKind::Duration,
            ParamValue::Duration(DEFAULT_UNBONDING_TIME),
        )
        .with_key(
            KEY_MAX_VALIDATORS,
            ParamKind::Uint32 { min: 1 },
            ParamValue::Uint32(DEFAULT_MAX_VALIDATORS),
        )
        .with_key(
            KEY_MAX_ENTRIES,
            ParamKind::Uint32 { min: 1 },
            ParamValue::Uint32(DEFAULT_MAX_ENTRIES),
        )
        .with_key(
            KEY_HISTORICAL_ENTRIES,
            ParamKind::Uint32 { min: 0 },
            ParamValue::Uint32(DEFAULT_HISTORICAL_ENTRIES),
        )
        .with_key(
            KEY_BOND_DENOM,
            ParamKind::Denom,
            ParamValue::Denom(DEFAULT_BOND_DENOM.to_string()),
        )
}

pub fn baseapp_subspace() -> Subspace {
    Subspace::new(BASEAPP_SUBSPACE)
        .with_key(
            KEY_BLOCK_PARAMS,
            ParamKind::BlockParams,
            ParamValue::Block(BlockParams::default()),
        )
        .with_key(
            KEY_EVIDENCE_PARAMS,
            ParamKind::EvidenceParams,
            ParamValue::Evidence(EvidenceParams::default()),
        )
        .with_key(
            KEY_VALIDATOR_PARAMS,
            ParamKind::ValidatorParams,
            ParamValue::Validator(ValidatorParams::default()),
        )
        .with_key(
            KEY_VERSION_PARAMS,
            ParamKind::VersionParams,
            ParamValue::Version(VersionParams::default()),
        )
}

impl ParamsKeeper {
    /// Keeper with the bank, staking and baseapp subspaces registered
    pub fn standard() -> Result<Self, ParamsError> {
        let mut keeper = Self::new();
        keeper.register(bank_subspace())?;
        keeper.register(staking_subspace())?;
        keeper.register(baseapp_subspace())?;
        Ok(keeper)
    }
}
