// Parameter keys - Subspace and key identifiers of the chain's governable modules

// =============================================================================
// SUBSPACES
// =============================================================================

/// Bank module parameters
pub const BANK_SUBSPACE: &str = "bank";

/// Staking module parameters
pub const STAKING_SUBSPACE: &str = "staking";

/// Consensus parameters owned by the base application
pub const BASEAPP_SUBSPACE: &str = "baseapp";

// =============================================================================
// KEYS
// =============================================================================

pub const KEY_SEND_ENABLED: &str = "SendEnabled";
pub const KEY_DEFAULT_SEND_ENABLED: &str = "DefaultSendEnabled";

pub const KEY_UNBONDING_TIME: &str = "UnbondingTime";
pub const KEY_MAX_VALIDATORS: &str = "MaxValidators";
pub const KEY_MAX_ENTRIES: &str = "MaxEntries";
pub const KEY_HISTORICAL_ENTRIES: &str = "HistoricalEntries";
pub const KEY_BOND_DENOM: &str = "BondDenom";

pub const KEY_BLOCK_PARAMS: &str = "BlockParams";
pub const KEY_EVIDENCE_PARAMS: &str = "EvidenceParams";
pub const KEY_VALIDATOR_PARAMS: &str = "ValidatorParams";
pub const KEY_VERSION_PARAMS: &str = "VersionParams";

/// Native staking denomination at genesis
pub const DEFAULT_BOND_DENOM: &str = "ukrat";
