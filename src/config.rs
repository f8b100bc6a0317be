//! Guard Configuration
//!
//! The list of parameters governance may never change. Baked into the node's
//! configuration and read once at startup; there is no runtime reconfiguration.

use crate::filter::{BlockedPair, ParamBlockList};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Main configuration of the governance guard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Parameters that cannot be changed by a governance proposal
    #[serde(default)]
    pub blocked: Vec<BlockedPair>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            blocked: vec![
                // bank.SendEnabled
                BlockedPair::new(BANK_SUBSPACE, KEY_SEND_ENABLED),
                // staking.UnbondingTime
                BlockedPair::new(STAKING_SUBSPACE, KEY_UNBONDING_TIME),
                // staking.BondDenom
                BlockedPair::new(STAKING_SUBSPACE, KEY_BOND_DENOM),
                // consensus.block
                BlockedPair::new(BASEAPP_SUBSPACE, KEY_BLOCK_PARAMS),
                // consensus.validator.PubKeyTypes
                BlockedPair::new(BASEAPP_SUBSPACE, KEY_VALIDATOR_PARAMS),
                // consensus.version.AppVersion
                BlockedPair::new(BASEAPP_SUBSPACE, KEY_VERSION_PARAMS),
            ],
        }
    }
}

impl GuardConfig {
    /// Configuration that blocks nothing
    pub fn permissive() -> Self {
        Self { blocked: vec![] }
    }

    /// Load configuration from TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn with_blocked(mut self, subspace: &str, key: &str) -> Self {
        self.blocked.push(BlockedPair::new(subspace, key));
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> anyhow::Result<()> {
        for (index, pair) in self.blocked.iter().enumerate() {
            if pair.subspace.trim().is_empty() {
                anyhow::bail!("blocked[{}]: subspace must not be empty (key {:?})", index, pair.key);
            }
            if pair.key.trim().is_empty() {
                anyhow::bail!(
                    "blocked[{}]: key must not be empty (subspace {:?})",
                    index,
                    pair.subspace
                );
            }
        }
        Ok(())
    }

    /// Freeze the configured pairs into a shareable blocklist
    pub fn block_list(&self) -> Arc<ParamBlockList> {
        Arc::new(self.blocked.iter().cloned().collect())
    }
}
