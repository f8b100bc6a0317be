// Parameter values - Typed contents of the governable parameter store
// 64-bit integers travel as JSON strings, 32-bit ones as plain numbers.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// =============================================================================
// BOUNDS
// =============================================================================

/// Hard upper bound on block size (100 MiB)
pub const MAX_BLOCK_SIZE_BYTES: i64 = 104_857_600;

/// Public key algorithms a validator may use
pub const PUB_KEY_TYPE_ED25519: &str = "ed25519";
pub const PUB_KEY_TYPE_SECP256K1: &str = "secp256k1";
pub const PUB_KEY_TYPE_SR25519: &str = "sr25519";

const SUPPORTED_PUB_KEY_TYPES: &[&str] = &[
    PUB_KEY_TYPE_ED25519,
    PUB_KEY_TYPE_SECP256K1,
    PUB_KEY_TYPE_SR25519,
];

// =============================================================================
// STRUCTURED VALUES
// =============================================================================

/// Per-denomination send switch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEnabled {
    pub denom: String,
    pub enabled: bool,
}

impl SendEnabled {
    pub fn new(denom: impl Into<String>, enabled: bool) -> Self {
        Self {
            denom: denom.into(),
            enabled,
        }
    }
}

/// Block size and gas limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockParams {
    #[serde(with = "amino_int")]
    pub max_bytes: i64,
    #[serde(with = "amino_int")]
    pub max_gas: i64,
    #[serde(with = "amino_int")]
    pub time_iota_ms: i64,
}

impl Default for BlockParams {
    fn default() -> Self {
        Self {
            max_bytes: 22_020_096, // 21 MiB
            max_gas: -1,
            time_iota_ms: 1_000,
        }
    }
}

impl BlockParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_bytes <= 0 {
            return Err(format!("block.max_bytes must be positive: {}", self.max_bytes));
        }
        if self.max_bytes > MAX_BLOCK_SIZE_BYTES {
            return Err(format!(
                "block.max_bytes is too big: {} > {}",
                self.max_bytes, MAX_BLOCK_SIZE_BYTES
            ));
        }
        if self.max_gas < -1 {
            return Err(format!("block.max_gas must be greater or equal to -1: {}", self.max_gas));
        }
        if self.time_iota_ms <= 0 {
            return Err(format!(
                "block.time_iota_ms must be positive: {}",
                self.time_iota_ms
            ));
        }
        Ok(())
    }
}

/// Evidence retention limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceParams {
    #[serde(with = "amino_int")]
    pub max_age_num_blocks: i64,
    #[serde(with = "amino_duration")]
    pub max_age_duration: Duration,
    #[serde(with = "amino_int")]
    pub max_bytes: i64,
}

impl Default for EvidenceParams {
    fn default() -> Self {
        Self {
            max_age_num_blocks: 100_000,
            max_age_duration: Duration::from_secs(48 * 3600),
            max_bytes: 1_048_576,
        }
    }
}

impl EvidenceParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_age_num_blocks <= 0 {
            return Err(format!(
                "evidence.max_age_num_blocks must be positive: {}",
                self.max_age_num_blocks
            ));
        }
        if self.max_age_duration.is_zero() {
            return Err("evidence.max_age_duration must be positive".to_string());
        }
        if self.max_bytes < 0 {
            return Err(format!("evidence.max_bytes must be non-negative: {}", self.max_bytes));
        }
        Ok(())
    }
}

/// Key algorithms accepted for validator consensus keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorParams {
    pub pub_key_types: Vec<String>,
}

impl Default for ValidatorParams {
    fn default() -> Self {
        Self {
            pub_key_types: vec![PUB_KEY_TYPE_ED25519.to_string()],
        }
    }
}

impl ValidatorParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.pub_key_types.is_empty() {
            return Err("validator.pub_key_types must not be empty".to_string());
        }
        for key_type in &self.pub_key_types {
            if !SUPPORTED_PUB_KEY_TYPES.contains(&key_type.as_str()) {
                return Err(format!("unknown pubkey type: {}", key_type));
            }
        }
        Ok(())
    }
}

/// Application protocol version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionParams {
    #[serde(with = "amino_int")]
    pub app_version: u64,
}

impl Default for VersionParams {
    fn default() -> Self {
        Self { app_version: 1 }
    }
}

// =============================================================================
// PARAMETER VALUE
// =============================================================================

/// A decoded parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Bool(bool),
    Uint32(u32),
    Denom(String),
    Duration(Duration),
    SendEnabled(Vec<SendEnabled>),
    Block(BlockParams),
    Evidence(EvidenceParams),
    Validator(ValidatorParams),
    Version(VersionParams),
}

impl ParamValue {
    /// Encode back to the JSON form used in proposals
    pub fn to_json(&self) -> serde_json::Result<String> {
        match self {
            ParamValue::Bool(v) => serde_json::to_string(v),
            ParamValue::Uint32(v) => serde_json::to_string(v),
            ParamValue::Denom(v) => serde_json::to_string(v),
            ParamValue::Duration(v) => serde_json::to_string(&v.as_nanos().to_string()),
            ParamValue::SendEnabled(v) => serde_json::to_string(v),
            ParamValue::Block(v) => serde_json::to_string(v),
            ParamValue::Evidence(v) => serde_json::to_string(v),
            ParamValue::Validator(v) => serde_json::to_string(v),
            ParamValue::Version(v) => serde_json::to_string(v),
        }
    }
}

/// Check a coin denomination: `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`
pub fn validate_denom(denom: &str) -> Result<(), String> {
    let mut chars = denom.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            let rest = chars.as_str();
            (2..=127).contains(&rest.len())
                && rest
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'))
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(format!("invalid denom: {}", denom))
    }
}

/// 64-bit integers encoded as JSON strings
mod amino_int {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::fmt::Display;
    use std::str::FromStr;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<T>().map_err(D::Error::custom)
    }
}

/// Durations encoded as a JSON string of nanoseconds
mod amino_duration {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.as_nanos())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let nanos = raw.parse::<u64>().map_err(D::Error::custom)?;
        Ok(Duration::from_nanos(nanos))
    }
}
