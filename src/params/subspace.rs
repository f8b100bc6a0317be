// Subspaces - Per-module key tables
// Raw JSON only becomes a ParamValue through the kind declared for its key.

use super::store::ParamStore;
use super::ParamsError;
use crate::types::{
    validate_denom, BlockParams, EvidenceParams, ParamValue, SendEnabled, ValidatorParams,
    VersionParams,
};
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashSet};
use std::time::Duration;

/// Declared type of a parameter, with its validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Bool,
    /// Unsigned 32-bit integer, inclusive lower bound
    Uint32 { min: u32 },
    Denom,
    /// Strictly positive duration, nanoseconds as a JSON string
    Duration,
    SendEnabled,
    BlockParams,
    EvidenceParams,
    ValidatorParams,
    VersionParams,
}

impl ParamKind {
    /// Decode and validate a raw JSON value
    pub fn decode(&self, raw: &str) -> Result<ParamValue, String> {
        let value = match self {
            ParamKind::Bool => ParamValue::Bool(parse_json(raw)?),
            ParamKind::Uint32 { .. } => ParamValue::Uint32(parse_json(raw)?),
            ParamKind::Denom => ParamValue::Denom(parse_json(raw)?),
            ParamKind::Duration => {
                let nanos: String = parse_json(raw)?;
                let nanos = nanos
                    .parse::<u64>()
                    .map_err(|e| format!("invalid duration {:?}: {}", nanos, e))?;
                ParamValue::Duration(Duration::from_nanos(nanos))
            }
            ParamKind::SendEnabled => ParamValue::SendEnabled(parse_json(raw)?),
            ParamKind::BlockParams => ParamValue::Block(parse_json(raw)?),
            ParamKind::EvidenceParams => ParamValue::Evidence(parse_json(raw)?),
            ParamKind::ValidatorParams => ParamValue::Validator(parse_json(raw)?),
            ParamKind::VersionParams => ParamValue::Version(parse_json(raw)?),
        };

        self.validate(&value)?;
        Ok(value)
    }

    /// Check a value against this kind
    pub fn validate(&self, value: &ParamValue) -> Result<(), String> {
        match (self, value) {
            (ParamKind::Bool, ParamValue::Bool(_)) => Ok(()),
            (ParamKind::Uint32 { min }, ParamValue::Uint32(v)) => {
                if v < min {
                    Err(format!("value {} is below minimum {}", v, min))
                } else {
                    Ok(())
                }
            }
            (ParamKind::Denom, ParamValue::Denom(denom)) => validate_denom(denom),
            (ParamKind::Duration, ParamValue::Duration(d)) => {
                if d.is_zero() {
                    Err("duration must be positive".to_string())
                } else {
                    Ok(())
                }
            }
            (ParamKind::SendEnabled, ParamValue::SendEnabled(entries)) => {
                validate_send_enabled(entries)
            }
            (ParamKind::BlockParams, ParamValue::Block(p)) => p.validate(),
            (ParamKind::EvidenceParams, ParamValue::Evidence(p)) => p.validate(),
            (ParamKind::ValidatorParams, ParamValue::Validator(p)) => p.validate(),
            (ParamKind::VersionParams, ParamValue::Version(_)) => Ok(()),
            (kind, value) => Err(format!("expected {:?}, got {:?}", kind, value)),
        }
    }
}

fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_str(raw).map_err(|e| e.to_string())
}

fn validate_send_enabled(entries: &[SendEnabled]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for entry in entries {
        validate_denom(&entry.denom)?;
        if !seen.insert(entry.denom.as_str()) {
            return Err(format!("duplicate send enabled parameter found: {}", entry.denom));
        }
    }
    Ok(())
}

/// Declared keys of one module, with their genesis values
#[derive(Debug, Clone)]
pub struct Subspace {
    name: String,
    table: BTreeMap<String, (ParamKind, ParamValue)>,
}

impl Subspace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: BTreeMap::new(),
        }
    }

    /// Declare a key with its kind and genesis value
    pub fn with_key(mut self, key: impl Into<String>, kind: ParamKind, default: ParamValue) -> Self {
        self.table.insert(key.into(), (kind, default));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared kind of a key
    pub fn kind(&self, key: &str) -> Option<ParamKind> {
        self.table.get(key).map(|(kind, _)| *kind)
    }

    /// Declared keys, sorted
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    /// Decode a raw value for one of this subspace's keys
    pub fn decode(&self, key: &str, raw: &str) -> Result<ParamValue, ParamsError> {
        let kind = self.kind(key).ok_or_else(|| ParamsError::UnknownKey {
            subspace: self.name.clone(),
            key: key.to_string(),
        })?;

        kind.decode(raw).map_err(|reason| ParamsError::InvalidValue {
            subspace: self.name.clone(),
            key: key.to_string(),
            reason,
        })
    }

    /// Decode and write a raw value into the store
    pub fn update(&self, store: &mut ParamStore, key: &str, raw: &str) -> Result<(), ParamsError> {
        let value = self.decode(key, raw)?;
        store.set(&self.name, key, value);
        Ok(())
    }

    /// Write every genesis value into the store
    fn init_genesis(&self, store: &mut ParamStore) {
        for (key, (_, default)) in &self.table {
            store.set(&self.name, key, default.clone());
        }
    }
}

/// Registry of all parameter subspaces
#[derive(Debug, Clone, Default)]
pub struct ParamsKeeper {
    subspaces: BTreeMap<String, Subspace>,
}

impl ParamsKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subspace; each name can be registered once
    pub fn register(&mut self, subspace: Subspace) -> Result<(), ParamsError> {
        if self.subspaces.contains_key(subspace.name()) {
            return Err(ParamsError::SubspaceExists(subspace.name().to_string()));
        }
        self.subspaces.insert(subspace.name().to_string(), subspace);
        Ok(())
    }

    pub fn get_subspace(&self, name: &str) -> Option<&Subspace> {
        self.subspaces.get(name)
    }

    pub fn subspaces(&self) -> impl Iterator<Item = &Subspace> {
        self.subspaces.values()
    }

    /// Build a store holding every declared key at its genesis value
    pub fn genesis_store(&self) -> ParamStore {
        let mut store = ParamStore::new();
        for subspace in self.subspaces.values() {
            subspace.init_genesis(&mut store);
        }
        store
    }
}
