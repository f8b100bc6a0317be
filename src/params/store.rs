// Parameter store - Current parameter values and the execution context carrying them

use crate::types::ParamValue;
use std::collections::BTreeMap;

/// Current parameter values keyed by (subspace, key)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamStore {
    values: BTreeMap<(String, String), ParamValue>,
}

impl ParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, subspace: &str, key: &str) -> Option<&ParamValue> {
        self.values.get(&(subspace.to_string(), key.to_string()))
    }

    pub fn set(&mut self, subspace: &str, key: &str, value: ParamValue) {
        self.values
            .insert((subspace.to_string(), key.to_string()), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values, sorted by subspace then key
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &ParamValue)> {
        self.values
            .iter()
            .map(|((subspace, key), value)| (subspace.as_str(), key.as_str(), value))
    }
}

/// Execution context of a single proposal
///
/// Handlers write through the context; whatever it holds once `handle`
/// returns is the state the caller commits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    block_height: u64,
    store: ParamStore,
}

impl Context {
    pub fn new(block_height: u64, store: ParamStore) -> Self {
        Self { block_height, store }
    }

    pub fn block_height(&self) -> u64 {
        self.block_height
    }

    pub fn store(&self) -> &ParamStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ParamStore {
        &mut self.store
    }

    /// Replace the whole store at once
    pub fn commit(&mut self, store: ParamStore) {
        self.store = store;
    }

    pub fn into_store(self) -> ParamStore {
        self.store
    }
}
