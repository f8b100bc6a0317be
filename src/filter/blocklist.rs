// Parameter blocklist - (subspace, key) pairs governance may never change
//
// Matching is exact on both parts: no prefixes, no patterns, no case folding.
// The list is frozen at construction and shared read-only afterwards.

use crate::types::{ParamChange, ParameterChangeProposal};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A parameter that may not be changed by governance
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockedPair {
    pub subspace: String,
    pub key: String,
}

impl BlockedPair {
    pub fn new(subspace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            subspace: subspace.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for BlockedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.subspace, self.key)
    }
}

impl From<(&str, &str)> for BlockedPair {
    fn from((subspace, key): (&str, &str)) -> Self {
        Self::new(subspace, key)
    }
}

impl From<[&str; 2]> for BlockedPair {
    fn from([subspace, key]: [&str; 2]) -> Self {
        Self::new(subspace, key)
    }
}

impl From<(String, String)> for BlockedPair {
    fn from((subspace, key): (String, String)) -> Self {
        Self { subspace, key }
    }
}

/// Immutable set of blocked parameters
///
/// Indexed by subspace then key so lookups borrow the caller's strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamBlockList {
    blocked: HashMap<String, HashSet<String>>,
    len: usize,
}

impl ParamBlockList {
    /// Build a blocklist; duplicates collapse, an empty input blocks nothing
    pub fn new<I, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<BlockedPair>,
    {
        let mut blocked: HashMap<String, HashSet<String>> = HashMap::new();
        let mut len = 0;

        for pair in pairs {
            let BlockedPair { subspace, key } = pair.into();
            if blocked.entry(subspace).or_default().insert(key) {
                len += 1;
            }
        }

        Self { blocked, len }
    }

    /// A blocklist that blocks nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if `key` in `subspace` is blocked
    pub fn is_blocked(&self, subspace: &str, key: &str) -> bool {
        self.blocked
            .get(subspace)
            .map_or(false, |keys| keys.contains(key))
    }

    pub fn contains(&self, pair: &BlockedPair) -> bool {
        self.is_blocked(&pair.subspace, &pair.key)
    }

    /// Number of distinct blocked pairs
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Blocked pairs, sorted
    pub fn pairs(&self) -> Vec<BlockedPair> {
        let mut pairs: Vec<BlockedPair> = self
            .blocked
            .iter()
            .flat_map(|(subspace, keys)| {
                keys.iter().map(move |key| BlockedPair::new(subspace.as_str(), key.as_str()))
            })
            .collect();
        pairs.sort();
        pairs
    }

    /// First change, in proposal order, that targets a blocked parameter
    pub fn first_blocked<'a>(&self, changes: &'a [ParamChange]) -> Option<&'a ParamChange> {
        changes
            .iter()
            .find(|change| self.is_blocked(&change.subspace, &change.key))
    }

    /// Every change of the proposal that targets a blocked parameter, in order
    pub fn blocked_changes<'a>(&self, proposal: &'a ParameterChangeProposal) -> Vec<&'a ParamChange> {
        proposal
            .changes
            .iter()
            .filter(|change| self.is_blocked(&change.subspace, &change.key))
            .collect()
    }
}

impl<P: Into<BlockedPair>> FromIterator<P> for ParamBlockList {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}
