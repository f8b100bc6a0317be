// Proposal types - Governance content submitted for execution
// Principle: A proposal is read-only input, executed exactly as voted

use serde::{Deserialize, Serialize};
use std::fmt;

/// Route of parameter change proposals
pub const PARAMS_ROUTE: &str = "params";

/// Route of plain text proposals
pub const GOV_ROUTE: &str = "gov";

/// A single parameter change
///
/// `value` is the raw JSON encoding of the new value. It is only decoded by
/// the module owning the subspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParamChange {
    pub subspace: String,
    pub key: String,
    pub value: String,
}

impl ParamChange {
    pub fn new(
        subspace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            subspace: subspace.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for ParamChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} = {}", self.subspace, self.key, self.value)
    }
}

/// An ordered set of parameter changes voted as a single unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterChangeProposal {
    /// Short title
    #[serde(default)]
    pub title: String,

    /// Justification shown to voters
    #[serde(default)]
    pub description: String,

    /// Changes, applied in order
    pub changes: Vec<ParamChange>,
}

impl ParameterChangeProposal {
    /// Create a new proposal
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        changes: Vec<ParamChange>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            changes,
        }
    }

    /// Create an untitled proposal from its changes
    pub fn with_changes(changes: Vec<ParamChange>) -> Self {
        Self {
            changes,
            ..Default::default()
        }
    }

    /// Check if the proposal carries no change at all
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Content of a governance proposal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProposalContent {
    /// Signalling proposal with no on-chain effect
    Text { title: String, description: String },

    /// Parameter change proposal
    ParameterChange(ParameterChangeProposal),
}

impl ProposalContent {
    /// Route of the handler responsible for this content
    pub fn route(&self) -> &'static str {
        match self {
            ProposalContent::Text { .. } => GOV_ROUTE,
            ProposalContent::ParameterChange(_) => PARAMS_ROUTE,
        }
    }

    /// Name of the content type, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            ProposalContent::Text { .. } => "Text",
            ProposalContent::ParameterChange(_) => "ParameterChange",
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ProposalContent::Text { title, .. } => title,
            ProposalContent::ParameterChange(p) => &p.title,
        }
    }
}
