// Params - Governable parameter subsystem
// Principle: Every key is declared with its type; nothing undeclared can be written

pub mod genesis;
pub mod handler;
pub mod store;
pub mod subspace;

pub use handler::ParamChangeProposalHandler;
pub use store::{Context, ParamStore};
pub use subspace::{ParamKind, ParamsKeeper, Subspace};

// =============================================================================
// ERRORS
// =============================================================================

/// Errors raised while applying parameter changes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamsError {
    #[error("parameter change proposal has no changes")]
    EmptyProposal,

    #[error("unknown subspace: {0}")]
    UnknownSubspace(String),

    #[error("unknown parameter {key} in subspace {subspace}")]
    UnknownKey { subspace: String, key: String },

    #[error("invalid value for {subspace}/{key}: {reason}")]
    InvalidValue {
        subspace: String,
        key: String,
        reason: String,
    },

    #[error("subspace already registered: {0}")]
    SubspaceExists(String),
}
