// Proposal handler - The capability every parameter change executor implements

use crate::params::{Context, ParamsError};
use crate::types::ParameterChangeProposal;
use std::sync::Arc;

/// Applies a parameter change proposal within a context
///
/// Implementations either apply every change or return an error; the
/// context of a failed call is left as it was.
pub trait ProposalHandler {
    fn handle(
        &self,
        ctx: &mut Context,
        proposal: &ParameterChangeProposal,
    ) -> Result<(), ProposalError>;
}

impl<H: ProposalHandler + ?Sized> ProposalHandler for &H {
    fn handle(
        &self,
        ctx: &mut Context,
        proposal: &ParameterChangeProposal,
    ) -> Result<(), ProposalError> {
        (**self).handle(ctx, proposal)
    }
}

impl<H: ProposalHandler + ?Sized> ProposalHandler for Box<H> {
    fn handle(
        &self,
        ctx: &mut Context,
        proposal: &ParameterChangeProposal,
    ) -> Result<(), ProposalError> {
        (**self).handle(ctx, proposal)
    }
}

impl<H: ProposalHandler + ?Sized> ProposalHandler for Arc<H> {
    fn handle(
        &self,
        ctx: &mut Context,
        proposal: &ParameterChangeProposal,
    ) -> Result<(), ProposalError> {
        (**self).handle(ctx, proposal)
    }
}

/// Errors returned to the governance executor
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProposalError {
    /// The proposal targets a parameter that governance may not change
    #[error("parameter {key} in subspace {subspace} cannot be changed by governance")]
    BlockedParameter { subspace: String, key: String },

    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error("no handler registered for route {0}")]
    UnknownRoute(String),

    #[error("unrecognized {route} proposal content: {kind}")]
    UnrecognizedContent { route: String, kind: String },
}

impl ProposalError {
    /// Check if this is a blocklist rejection
    pub fn is_blocked(&self) -> bool {
        matches!(self, ProposalError::BlockedParameter { .. })
    }
}
