// Filtering handler - Vetoes parameter change proposals that touch blocked parameters
//
// Sits in front of the real parameter change handler and exposes the same
// interface. A proposal with a single blocked entry is rejected as a whole,
// before the wrapped handler sees it; anything else is forwarded unmodified
// and its result returned as is.

use super::blocklist::ParamBlockList;
use crate::gov::{ProposalError, ProposalHandler};
use crate::params::Context;
use crate::types::ParameterChangeProposal;
use std::sync::Arc;
use tracing::{debug, warn};

/// Blocklist guard around a parameter change handler
#[derive(Debug, Clone)]
pub struct FilteringProposalHandler<H> {
    blocklist: Arc<ParamBlockList>,
    inner: H,
}

impl<H: ProposalHandler> FilteringProposalHandler<H> {
    pub fn new(blocklist: Arc<ParamBlockList>, inner: H) -> Self {
        Self { blocklist, inner }
    }

    pub fn blocklist(&self) -> &ParamBlockList {
        &self.blocklist
    }

    /// The wrapped handler
    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H: ProposalHandler> ProposalHandler for FilteringProposalHandler<H> {
    fn handle(
        &self,
        ctx: &mut Context,
        proposal: &ParameterChangeProposal,
    ) -> Result<(), ProposalError> {
        if let Some(change) = self.blocklist.first_blocked(&proposal.changes) {
            warn!(
                "Rejecting proposal {:?}: parameter {} in subspace {} is blocked",
                proposal.title, change.key, change.subspace
            );
            return Err(ProposalError::BlockedParameter {
                subspace: change.subspace.clone(),
                key: change.key.clone(),
            });
        }

        debug!(
            "Proposal {:?} clear of blocked parameters ({} changes), delegating",
            proposal.title,
            proposal.changes.len()
        );
        self.inner.handle(ctx, proposal)
    }
}
