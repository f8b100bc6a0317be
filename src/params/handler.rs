// Parameter change handler - Applies voted parameter changes to the store
// Principle: A proposal applies completely or not at all

use super::subspace::ParamsKeeper;
use super::ParamsError;
use crate::gov::{ProposalError, ProposalHandler};
use crate::params::Context;
use crate::types::ParameterChangeProposal;
use std::sync::Arc;
use tracing::{debug, info};

/// Writes every change of a proposal through its subspace
#[derive(Debug, Clone)]
pub struct ParamChangeProposalHandler {
    keeper: Arc<ParamsKeeper>,
}

impl ParamChangeProposalHandler {
    pub fn new(keeper: Arc<ParamsKeeper>) -> Self {
        Self { keeper }
    }

    pub fn keeper(&self) -> &ParamsKeeper {
        &self.keeper
    }
}

impl ProposalHandler for ParamChangeProposalHandler {
    fn handle(
        &self,
        ctx: &mut Context,
        proposal: &ParameterChangeProposal,
    ) -> Result<(), ProposalError> {
        if proposal.is_empty() {
            return Err(ParamsError::EmptyProposal.into());
        }

        // Stage on a copy so a failing change leaves the context untouched
        let mut staged = ctx.store().clone();

        for change in &proposal.changes {
            let subspace = self
                .keeper
                .get_subspace(&change.subspace)
                .ok_or_else(|| ParamsError::UnknownSubspace(change.subspace.clone()))?;

            debug!(
                "Setting {}/{} to {} at height {}",
                change.subspace,
                change.key,
                change.value,
                ctx.block_height()
            );
            subspace.update(&mut staged, &change.key, &change.value)?;
        }

        ctx.commit(staged);

        for change in &proposal.changes {
            info!(
                subspace = %change.subspace,
                key = %change.key,
                value = %change.value,
                "Parameter changed by governance"
            );
        }

        Ok(())
    }
}
