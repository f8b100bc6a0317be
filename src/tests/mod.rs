// Tests module
// Governance params: the parameter matrix of the standard application through the guard
// Guard invariants: block is absolute, pass-through fidelity, atomicity, value independence

pub mod guard_invariants;

use crate::filter::{FilteringProposalHandler, ParamBlockList};
use crate::params::{Context, ParamChangeProposalHandler, ParamsKeeper};
use crate::types::{ParamChange, ParameterChangeProposal};
use std::sync::Arc;

/// Guarded and bare handlers over the standard keeper, with a genesis context
pub(crate) struct TestApp {
    pub guard: FilteringProposalHandler<ParamChangeProposalHandler>,
    pub raw: ParamChangeProposalHandler,
    pub ctx: Context,
}

impl TestApp {
    pub fn new<P: Into<crate::filter::BlockedPair>>(blocked: impl IntoIterator<Item = P>) -> Self {
        let keeper = Arc::new(ParamsKeeper::standard().unwrap());
        let ctx = Context::new(1, keeper.genesis_store());
        let raw = ParamChangeProposalHandler::new(keeper);
        let guard = FilteringProposalHandler::new(Arc::new(ParamBlockList::new(blocked)), raw.clone());

        Self { guard, raw, ctx }
    }

    pub fn permissive() -> Self {
        Self::new(Vec::<crate::filter::BlockedPair>::new())
    }
}

pub(crate) fn proposal(changes: &[(&str, &str, &str)]) -> ParameterChangeProposal {
    ParameterChangeProposal::with_changes(
        changes
            .iter()
            .map(|(subspace, key, value)| ParamChange::new(*subspace, *key, *value))
            .collect(),
    )
}
