// Filter - Governance guard for immutable protocol parameters
// Principle: Some parameters belong to the protocol, not to governance

pub mod blocklist;
pub mod handler;

pub use blocklist::{BlockedPair, ParamBlockList};
pub use handler::FilteringProposalHandler;

use crate::params::{ParamChangeProposalHandler, ParamsKeeper};
use std::sync::Arc;

/// The parameter change handler of the chain, guarded by `blocklist`
pub fn guarded_params_handler(
    blocklist: Arc<ParamBlockList>,
    keeper: Arc<ParamsKeeper>,
) -> FilteringProposalHandler<ParamChangeProposalHandler> {
    FilteringProposalHandler::new(blocklist, ParamChangeProposalHandler::new(keeper))
}
