// paramfilter - Governance guard for immutable protocol parameters
// Principle: Governance can tune the protocol, never redefine it

pub mod config;
pub mod filter;
pub mod gov;
pub mod params;
pub mod types;

#[cfg(test)]
mod tests;

pub use config::GuardConfig;
pub use filter::{guarded_params_handler, BlockedPair, FilteringProposalHandler, ParamBlockList};
pub use gov::{ProposalError, ProposalHandler};
pub use params::{Context, ParamChangeProposalHandler, ParamStore, ParamsError, ParamsKeeper};
pub use types::{ParamChange, ParameterChangeProposal, ProposalContent};
