// Gov - Execution side of governance proposals
// Principle: Handlers are interchangeable behind one narrow interface

pub mod handler;
pub mod router;

pub use handler::{ProposalError, ProposalHandler};
pub use router::{ContentHandler, GovRouter, ParamChangeRoute, TextRoute};
