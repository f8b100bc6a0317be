// Types - Governance payloads and parameter values
// Principle: Plain data, decoded once, never reinterpreted

pub mod keys;
pub mod params;
pub mod proposal;

pub use keys::*;
pub use params::*;
pub use proposal::*;
