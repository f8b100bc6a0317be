// CLI - Command line interface of the governance guard
// Principle: Operators can see exactly what the node will refuse

pub mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// paramfilter - Inspect the governance parameter blocklist
#[derive(Parser, Debug)]
#[command(name = "paramfilter")]
#[command(author = "KratOs Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check parameter change proposals against the governance blocklist")]
#[command(long_about = r#"
Some protocol parameters cannot be changed by governance. A parameter change
proposal touching any of them is rejected as a whole, before any change applies.

List the blocked parameters:
  paramfilter blocked

Check a proposal file:
  paramfilter check proposal.json

Execute a proposal against genesis parameters:
  paramfilter simulate proposal.json
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Guard configuration file (TOML); the chain default when omitted
    #[arg(short, long, global = true, env = "PARAMFILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", env = "PARAMFILTER_LOG")]
    pub log_level: String,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List blocked parameters
    Blocked,

    /// Check a proposal against the blocklist
    Check(CheckCmd),

    /// Execute a proposal against genesis parameters
    Simulate(SimulateCmd),
}

/// Check a proposal file
#[derive(Parser, Debug)]
pub struct CheckCmd {
    /// Proposal file (JSON)
    pub proposal: PathBuf,
}

/// Simulate proposal execution
#[derive(Parser, Debug)]
pub struct SimulateCmd {
    /// Proposal file (JSON)
    pub proposal: PathBuf,

    /// Block height of the simulated execution
    #[arg(long, default_value = "1")]
    pub height: u64,
}
