// Runner - Command execution for the paramfilter binary

use anyhow::Context as _;
use paramfilter::filter::guarded_params_handler;
use paramfilter::{
    Context, GuardConfig, ParamChange, ParameterChangeProposal, ParamsKeeper, ProposalError,
    ProposalHandler,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Load the guard configuration, falling back to the chain default
pub fn load_config(path: Option<&Path>) -> anyhow::Result<GuardConfig> {
    let config = match path {
        Some(path) => {
            info!("Loading guard configuration from {}", path.display());
            GuardConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?
        }
        None => {
            debug!("No configuration file given, using the default blocklist");
            GuardConfig::default()
        }
    };
    config.validate()?;
    Ok(config)
}

/// Read a parameter change proposal from a JSON file
pub fn load_proposal(path: &Path) -> anyhow::Result<ParameterChangeProposal> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read proposal {}", path.display()))?;
    let proposal = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse proposal {}", path.display()))?;
    Ok(proposal)
}

/// Print the configured blocklist
pub fn list_blocked(config: &GuardConfig) {
    let list = config.block_list();
    if list.is_empty() {
        println!("No parameters are blocked.");
        return;
    }

    println!("{} blocked parameter(s):", list.len());
    for pair in list.pairs() {
        println!("  {}", pair);
    }
}

/// Entries of the proposal the blocklist rejects
pub fn check_proposal<'a>(
    config: &GuardConfig,
    proposal: &'a ParameterChangeProposal,
) -> Vec<&'a ParamChange> {
    config.block_list().blocked_changes(proposal)
}

/// Execute the proposal through the guarded handler on a fresh genesis context
pub fn simulate_proposal(
    config: &GuardConfig,
    proposal: &ParameterChangeProposal,
    height: u64,
) -> anyhow::Result<(Result<(), ProposalError>, Context)> {
    let keeper = Arc::new(ParamsKeeper::standard()?);
    let mut ctx = Context::new(height, keeper.genesis_store());

    let handler = guarded_params_handler(config.block_list(), keeper);
    let result = handler.handle(&mut ctx, proposal);
    Ok((result, ctx))
}

/// Print the state of every parameter the proposal targets
pub fn print_changed(ctx: &Context, proposal: &ParameterChangeProposal) -> anyhow::Result<()> {
    for change in &proposal.changes {
        match ctx.store().get(&change.subspace, &change.key) {
            Some(value) => println!("  {}/{} = {}", change.subspace, change.key, value.to_json()?),
            None => println!("  {}/{} (unset)", change.subspace, change.key),
        }
    }
    Ok(())
}
