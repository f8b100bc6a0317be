// paramfilter - Entry point
// Principle: Show operators what governance cannot touch

mod cli;

use clap::Parser;
use cli::runner::{
    check_proposal, list_blocked, load_config, load_proposal, print_changed, simulate_proposal,
};
use cli::{Cli, Commands};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_filter = if cli.verbose {
        "debug"
    } else {
        cli.log_level.as_str()
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_filter)),
        )
        .init();

    let config = load_config(cli.config.as_deref()).map_err(|e| {
        error!("Configuration error: {:#}", e);
        e
    })?;

    match cli.command {
        Commands::Blocked => {
            list_blocked(&config);
        }

        Commands::Check(cmd) => {
            let proposal = load_proposal(&cmd.proposal)?;
            let offenders = check_proposal(&config, &proposal);

            if offenders.is_empty() {
                println!(
                    "ACCEPTED: none of the {} change(s) touch a blocked parameter",
                    proposal.changes.len()
                );
            } else {
                println!("REJECTED: the proposal changes blocked parameter(s):");
                for change in offenders {
                    println!("  {}", change);
                }
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Simulate(cmd) => {
            let proposal = load_proposal(&cmd.proposal)?;
            info!(
                "Simulating proposal {:?} at height {}",
                proposal.title, cmd.height
            );

            let (result, ctx) = simulate_proposal(&config, &proposal, cmd.height)?;
            match result {
                Ok(()) => {
                    println!("APPLIED:");
                    print_changed(&ctx, &proposal)?;
                }
                Err(e) => {
                    println!("FAILED: {}", e);
                    println!("Parameters left unchanged:");
                    print_changed(&ctx, &proposal)?;
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
