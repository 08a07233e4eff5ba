mod cli;
mod config;
mod prompt;
mod service;

use anyhow::Result;
use clap::Parser;
use cli::{ApplyRequest, Cli};
use config::Config;
use prompt::TerminalPrompter;
use service::ApplyService;
use skillcast_generator::manual_install_commands;
use skillcast_types::{Agent, ApplyError};
use std::process::ExitCode;
use tracing::debug;

const GENERATOR_HOMEPAGE: &str = "https://github.com/intellectronica/ruler";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Reject bad agent lists before touching the filesystem
    cli.select_agents()?;

    let root = cli.resolve_root()?;
    let config = Config::load(&root)?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    skillcast_logging::init_logging(level)?;
    debug!("Tool root: {}", root.display());

    let request = ApplyRequest::from_cli(&cli, &root)?;
    let result = ApplyService::new(config, root)
        .run(&request, &TerminalPrompter)
        .await?;

    if result.copied.is_empty() {
        println!("\nNo files were copied.");
    } else {
        for file in &result.copied {
            println!("✓ Created {}", file);
        }
        println!(
            "\nDone! Skills are now available in {}.",
            request.agent_list()
        );
    }
    Ok(())
}

fn report_error(err: &anyhow::Error) {
    eprintln!("Error: {err:#}");

    let Some(apply_err) = err.downcast_ref::<ApplyError>() else {
        return;
    };
    if matches!(apply_err, ApplyError::UnknownAgents { .. }) {
        eprintln!("Supported agents: {}", Agent::supported_list());
    }
    let Some(package) = apply_err.install_hint() else {
        return;
    };

    eprintln!("\nPlease install it manually:");
    for command in manual_install_commands(package) {
        eprintln!("  {}", command);
    }
    eprintln!("\nMore info: {}", GENERATOR_HOMEPAGE);
}
