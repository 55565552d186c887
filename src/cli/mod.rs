use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub mod commands;

/// ProxyAdminMultisig deployment tool
#[derive(Parser)]
#[command(name = "multisig-deploy")]
#[command(about = "Parameterized ProxyAdminMultisig deployment tool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Deploy the multisig contract and print the deployed address
    Deploy(commands::deploy::DeployCommand),
    /// Validate configuration and artifact without touching the network
    Check(commands::check::CheckCommand),
    /// Test node RPC connectivity
    TestRpc(commands::test_rpc::TestRpcCommand),
}

pub async fn run() -> AppResult<()> {
    // Initialise tracing on stderr so stdout stays reserved for the
    // success line and plan output. Uses RUST_LOG (defaults to "info").
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy(command) => command.run().await,
        Commands::Check(command) => command.run(),
        Commands::TestRpc(command) => command.run().await,
    }
}
