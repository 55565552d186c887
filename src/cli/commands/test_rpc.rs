use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::rpc::EthRpcClient;
use crate::signer::build_signer;
use clap::Args;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Test node RPC connectivity
#[derive(Args)]
pub struct TestRpcCommand {
    /// Config file path (default: deploy.toml in the working directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Node RPC URL (overrides config)
    #[arg(long)]
    rpc_url: Option<String>,

    /// Expected chain id (overrides config)
    #[arg(long)]
    chain_id: Option<u64>,

    /// Maximum node probe retries (overrides config)
    #[arg(long)]
    max_retries: Option<usize>,
}

impl TestRpcCommand {
    pub async fn run(&self) -> AppResult<()> {
        info!("=== Testing Node RPC Connection ===");

        // Load configuration or use defaults
        let app_config = AppConfig::get_defaults(self.config.as_deref())?;
        let mut network = app_config.network;

        // Override with CLI arguments
        if let Some(url) = &self.rpc_url {
            network.rpc_url = url.clone();
        }
        if let Some(chain_id) = self.chain_id {
            network.chain_id = Some(chain_id);
        }
        if let Some(retries) = self.max_retries {
            network.max_retries = retries;
        }

        info!("Testing connection to: {}", network.rpc_url);

        match EthRpcClient::connect_readonly(network).await {
            Ok(client) => {
                let chain_id = client.chain_id().await?;
                println!("Node RPC connection test PASSED");
                println!("Chain id: {}", chain_id);

                // Report the configured signer when one is available; a
                // missing key is fine for a connectivity probe
                match build_signer(&app_config.signer) {
                    Ok(signer) => {
                        let balance = client.balance(signer.address()).await?;
                        println!("Signer: {} (balance {} wei)", signer.address(), balance);
                    }
                    Err(e) => debug!("No signer to report: {}", e),
                }

                Ok(())
            }
            Err(e) => {
                error!("Failed to connect: {}", e);
                println!("Node RPC connection test FAILED");
                println!("Error: {}", e);
                println!("\nTroubleshooting tips:");
                println!("1. Check that the node is running and reachable");
                println!("2. Verify the RPC URL is correct");
                println!("3. If chain_id is configured, confirm it matches the node's network");

                Err(e.into())
            }
        }
    }
}
