use crate::config::AppConfig;
use crate::deployer;
use crate::errors::AppResult;
use crate::rpc::EthRpcClient;
use crate::signer::build_signer;
use alloy::network::EthereumWallet;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Deploy the multisig contract
#[derive(Args)]
pub struct DeployCommand {
    /// Config file path (default: deploy.toml in the working directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Node RPC URL (overrides config)
    #[arg(long)]
    rpc_url: Option<String>,

    /// Expected chain id (overrides config)
    #[arg(long)]
    chain_id: Option<u64>,

    /// Contract name to deploy (overrides config)
    #[arg(long)]
    contract: Option<String>,

    /// Artifacts directory (overrides config)
    #[arg(long)]
    artifacts_dir: Option<PathBuf>,

    /// Owner address, repeated once per owner (replaces the configured list)
    #[arg(long = "owner", value_name = "ADDRESS")]
    owners: Vec<String>,

    /// Approval threshold (overrides config)
    #[arg(long)]
    threshold: Option<u64>,

    /// Required confirmations before reporting success (overrides config)
    #[arg(long)]
    confirmations: Option<u64>,

    /// Confirmation timeout in seconds (overrides config)
    #[arg(long)]
    confirmation_timeout: Option<u64>,

    /// Maximum node probe retries (overrides config)
    #[arg(long)]
    max_retries: Option<usize>,

    /// Per-request timeout in seconds (overrides config)
    #[arg(long)]
    request_timeout: Option<u64>,

    /// Validate and print the plan without submitting anything
    #[arg(long)]
    dry_run: bool,
}

impl DeployCommand {
    pub async fn run(&self) -> AppResult<()> {
        let mut app_config = AppConfig::load(self.config.as_deref())?;
        self.apply_overrides(&mut app_config);

        // Everything that can be rejected is rejected before any network
        // or key material is touched
        let plan = deployer::build_plan(&app_config.deployment)?;

        if self.dry_run {
            println!("Dry run - no transaction will be submitted");
            println!("{}", plan.describe());
            return Ok(());
        }

        let signer = build_signer(&app_config.signer)?;
        let deployer_address = signer.address();
        let wallet = EthereumWallet::from(signer);

        info!("Connecting to {}", app_config.network.rpc_url);
        let client = EthRpcClient::connect(app_config.network.clone(), wallet).await?;

        let outcome = deployer::execute(&plan, &client, deployer_address).await?;

        println!("{}", outcome.success_line());
        Ok(())
    }

    /// CLI arguments override config values
    fn apply_overrides(&self, app_config: &mut AppConfig) {
        if let Some(url) = self.rpc_url.clone() {
            app_config.network.rpc_url = url;
        }
        if let Some(chain_id) = self.chain_id {
            app_config.network.chain_id = Some(chain_id);
        }
        if let Some(contract) = self.contract.clone() {
            app_config.deployment.contract = contract;
        }
        if let Some(dir) = self.artifacts_dir.clone() {
            app_config.deployment.artifacts_dir = dir;
        }
        if !self.owners.is_empty() {
            app_config.deployment.owners = self.owners.clone();
        }
        if let Some(threshold) = self.threshold {
            app_config.deployment.threshold = threshold;
        }
        if let Some(confirmations) = self.confirmations {
            app_config.network.confirmations = confirmations;
        }
        if let Some(timeout) = self.confirmation_timeout {
            app_config.network.confirmation_timeout_seconds = timeout;
        }
        if let Some(retries) = self.max_retries {
            app_config.network.max_retries = retries;
        }
        if let Some(timeout) = self.request_timeout {
            app_config.network.request_timeout_seconds = timeout;
        }
    }
}
