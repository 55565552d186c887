use crate::config::AppConfig;
use crate::deployer;
use crate::errors::AppResult;
use clap::Args;
use std::path::PathBuf;

/// Validate configuration and artifact offline
#[derive(Args)]
pub struct CheckCommand {
    /// Config file path (default: deploy.toml in the working directory)
    #[arg(long)]
    config: Option<PathBuf>,

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
}

impl CheckCommand {
    pub fn run(&self) -> AppResult<()> {
        let mut app_config = AppConfig::load(self.config.as_deref())?;

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

        let plan = deployer::build_plan(&app_config.deployment)?;

        println!("Configuration OK");
        println!("{}", plan.describe());
        Ok(())
    }
}
