use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from deploy.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub network: NetworkConfig,
    pub signer: SignerConfig,
    pub deployment: DeploymentConfig,
}

/// JSON-RPC endpoint configuration including the confirmation-wait policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub rpc_url: String,
    /// Expected chain id. When set, the node's reported chain id must match
    /// before anything is submitted.
    pub chain_id: Option<u64>,
    pub request_timeout_seconds: u64,
    pub confirmations: u64,
    pub confirmation_timeout_seconds: u64,
    pub max_retries: usize,
    pub initial_backoff_ms: u64,
    pub backoff_multiplier: f64,
    pub max_backoff_seconds: u64,
}

/// Signing key configuration. The key itself is normally supplied through the
/// environment variable named by `private_key_env`; an inline `private_key`
/// takes precedence when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignerConfig {
    pub private_key: Option<String>,
    pub private_key_env: String,
}

/// What to deploy: contract name, artifact location and constructor data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentConfig {
    pub contract: String,
    pub artifacts_dir: PathBuf,
    #[serde(default)]
    pub owners: Vec<String>,
    pub threshold: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: None,
            request_timeout_seconds: 30,
            confirmations: 1,
            confirmation_timeout_seconds: 300,
            max_retries: 3,
            initial_backoff_ms: 500,
            backoff_multiplier: 2.0,
            max_backoff_seconds: 30,
        }
    }
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            private_key: None,
            private_key_env: "DEPLOYER_PRIVATE_KEY".to_string(),
        }
    }
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            contract: "ProxyAdminMultisig".to_string(),
            artifacts_dir: PathBuf::from("./artifacts"),
            owners: Vec::new(),
            threshold: 0,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            signer: SignerConfig::default(),
            deployment: DeploymentConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a deploy.toml file and environment variables.
    /// Environment variables (MULTISIG_DEPLOY_*) take precedence over file
    /// configuration; CLI flags are applied on top by the commands.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let network = NetworkConfig::default();
        let signer = SignerConfig::default();
        let deployment = DeploymentConfig::default();

        let mut builder = Config::builder()
            // Start with default values
            .set_default("network.rpc_url", network.rpc_url)?
            .set_default(
                "network.request_timeout_seconds",
                network.request_timeout_seconds as i64,
            )?
            .set_default("network.confirmations", network.confirmations as i64)?
            .set_default(
                "network.confirmation_timeout_seconds",
                network.confirmation_timeout_seconds as i64,
            )?
            .set_default("network.max_retries", network.max_retries as i64)?
            .set_default("network.initial_backoff_ms", network.initial_backoff_ms as i64)?
            .set_default("network.backoff_multiplier", network.backoff_multiplier)?
            .set_default(
                "network.max_backoff_seconds",
                network.max_backoff_seconds as i64,
            )?
            .set_default("signer.private_key_env", signer.private_key_env)?
            .set_default("deployment.contract", deployment.contract)?
            .set_default(
                "deployment.artifacts_dir",
                deployment.artifacts_dir.to_string_lossy().to_string(),
            )?
            .set_default("deployment.threshold", deployment.threshold as i64)?;

        // Load from an explicit file when given (must exist), otherwise from
        // deploy.toml in the working directory when present
        builder = match config_path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("deploy").required(false)),
        };

        // Override with environment variables, e.g.
        // MULTISIG_DEPLOY_NETWORK__RPC_URL maps to network.rpc_url
        let built = builder
            .add_source(
                Environment::with_prefix("MULTISIG_DEPLOY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        built.try_deserialize()
    }

    /// Get config values for commands that can run with defaults when no
    /// file is present (connectivity probing)
    pub fn get_defaults(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::load(config_path) {
            Ok(config) => Ok(config),
            Err(e) if config_path.is_some() => Err(e),
            Err(_) => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_defaults() {
        let config = NetworkConfig::default();

        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.chain_id, None);
        assert_eq!(config.confirmations, 1);
        assert_eq!(config.confirmation_timeout_seconds, 300);
        assert!(config.initial_backoff_ms > 0);
        assert!(config.backoff_multiplier > 1.0);
        assert!(config.max_backoff_seconds > 0);
    }

    #[test]
    fn test_deployment_defaults_require_explicit_owners() {
        let config = DeploymentConfig::default();

        assert_eq!(config.contract, "ProxyAdminMultisig");
        assert!(config.owners.is_empty());
        // An unconfigured threshold is out of range on purpose so that a
        // bare default config can never reach submission
        assert_eq!(config.threshold, 0);
    }

    #[test]
    fn test_get_defaults_without_file() {
        let defaults = AppConfig::get_defaults(None);
        assert!(defaults.is_ok());

        let config = defaults.unwrap();
        assert_eq!(config.signer.private_key_env, "DEPLOYER_PRIVATE_KEY");
        assert!(config.signer.private_key.is_none());
    }

    #[test]
    fn test_get_defaults_with_missing_explicit_file_fails() {
        let result = AppConfig::get_defaults(Some(Path::new("/nonexistent/deploy.toml")));
        assert!(result.is_err());
    }
}
