//! Signing key construction
//!
//! The signer is built once from configuration and handed to the deployment
//! path explicitly. Nothing here falls back to an ambient "first available
//! account" from the node; an unconfigured key is a hard error.

use crate::config::SignerConfig;
use crate::errors::{AppError, AppResult};
use alloy::signers::local::PrivateKeySigner;
use std::env;
use tracing::info;

/// Build the transaction signer from configuration. An inline
/// `signer.private_key` takes precedence; otherwise the key is read from the
/// environment variable named by `signer.private_key_env`.
pub fn build_signer(config: &SignerConfig) -> AppResult<PrivateKeySigner> {
    let raw = match &config.private_key {
        Some(key) => key.clone(),
        None => env::var(&config.private_key_env).map_err(|_| {
            AppError::Signer(format!(
                "no signing key: set {} or configure signer.private_key",
                config.private_key_env
            ))
        })?,
    };

    let signer: PrivateKeySigner = raw
        .trim()
        .parse()
        .map_err(|e| AppError::Signer(format!("invalid private key: {e}")))?;

    info!("Signer address: {}", signer.address());
    Ok(signer)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known development key (anvil/hardhat account 0), safe to embed
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_inline_key_takes_precedence() {
        let config = SignerConfig {
            private_key: Some(DEV_KEY.to_string()),
            private_key_env: "MULTISIG_DEPLOY_TEST_UNSET_VAR".to_string(),
        };
        let signer = build_signer(&config).unwrap();
        assert_eq!(signer.address().to_string(), DEV_ADDRESS);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let config = SignerConfig {
            private_key: None,
            private_key_env: "MULTISIG_DEPLOY_TEST_UNSET_VAR".to_string(),
        };
        let err = build_signer(&config).unwrap_err();
        assert!(err.to_string().contains("no signing key"));
    }

    #[test]
    fn test_rejects_malformed_key() {
        let config = SignerConfig {
            private_key: Some("0xnot-a-key".to_string()),
            private_key_env: "DEPLOYER_PRIVATE_KEY".to_string(),
        };
        assert!(build_signer(&config).is_err());
    }
}
