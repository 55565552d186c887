//! Deployment core: plan building and execution
//!
//! Planning is pure and offline. It validates the configured owner set and
//! threshold, resolves the contract artifact and assembles the init code
//! (creation bytecode followed by the ABI-encoded constructor arguments for
//! `(address[] owners, uint256 threshold)`). Execution takes a plan and a
//! connected client and drives submit / await-confirmation / report.

use crate::artifacts;
use crate::config::DeploymentConfig;
use crate::errors::AppResult;
use crate::rpc::EthRpcClient;
use crate::types::{DeploymentOutcome, DeploymentPlan};
use crate::validation;
use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolValue;
use tracing::{info, warn};

/// ABI-encode the constructor arguments `(address[] owners, uint256 threshold)`
pub fn encode_constructor_args(owners: &[Address], threshold: u64) -> Vec<u8> {
    (owners.to_vec(), U256::from(threshold)).abi_encode_params()
}

/// Validate the deployment configuration and assemble a submission-ready plan
pub fn build_plan(deployment: &DeploymentConfig) -> AppResult<DeploymentPlan> {
    let owners = validation::validate_owners(&deployment.owners)?;
    validation::validate_threshold(deployment.threshold, owners.len())?;

    let artifact = artifacts::load_artifact(&deployment.artifacts_dir, &deployment.contract)?;

    let mut init_code = artifact.bytecode.to_vec();
    init_code.extend_from_slice(&encode_constructor_args(&owners, deployment.threshold));

    Ok(DeploymentPlan {
        contract: artifact.name,
        owners,
        threshold: deployment.threshold,
        init_code: Bytes::from(init_code),
        artifact_path: artifact.path,
    })
}

/// Execute a plan against a connected client: submit the creation
/// transaction and wait for confirmation. `deployer_address` is the address
/// of the injected signer, used for the pre-flight balance check.
pub async fn execute(
    plan: &DeploymentPlan,
    client: &EthRpcClient,
    deployer_address: Address,
) -> AppResult<DeploymentOutcome> {
    info!(
        "Deploying {} with {} owner(s), threshold {}",
        plan.contract,
        plan.owners.len(),
        plan.threshold
    );

    let balance = client.balance(deployer_address).await?;
    if balance.is_zero() {
        warn!(
            "Deployer account {} has zero balance; submission will likely fail",
            deployer_address
        );
    }

    let outcome = client.send_deployment(plan).await?;

    match outcome.block_number {
        Some(block) => info!(
            "Deployment confirmed in block {} (gas used {})",
            block, outcome.gas_used
        ),
        None => info!("Deployment confirmed (gas used {})", outcome.gas_used),
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(byte: u8) -> Address {
        Address::from([byte; 20])
    }

    #[test]
    fn test_constructor_encoding_layout() {
        // Canonical ABI encoding of (address[3], uint256 = 2):
        // word 0: offset to the array tail (0x40)
        // word 1: threshold
        // word 2: array length
        // words 3..6: left-padded owner addresses
        let owners = vec![owner(0x11), owner(0x22), owner(0x33)];
        let encoded = encode_constructor_args(&owners, 2);

        assert_eq!(encoded.len(), 6 * 32);
        assert_eq!(U256::from_be_slice(&encoded[0..32]), U256::from(0x40));
        assert_eq!(U256::from_be_slice(&encoded[32..64]), U256::from(2));
        assert_eq!(U256::from_be_slice(&encoded[64..96]), U256::from(3));
        for (i, o) in owners.iter().enumerate() {
            let word = &encoded[96 + i * 32..128 + i * 32];
            assert_eq!(&word[..12], &[0u8; 12]);
            assert_eq!(&word[12..], o.as_slice());
        }
    }

    #[test]
    fn test_constructor_encoding_single_owner() {
        let owners = vec![owner(0xaa)];
        let encoded = encode_constructor_args(&owners, 1);

        assert_eq!(encoded.len(), 4 * 32);
        assert_eq!(U256::from_be_slice(&encoded[64..96]), U256::from(1));
        assert_eq!(&encoded[96 + 12..128], owners[0].as_slice());
    }
}
