use crate::config::NetworkConfig;
use crate::errors::{RpcError, RpcResult};
use crate::rpc::{calculate_next_backoff, execute_with_timeout};
use crate::types::{DeploymentOutcome, DeploymentPlan};
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// EVM JSON-RPC client wrapping an alloy provider.
///
/// Connecting probes the node with the configured retry policy before any
/// state-changing call is possible, and verifies the chain id against the
/// configuration when one is set. Submission itself is single-attempt: once
/// a creation transaction may have been broadcast it is never resent.
pub struct EthRpcClient {
    provider: DynProvider,
    config: NetworkConfig,
}

impl EthRpcClient {
    /// Connect with a wallet attached, for submitting deployments
    pub async fn connect(config: NetworkConfig, wallet: EthereumWallet) -> RpcResult<Self> {
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&config.rpc_url)
            .await
            .map_err(|e| {
                RpcError::ConnectionFailed(format!(
                    "failed to set up provider for {}: {e}",
                    config.rpc_url
                ))
            })?
            .erased();

        Self::establish(provider, config).await
    }

    /// Connect without a signing key, for read-only probing
    pub async fn connect_readonly(config: NetworkConfig) -> RpcResult<Self> {
        let provider = ProviderBuilder::new()
            .connect(&config.rpc_url)
            .await
            .map_err(|e| {
                RpcError::ConnectionFailed(format!(
                    "failed to set up provider for {}: {e}",
                    config.rpc_url
                ))
            })?
            .erased();

        Self::establish(provider, config).await
    }

    async fn establish(provider: DynProvider, config: NetworkConfig) -> RpcResult<Self> {
        let chain_id = probe_with_retry(&provider, &config).await?;

        if let Some(expected) = config.chain_id {
            if chain_id != expected {
                return Err(RpcError::ChainIdMismatch {
                    expected,
                    actual: chain_id,
                });
            }
        }

        info!("Connected to {} (chain id {})", config.rpc_url, chain_id);
        Ok(Self { provider, config })
    }

    /// The chain id reported by the connected node
    pub async fn chain_id(&self) -> RpcResult<u64> {
        match execute_with_timeout(self.config.request_timeout_seconds, async {
            self.provider
                .get_chain_id()
                .await
                .map_err(|e| RpcError::ConnectionFailed(e.to_string()))
        })
        .await
        {
            Ok(result) => result,
            Err(_) => Err(RpcError::ConnectionFailed(format!(
                "eth_chainId timed out after {}s",
                self.config.request_timeout_seconds
            ))),
        }
    }

    /// Current balance of an account, in wei
    pub async fn balance(&self, address: Address) -> RpcResult<U256> {
        match execute_with_timeout(self.config.request_timeout_seconds, async {
            self.provider
                .get_balance(address)
                .await
                .map_err(|e| RpcError::ConnectionFailed(e.to_string()))
        })
        .await
        {
            Ok(result) => result,
            Err(_) => Err(RpcError::ConnectionFailed(format!(
                "eth_getBalance timed out after {}s",
                self.config.request_timeout_seconds
            ))),
        }
    }

    /// Submit the creation transaction for a plan and wait for it to be
    /// confirmed, returning the deployed address and receipt facts.
    ///
    /// The wait is bounded by `confirmation_timeout_seconds`; on timeout the
    /// transaction hash is surfaced in the error so the operator can follow
    /// the transaction that may still land on-chain.
    pub async fn send_deployment(&self, plan: &DeploymentPlan) -> RpcResult<DeploymentOutcome> {
        let tx = TransactionRequest::default().with_deploy_code(plan.init_code.clone());

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| RpcError::SubmissionFailed(e.to_string()))?;
        let tx_hash = *pending.tx_hash();
        info!("Creation transaction broadcast: {}", tx_hash);
        info!(
            "Awaiting {} confirmation(s), timeout {}s",
            self.config.confirmations, self.config.confirmation_timeout_seconds
        );

        let wait = pending
            .with_required_confirmations(self.config.confirmations)
            .get_receipt();
        let receipt = match execute_with_timeout(
            self.config.confirmation_timeout_seconds,
            async {
                wait.await.map_err(|e| RpcError::ConfirmationFailed {
                    tx_hash: tx_hash.to_string(),
                    message: e.to_string(),
                })
            },
        )
        .await
        {
            Ok(result) => result?,
            Err(_) => {
                return Err(RpcError::ConfirmationTimeout {
                    timeout_seconds: self.config.confirmation_timeout_seconds,
                    tx_hash: tx_hash.to_string(),
                })
            }
        };

        if !receipt.status() {
            return Err(RpcError::Reverted {
                tx_hash: tx_hash.to_string(),
            });
        }

        let address = receipt.contract_address.ok_or_else(|| {
            RpcError::InvalidResponse(format!(
                "receipt for {tx_hash} carries no contract address"
            ))
        })?;

        Ok(DeploymentOutcome {
            contract: plan.contract.clone(),
            address,
            tx_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        })
    }
}

/// Probe the node until it answers eth_chainId, with exponential backoff
/// between attempts. The probe is idempotent, so retrying here is safe in a
/// way that retrying submission would not be.
async fn probe_with_retry(provider: &DynProvider, config: &NetworkConfig) -> RpcResult<u64> {
    let mut backoff = Duration::from_millis(config.initial_backoff_ms);

    for attempt in 0..=config.max_retries {
        if attempt > 0 {
            warn!(
                "Retrying node probe in {:?} (attempt {}/{})",
                backoff,
                attempt + 1,
                config.max_retries + 1
            );
            sleep(backoff).await;
            backoff =
                calculate_next_backoff(backoff, config.backoff_multiplier, config.max_backoff_seconds);
        }

        match execute_with_timeout(config.request_timeout_seconds, async {
            provider
                .get_chain_id()
                .await
                .map_err(|e| RpcError::ConnectionFailed(e.to_string()))
        })
        .await
        {
            Ok(Ok(chain_id)) => return Ok(chain_id),
            Ok(Err(e)) => warn!("Node probe failed: {}", e),
            Err(_) => warn!(
                "Node probe timed out after {}s",
                config.request_timeout_seconds
            ),
        }
    }

    Err(RpcError::MaxRetriesExceeded {
        operation: format!("eth_chainId probe against {}", config.rpc_url),
    })
}
