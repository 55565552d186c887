use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading or layering issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Owner set / threshold validation failures
    #[error("Validation error: {0}")]
    Validation(String),

    /// Contract artifact lookup and parsing
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// Signing key construction
    #[error("Signer error: {0}")]
    Signer(String),

    /// Node RPC operations
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// RPC error types
#[derive(Error, Debug)]
pub enum RpcError {
    /// Failed to reach the configured JSON-RPC endpoint
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The node reports a different chain id than configured
    #[error("Chain id mismatch: node reports {actual}, configuration expects {expected}")]
    ChainIdMismatch { expected: u64, actual: u64 },

    /// The creation transaction could not be broadcast
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// The receipt wait failed after the transaction was broadcast
    #[error("Confirmation failed for {tx_hash}: {message}")]
    ConfirmationFailed { tx_hash: String, message: String },

    /// The receipt wait exceeded the configured deadline. The transaction
    /// may still land on-chain, so the hash is reported for follow-up.
    #[error("Confirmation timeout: {timeout_seconds}s elapsed waiting for {tx_hash}")]
    ConfirmationTimeout {
        timeout_seconds: u64,
        tx_hash: String,
    },

    /// The creation transaction was mined but reverted
    #[error("Deployment transaction {tx_hash} reverted on-chain")]
    Reverted { tx_hash: String },

    /// Retry limit exceeded for an RPC operation
    #[error("Max retries exceeded: {operation}")]
    MaxRetriesExceeded { operation: String },

    /// RPC returned unexpected or malformed response data
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for RPC operations
pub type RpcResult<T> = Result<T, RpcError>;

// Additional From implementations for common error types
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Artifact(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
