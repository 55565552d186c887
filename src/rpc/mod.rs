//! EVM node RPC integration module
//!
//! This module provides all JSON-RPC-related functionality including:
//! - **Client** - Async provider wrapper with connection probing, chain-id
//!   guarding and bounded confirmation waits
//! - **Retry** - Exponential backoff utilities and timeout wrappers
//!
//! The client is built on alloy's provider stack; signing happens
//! wallet-side, so the node only ever sees public methods.

pub mod client;
pub mod retry;

// Re-export main types
pub use client::EthRpcClient;
pub use retry::{calculate_next_backoff, execute_with_timeout};
