//! Core data types shared across the deployment pipeline

use alloy::primitives::{Address, Bytes, B256};
use std::path::PathBuf;

/// A fully validated deployment: owners and threshold have passed validation
/// and the init code (creation bytecode plus ABI-encoded constructor
/// arguments) is assembled. Construction goes through
/// [`crate::deployer::build_plan`], so a plan in hand means nothing invalid
/// can reach submission.
#[derive(Debug, Clone)]
pub struct DeploymentPlan {
    pub contract: String,
    pub owners: Vec<Address>,
    pub threshold: u64,
    pub init_code: Bytes,
    pub artifact_path: PathBuf,
}

impl DeploymentPlan {
    /// Human-readable plan summary, one line per fact, used by the check
    /// command and dry runs
    pub fn describe(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Contract:  {}\n", self.contract));
        out.push_str(&format!("Artifact:  {}\n", self.artifact_path.display()));
        out.push_str(&format!(
            "Owners:    {} ({} required)\n",
            self.owners.len(),
            self.threshold
        ));
        for owner in &self.owners {
            out.push_str(&format!("  {}\n", owner));
        }
        out.push_str(&format!("Init code: {} bytes", self.init_code.len()));
        out
    }
}

/// The result of a confirmed deployment
#[derive(Debug, Clone)]
pub struct DeploymentOutcome {
    pub contract: String,
    pub address: Address,
    pub tx_hash: B256,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

impl DeploymentOutcome {
    /// The single success line printed to stdout, e.g.
    /// `proxyAdminMultisig deployed to: 0x...`
    pub fn success_line(&self) -> String {
        format!("{} deployed to: {}", instance_name(&self.contract), self.address)
    }
}

/// Lower the first character of a contract name to form the conventional
/// instance name used in the success line
fn instance_name(contract: &str) -> String {
    let mut chars = contract.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_instance_name_lowers_first_char() {
        assert_eq!(instance_name("ProxyAdminMultisig"), "proxyAdminMultisig");
        assert_eq!(instance_name("x"), "x");
        assert_eq!(instance_name(""), "");
    }

    #[test]
    fn test_success_line_format() {
        let outcome = DeploymentOutcome {
            contract: "ProxyAdminMultisig".to_string(),
            address: Address::from_str("0x3B6D02A24Df681FFdf621D35D70ABa7adaAc07c1").unwrap(),
            tx_hash: B256::ZERO,
            block_number: Some(1),
            gas_used: 21000,
        };

        assert_eq!(
            outcome.success_line(),
            "proxyAdminMultisig deployed to: 0x3B6D02A24Df681FFdf621D35D70ABa7adaAc07c1"
        );
    }
}
