//! Common test utilities
//!
//! Shared fixture builders used across the integration test files: artifact
//! JSON documents in both supported layouts and deploy.toml files pointing
//! at them.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Three well-formed, checksummed owner addresses
pub const OWNERS: [&str; 3] = [
    "0x3B6D02A24Df681FFdf621D35D70ABa7adaAc07c1",
    "0xE01c8D2Abc0f6680cB3eaBD8a77A616Bc5e085f7",
    "0xda2423ceA4f1047556e7a142F81a7ED50e93e160",
];

/// Well-known development key (anvil/hardhat account 0), safe to embed
pub const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// A short but plausible creation bytecode fragment
pub const BYTECODE_HEX: &str = "0x608060405234801561001057600080fd5b50";

/// Write a Hardhat-style flat artifact: `<dir>/<name>.json`
pub fn write_flat_artifact(dir: &Path, name: &str, bytecode_hex: &str) -> PathBuf {
    let path = dir.join(format!("{name}.json"));
    let doc = serde_json::json!({
        "contractName": name,
        "abi": [],
        "bytecode": bytecode_hex,
    });
    fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
    path
}

/// Write a Foundry-style nested artifact: `<dir>/<name>.sol/<name>.json`
pub fn write_nested_artifact(dir: &Path, name: &str, bytecode_hex: &str) -> PathBuf {
    let nested = dir.join(format!("{name}.sol"));
    fs::create_dir_all(&nested).unwrap();
    let path = nested.join(format!("{name}.json"));
    let doc = serde_json::json!({
        "abi": [],
        "bytecode": { "object": bytecode_hex, "sourceMap": "" },
    });
    fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
    path
}

/// Write a deploy.toml naming the given owners and threshold
pub fn write_deploy_config(
    dir: &Path,
    artifacts_dir: &Path,
    owners: &[&str],
    threshold: u64,
) -> PathBuf {
    let path = dir.join("deploy.toml");
    let owner_list = owners
        .iter()
        .map(|o| format!("\"{o}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let contents = format!(
        r#"[network]
rpc_url = "http://127.0.0.1:8545"

[deployment]
contract = "ProxyAdminMultisig"
artifacts_dir = "{}"
owners = [{owner_list}]
threshold = {threshold}
"#,
        artifacts_dir.display()
    );
    fs::write(&path, contents).unwrap();
    path
}

/// A complete workspace fixture: artifact plus config file, valid as written
pub fn fixture_workspace(threshold: u64) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let artifacts = dir.path().join("artifacts");
    fs::create_dir_all(&artifacts).unwrap();
    write_flat_artifact(&artifacts, "ProxyAdminMultisig", BYTECODE_HEX);
    let config = write_deploy_config(dir.path(), &artifacts, &OWNERS, threshold);
    (dir, config)
}
