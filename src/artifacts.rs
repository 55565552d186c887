//! Contract artifact lookup
//!
//! Resolves a contract type by name to its creation bytecode. Two on-disk
//! layouts are searched under the configured artifacts directory:
//! - flat: `<dir>/<Name>.json` (Hardhat-style export)
//! - nested: `<dir>/<Name>.sol/<Name>.json` (Foundry `out/` layout)
//!
//! Both bytecode shapes are understood: a plain hex string under `bytecode`,
//! or an object with an `object` field under `bytecode`.

use crate::errors::{AppError, AppResult};
use alloy::primitives::Bytes;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A resolved contract artifact
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub name: String,
    pub bytecode: Bytes,
    pub path: PathBuf,
}

/// Look up a contract artifact by name
pub fn load_artifact(artifacts_dir: &Path, name: &str) -> AppResult<ContractArtifact> {
    let candidates = [
        artifacts_dir.join(format!("{name}.json")),
        artifacts_dir.join(format!("{name}.sol")).join(format!("{name}.json")),
    ];

    let path = candidates.iter().find(|p| p.is_file()).ok_or_else(|| {
        AppError::Artifact(format!(
            "no artifact for contract {name} under {} (tried {name}.json and {name}.sol/{name}.json)",
            artifacts_dir.display()
        ))
    })?;
    debug!("Resolved artifact for {} at {}", name, path.display());

    let raw = fs::read_to_string(path)?;
    let json: Value = serde_json::from_str(&raw)?;
    let bytecode = extract_bytecode(&json)
        .map_err(|e| AppError::Artifact(format!("{}: {e}", path.display())))?;

    Ok(ContractArtifact {
        name: name.to_string(),
        bytecode,
        path: path.clone(),
    })
}

/// Extract and decode the creation bytecode from a parsed artifact document
pub fn extract_bytecode(json: &Value) -> Result<Bytes, String> {
    let field = json
        .get("bytecode")
        .ok_or_else(|| "artifact has no bytecode field".to_string())?;

    let hex_str = match field {
        Value::String(s) => s.as_str(),
        Value::Object(obj) => obj
            .get("object")
            .and_then(Value::as_str)
            .ok_or_else(|| "bytecode object has no string `object` field".to_string())?,
        _ => return Err("bytecode field is neither a string nor an object".to_string()),
    };

    let body = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    if body.is_empty() {
        return Err("bytecode is empty; the contract is abstract or an interface".to_string());
    }
    // Foundry emits __$<hash>$__ placeholders for unlinked libraries
    if body.contains("__") {
        return Err("bytecode contains unlinked library placeholders".to_string());
    }

    let decoded = hex::decode(body).map_err(|e| format!("bytecode is not valid hex: {e}"))?;
    Ok(Bytes::from(decoded))
}
