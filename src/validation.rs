//! Pre-submission validation of deployment configuration
//!
//! The owner list and threshold come from hand-maintained configuration, so
//! every constraint the deployed contract relies on is checked here before a
//! transaction can be built:
//! - owner addresses must be well-formed 20-byte hex literals
//! - mixed-case addresses must carry a valid EIP-55 checksum
//! - the owner set must be non-empty and duplicate-free
//! - the threshold must satisfy `1 <= threshold <= |owners|`

use crate::errors::{AppError, AppResult};
use alloy::primitives::Address;
use std::collections::HashSet;
use std::str::FromStr;

/// Parse a single owner address string.
///
/// All-lowercase (or digit-only) forms are accepted as-is. A mixed-case form
/// is only accepted when it is a valid EIP-55 checksum encoding, since a
/// failed checksum in a hand-maintained list usually means a typo.
pub fn parse_owner(raw: &str) -> AppResult<Address> {
    let s = raw.trim();

    let body = s
        .strip_prefix("0x")
        .ok_or_else(|| AppError::Validation(format!("address {s} is missing the 0x prefix")))?;

    if body.len() != 40 {
        return Err(AppError::Validation(format!(
            "address {s} has {} hex digits, expected 40",
            body.len()
        )));
    }
    if !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::Validation(format!(
            "address {s} contains non-hex characters"
        )));
    }

    let has_upper = body.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = body.chars().any(|c| c.is_ascii_lowercase());

    if has_upper && has_lower {
        Address::parse_checksummed(s, None)
            .map_err(|_| AppError::Validation(format!("address {s} fails EIP-55 checksum")))
    } else {
        Address::from_str(s)
            .map_err(|e| AppError::Validation(format!("address {s} is invalid: {e}")))
    }
}

/// Parse and validate the full owner list: every entry well-formed, at least
/// one owner, no duplicates (compared as parsed addresses, so differing only
/// in case still counts as a duplicate)
pub fn validate_owners(raw: &[String]) -> AppResult<Vec<Address>> {
    if raw.is_empty() {
        return Err(AppError::Validation(
            "owner set is empty; configure deployment.owners".to_string(),
        ));
    }

    let mut owners = Vec::with_capacity(raw.len());
    let mut seen = HashSet::new();

    for (index, entry) in raw.iter().enumerate() {
        let owner = parse_owner(entry).map_err(|e| match e {
            AppError::Validation(msg) => {
                AppError::Validation(format!("owner {}: {msg}", index + 1))
            }
            other => other,
        })?;
        if !seen.insert(owner) {
            return Err(AppError::Validation(format!(
                "owner {} ({owner}) is a duplicate",
                index + 1
            )));
        }
        owners.push(owner);
    }

    Ok(owners)
}

/// Enforce `1 <= threshold <= |owners|`
pub fn validate_threshold(threshold: u64, owner_count: usize) -> AppResult<()> {
    if threshold == 0 {
        return Err(AppError::Validation(
            "threshold must be at least 1".to_string(),
        ));
    }
    if threshold > owner_count as u64 {
        return Err(AppError::Validation(format!(
            "threshold {threshold} exceeds owner count {owner_count}"
        )));
    }
    Ok(())
}
