//! Input bounds. Everything that fails here fails before any mutation.

use soroban_sdk::{Bytes, String};

use crate::errors::ContractError;

/// Document hashes are exactly 32 bytes. The wire type admits any length,
/// so the check is enforced here rather than by the type.
pub const HASH_LEN: u32 = 32;
/// Metadata is bounded UTF-8, at most 200 bytes.
pub const MAX_METADATA_LEN: u32 = 200;
/// Category is bounded text, at most 30 bytes, immutable after creation.
pub const MAX_CATEGORY_LEN: u32 = 30;

pub fn validate_hash(hash: &Bytes) -> Result<(), ContractError> {
    if hash.len() != HASH_LEN {
        return Err(ContractError::InvalidHash);
    }
    Ok(())
}

pub fn validate_metadata(metadata: &String) -> Result<(), ContractError> {
    if metadata.len() > MAX_METADATA_LEN {
        return Err(ContractError::InvalidHash);
    }
    Ok(())
}

/// Metadata updates must be non-empty in addition to the length bound.
pub fn validate_metadata_update(metadata: &String) -> Result<(), ContractError> {
    if metadata.len() == 0 {
        return Err(ContractError::InvalidHash);
    }
    validate_metadata(metadata)
}

pub fn validate_category(category: &String) -> Result<(), ContractError> {
    if category.len() > MAX_CATEGORY_LEN {
        return Err(ContractError::InvalidHash);
    }
    Ok(())
}

pub fn validate_verifier_name(name: &String) -> Result<(), ContractError> {
    if name.len() == 0 {
        return Err(ContractError::InvalidHash);
    }
    Ok(())
}
