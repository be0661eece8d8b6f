//! Statistics aggregator: per-owner counters maintained incrementally as
//! a side effect of every relevant transition. Counters use saturating
//! arithmetic throughout.

use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::storage;
use crate::types::OwnerStats;

/// Credits a successful registration to `owner`: lifetime `total_registered`
/// plus whichever visibility bucket the new proof lands in.
pub fn credit_registration(env: &Env, owner: &Address, is_public: bool) {
    let mut stats = storage::get_stats(env, owner).unwrap_or(OwnerStats::zeroed());
    stats.total_registered = stats.total_registered.saturating_add(1);
    if is_public {
        stats.public_proofs = stats.public_proofs.saturating_add(1);
    } else {
        stats.private_proofs = stats.private_proofs.saturating_add(1);
    }
    storage::put_stats(env, owner, &stats);
}

/// Credits a verification to the proof's *current* owner. The stats record
/// must already exist; an owner who has never registered and never been
/// credited has none, and verification against them fails.
pub fn credit_verification(env: &Env, owner: &Address) -> Result<(), ContractError> {
    let mut stats = storage::get_stats(env, owner).ok_or(ContractError::NotFound)?;
    stats.verified_proofs = stats.verified_proofs.saturating_add(1);
    storage::put_stats(env, owner, &stats);
    Ok(())
}

/// Moves one proof between the owner's public and private buckets after a
/// visibility toggle. An owner holding only transferred-in proofs may have
/// no stats record yet; they start from zero and the decrement saturates.
pub fn apply_visibility_flip(env: &Env, owner: &Address, now_public: bool) {
    let mut stats = storage::get_stats(env, owner).unwrap_or(OwnerStats::zeroed());
    if now_public {
        stats.public_proofs = stats.public_proofs.saturating_add(1);
        stats.private_proofs = stats.private_proofs.saturating_sub(1);
    } else {
        stats.private_proofs = stats.private_proofs.saturating_add(1);
        stats.public_proofs = stats.public_proofs.saturating_sub(1);
    }
    storage::put_stats(env, owner, &stats);
}
