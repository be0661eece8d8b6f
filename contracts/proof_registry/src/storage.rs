//! Record Store: the authoritative maps and platform scalars.
//!
//! Every accessor here is single-key; the transition engine in `lib.rs`
//! is the only caller and serialises access by construction.

use soroban_sdk::{symbol_short, Address, Bytes, Env, IntoVal, Symbol, Val};

use crate::types::{OwnerStats, ProofRecord, TransferRecord, VerifierProfile};

// ── Instance keys (platform scalars) ─────────────────────────────────────────

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const INITIALIZED: Symbol = symbol_short!("INIT");
pub const FEE_TOKEN: Symbol = symbol_short!("FEE_TOK");
pub const REG_FEE: Symbol = symbol_short!("REG_FEE");
pub const REVENUE: Symbol = symbol_short!("REVENUE");
pub const NONCE: Symbol = symbol_short!("NONCE");
pub const TOTAL_PROOFS: Symbol = symbol_short!("TOT_PRF");
pub const TOTAL_VERIFIED: Symbol = symbol_short!("TOT_VRF");

// ── Persistent tuple-key prefixes ────────────────────────────────────────────

const PROOF: Symbol = symbol_short!("PROOF");
const OWNER_IDX: Symbol = symbol_short!("OWN_IDX");
const OWNER_CNT: Symbol = symbol_short!("OWN_CNT");
const TRANSFER: Symbol = symbol_short!("XFER");
const TRANSFER_CNT: Symbol = symbol_short!("XFER_CNT");
const VERIFIER: Symbol = symbol_short!("VERIFIER");
const STATS: Symbol = symbol_short!("STATS");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// Extends the time-to-live of a persistent key so the data remains
/// accessible for the extended period.
fn extend_ttl<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Proof records ────────────────────────────────────────────────────────────

pub fn get_proof(env: &Env, hash: &Bytes) -> Option<ProofRecord> {
    env.storage().persistent().get(&(PROOF, hash.clone()))
}

pub fn has_proof(env: &Env, hash: &Bytes) -> bool {
    env.storage().persistent().has(&(PROOF, hash.clone()))
}

pub fn put_proof(env: &Env, hash: &Bytes, record: &ProofRecord) {
    let key = (PROOF, hash.clone());
    env.storage().persistent().set(&key, record);
    extend_ttl(env, &key);
}

// ── Owner index (append-only, never pruned on transfer) ──────────────────────

pub fn owner_proof_count(env: &Env, owner: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&(OWNER_CNT, owner.clone()))
        .unwrap_or(0)
}

pub fn owner_proof_at(env: &Env, owner: &Address, index: u64) -> Option<Bytes> {
    env.storage()
        .persistent()
        .get(&(OWNER_IDX, owner.clone(), index))
}

/// Appends `hash` at the owner's next free index and bumps the counter.
pub fn append_owner_proof(env: &Env, owner: &Address, hash: &Bytes) {
    let count = owner_proof_count(env, owner);
    let entry_key = (OWNER_IDX, owner.clone(), count);
    env.storage().persistent().set(&entry_key, hash);
    extend_ttl(env, &entry_key);

    let count_key = (OWNER_CNT, owner.clone());
    env.storage()
        .persistent()
        .set(&count_key, &count.saturating_add(1));
    extend_ttl(env, &count_key);
}

// ── Transfer log ─────────────────────────────────────────────────────────────

pub fn transfer_count(env: &Env, hash: &Bytes) -> u64 {
    env.storage()
        .persistent()
        .get(&(TRANSFER_CNT, hash.clone()))
        .unwrap_or(0)
}

pub fn transfer_at(env: &Env, hash: &Bytes, index: u64) -> Option<TransferRecord> {
    env.storage()
        .persistent()
        .get(&(TRANSFER, hash.clone(), index))
}

/// Appends an entry to the proof's chronological transfer log.
pub fn append_transfer(env: &Env, hash: &Bytes, record: &TransferRecord) {
    let count = transfer_count(env, hash);
    let entry_key = (TRANSFER, hash.clone(), count);
    env.storage().persistent().set(&entry_key, record);
    extend_ttl(env, &entry_key);

    let count_key = (TRANSFER_CNT, hash.clone());
    env.storage()
        .persistent()
        .set(&count_key, &count.saturating_add(1));
    extend_ttl(env, &count_key);
}

// ── Verifier registry ────────────────────────────────────────────────────────

pub fn get_verifier(env: &Env, verifier: &Address) -> Option<VerifierProfile> {
    env.storage().persistent().get(&(VERIFIER, verifier.clone()))
}

pub fn put_verifier(env: &Env, verifier: &Address, profile: &VerifierProfile) {
    let key = (VERIFIER, verifier.clone());
    env.storage().persistent().set(&key, profile);
    extend_ttl(env, &key);
}

// ── Owner stats ──────────────────────────────────────────────────────────────

pub fn get_stats(env: &Env, owner: &Address) -> Option<OwnerStats> {
    env.storage().persistent().get(&(STATS, owner.clone()))
}

pub fn put_stats(env: &Env, owner: &Address, stats: &OwnerStats) {
    let key = (STATS, owner.clone());
    env.storage().persistent().set(&key, stats);
    extend_ttl(env, &key);
}

// ── Platform scalars ─────────────────────────────────────────────────────────

pub fn registration_fee(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&REG_FEE)
        .unwrap_or(crate::DEFAULT_REGISTRATION_FEE)
}

pub fn set_registration_fee(env: &Env, fee: i128) {
    env.storage().instance().set(&REG_FEE, &fee);
}

pub fn revenue(env: &Env) -> i128 {
    env.storage().instance().get(&REVENUE).unwrap_or(0)
}

pub fn set_revenue(env: &Env, amount: i128) {
    env.storage().instance().set(&REVENUE, &amount);
}

pub fn total_proofs(env: &Env) -> u64 {
    env.storage().instance().get(&TOTAL_PROOFS).unwrap_or(0)
}

pub fn total_verified(env: &Env) -> u64 {
    env.storage().instance().get(&TOTAL_VERIFIED).unwrap_or(0)
}

pub fn proof_nonce(env: &Env) -> u64 {
    env.storage().instance().get(&NONCE).unwrap_or(0)
}

/// Bumps the counters touched by every successful registration:
/// `proof_nonce` (reserved, never yet used as a key) and `total_proofs`.
pub fn bump_registration_counters(env: &Env) {
    env.storage()
        .instance()
        .set(&NONCE, &proof_nonce(env).saturating_add(1));
    env.storage()
        .instance()
        .set(&TOTAL_PROOFS, &total_proofs(env).saturating_add(1));
}

pub fn bump_total_verified(env: &Env) {
    env.storage()
        .instance()
        .set(&TOTAL_VERIFIED, &total_verified(env).saturating_add(1));
}
