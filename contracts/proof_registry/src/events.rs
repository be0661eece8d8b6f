#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Bytes, Env, String};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub fee_token: Address,
    pub registration_fee: i128,
    pub block: u32,
}

/// Fired for every successfully registered proof (single or batch).
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProofRegisteredEvent {
    pub owner: Address,
    pub document_hash: Bytes,
    pub is_public: bool,
    pub category: String,
    pub block: u32,
}

/// Fired once per batch on top of the per-proof events.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchRegisteredEvent {
    pub owner: Address,
    pub count: u32,
    pub fee_charged: i128,
    pub block: u32,
}

/// Fired when a proof changes hands.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProofTransferredEvent {
    pub document_hash: Bytes,
    pub from: Address,
    pub to: Address,
    pub block: u32,
}

/// Fired when a verifier attests to a proof.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProofVerifiedEvent {
    pub document_hash: Bytes,
    pub verifier: Address,
    pub owner: Address,
    pub block: u32,
}

/// Fired when the owner rewrites a proof's metadata.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MetadataUpdatedEvent {
    pub document_hash: Bytes,
    pub owner: Address,
    pub block: u32,
}

/// Fired when the owner flips a proof's visibility.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VisibilityToggledEvent {
    pub document_hash: Bytes,
    pub owner: Address,
    pub is_public: bool,
    pub block: u32,
}

/// Fired when the admin adds (or re-adds) a verifier.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifierAddedEvent {
    pub verifier: Address,
    pub name: String,
    pub block: u32,
}

/// Fired when the admin deactivates a verifier.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifierDeactivatedEvent {
    pub verifier: Address,
    pub block: u32,
}

/// Fired when the admin changes the registration fee.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeUpdatedEvent {
    pub new_fee: i128,
    pub block: u32,
}

/// Fired when the admin withdraws accumulated fee revenue.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevenueWithdrawnEvent {
    pub admin: Address,
    pub amount: i128,
    pub remaining: i128,
    pub block: u32,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, admin: Address, fee_token: Address, registration_fee: i128) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            fee_token,
            registration_fee,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_proof_registered(
    env: &Env,
    owner: Address,
    document_hash: Bytes,
    is_public: bool,
    category: String,
) {
    env.events().publish(
        (symbol_short!("REGISTER"), owner.clone()),
        ProofRegisteredEvent {
            owner,
            document_hash,
            is_public,
            category,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_batch_registered(env: &Env, owner: Address, count: u32, fee_charged: i128) {
    env.events().publish(
        (symbol_short!("BATCH_REG"), owner.clone()),
        BatchRegisteredEvent {
            owner,
            count,
            fee_charged,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_proof_transferred(env: &Env, document_hash: Bytes, from: Address, to: Address) {
    env.events().publish(
        (symbol_short!("XFER"), from.clone()),
        ProofTransferredEvent {
            document_hash,
            from,
            to,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_proof_verified(env: &Env, document_hash: Bytes, verifier: Address, owner: Address) {
    env.events().publish(
        (symbol_short!("VERIFIED"), verifier.clone()),
        ProofVerifiedEvent {
            document_hash,
            verifier,
            owner,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_metadata_updated(env: &Env, document_hash: Bytes, owner: Address) {
    env.events().publish(
        (symbol_short!("META_UPD"), owner.clone()),
        MetadataUpdatedEvent {
            document_hash,
            owner,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_visibility_toggled(env: &Env, document_hash: Bytes, owner: Address, is_public: bool) {
    env.events().publish(
        (symbol_short!("VIS_TGL"), owner.clone()),
        VisibilityToggledEvent {
            document_hash,
            owner,
            is_public,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_verifier_added(env: &Env, verifier: Address, name: String) {
    env.events().publish(
        (symbol_short!("VRF_ADD"), verifier.clone()),
        VerifierAddedEvent {
            verifier,
            name,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_verifier_deactivated(env: &Env, verifier: Address) {
    env.events().publish(
        (symbol_short!("VRF_DEACT"), verifier.clone()),
        VerifierDeactivatedEvent {
            verifier,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_fee_updated(env: &Env, new_fee: i128) {
    env.events().publish(
        (symbol_short!("FEE_SET"),),
        FeeUpdatedEvent {
            new_fee,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_revenue_withdrawn(env: &Env, admin: Address, amount: i128, remaining: i128) {
    env.events().publish(
        (symbol_short!("RVN_WDRW"), admin.clone()),
        RevenueWithdrawnEvent {
            admin,
            amount,
            remaining,
            block: env.ledger().sequence(),
        },
    );
}
