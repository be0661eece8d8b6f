use soroban_sdk::{contracttype, Address, Bytes, String};

/// A registered proof of existence, keyed by its 32-byte document hash.
///
/// `is_verified`, `verifier`, and `verification_date` always transition
/// together, exactly once per record. `timestamp` and `category` are
/// immutable after creation; `owner` changes only via `transfer`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProofRecord {
    pub owner: Address,
    pub document_hash: Bytes,
    pub metadata: String,
    pub timestamp: u32,
    pub is_public: bool,
    pub is_verified: bool,
    pub verifier: Option<Address>,
    pub verification_date: Option<u32>,
    pub category: String,
}

/// One entry in a proof's ownership transfer log. Entries are append-only
/// and strictly chronological.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferRecord {
    pub from: Address,
    pub to: Address,
    pub transferred_at: u32,
}

/// Profile of a principal authorised by the admin to attest to proofs.
///
/// Re-adding a verifier overwrites the whole profile, resetting
/// `verified_count` and `added_at`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifierProfile {
    pub name: String,
    pub organization: String,
    pub verified_count: u64,
    pub is_active: bool,
    pub added_at: u32,
}

/// Per-owner denormalised counters.
///
/// `total_registered` counts lifetime registrations and is never reduced
/// on transfer-out. `verified_proofs` is credited to whoever owns the
/// proof at verification time. `public_proofs` / `private_proofs` are
/// adjusted by registration and visibility toggles only.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerStats {
    pub total_registered: u64,
    pub verified_proofs: u64,
    pub public_proofs: u64,
    pub private_proofs: u64,
}

impl OwnerStats {
    pub fn zeroed() -> Self {
        OwnerStats {
            total_registered: 0,
            verified_proofs: 0,
            public_proofs: 0,
            private_proofs: 0,
        }
    }
}

/// Platform-wide counters, assembled from instance storage on demand.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformStats {
    pub total_proofs: u64,
    pub total_verified: u64,
    pub platform_revenue: i128,
    pub registration_fee: i128,
    pub proof_nonce: u64,
}
