#![no_std]

pub mod errors;
pub mod events;
pub mod stats;
pub mod storage;
pub mod types;
pub mod validation;

use soroban_sdk::{contract, contractimpl, token, Address, Bytes, Env, String, Vec};

pub use errors::ContractError;
pub use types::{OwnerStats, PlatformStats, ProofRecord, TransferRecord, VerifierProfile};

/// Floor enforced on admin fee updates.
pub const MIN_REGISTRATION_FEE: i128 = 1_000_000;
/// Fee in effect from initialisation until the admin changes it.
pub const DEFAULT_REGISTRATION_FEE: i128 = 1_000_000;

#[contract]
pub struct ProofRegistryContract;

#[contractimpl]
impl ProofRegistryContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the registry.
    ///
    /// * `admin`     – principal allowed to manage verifiers, the fee, and
    ///                 revenue withdrawals.
    /// * `fee_token` – SAC address of the token registration fees are paid in.
    pub fn initialize(env: Env, admin: Address, fee_token: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&storage::INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&storage::ADMIN, &admin);
        env.storage().instance().set(&storage::INITIALIZED, &true);
        env.storage().instance().set(&storage::FEE_TOKEN, &fee_token);
        storage::set_registration_fee(&env, DEFAULT_REGISTRATION_FEE);
        // Revenue and the global counters start at zero; unwrap_or(0)
        // handles absent keys, so no explicit init needed.

        events::publish_initialized(&env, admin, fee_token, DEFAULT_REGISTRATION_FEE);

        Ok(())
    }

    // ── Registration ────────────────────────────────────────────────────────

    /// Register a proof of existence for `hash`, charging the current
    /// registration fee from the caller into the contract's custody.
    pub fn register(
        env: Env,
        caller: Address,
        hash: Bytes,
        metadata: String,
        is_public: bool,
        category: String,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        validation::validate_hash(&hash)?;
        validation::validate_metadata(&metadata)?;
        validation::validate_category(&category)?;
        if storage::has_proof(&env, &hash) {
            return Err(ContractError::AlreadyExists);
        }

        let fee = storage::registration_fee(&env);
        Self::charge_fee(&env, &caller, fee)?;

        Self::store_new_proof(&env, &caller, &hash, &metadata, is_public, &category)?;
        storage::set_revenue(&env, storage::revenue(&env).saturating_add(fee));

        Ok(())
    }

    /// Register an ordered sequence of proofs in one atomic unit.
    ///
    /// The fee for the whole batch is charged once up front. Each hash then
    /// goes through the same duplicate and shape checks as `register`; the
    /// first failure aborts the invocation and the host rolls everything
    /// back, the fee transfer included. A hash repeated within the batch
    /// fails `AlreadyExists` on its second occurrence.
    pub fn register_batch(
        env: Env,
        caller: Address,
        hashes: Vec<Bytes>,
        metadata: String,
        is_public: bool,
        category: String,
    ) -> Result<u32, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        if hashes.is_empty() {
            return Err(ContractError::InvalidHash);
        }

        let fee = storage::registration_fee(&env);
        let total_fee = fee.saturating_mul(hashes.len() as i128);
        Self::charge_fee(&env, &caller, total_fee)?;

        for hash in hashes.iter() {
            Self::store_new_proof(&env, &caller, &hash, &metadata, is_public, &category)?;
        }

        storage::set_revenue(&env, storage::revenue(&env).saturating_add(total_fee));

        events::publish_batch_registered(&env, caller, hashes.len(), total_fee);

        Ok(hashes.len())
    }

    // ── Ownership ───────────────────────────────────────────────────────────

    /// Hand a proof over to `new_owner`.
    ///
    /// The previous owner's index entries are deliberately retained: the
    /// owner index records historical association, not current holdings.
    pub fn transfer(
        env: Env,
        caller: Address,
        hash: Bytes,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        let mut record = storage::get_proof(&env, &hash).ok_or(ContractError::NotFound)?;
        if record.owner != caller {
            return Err(ContractError::Unauthorized);
        }
        if new_owner == caller {
            return Err(ContractError::Unauthorized);
        }

        record.owner = new_owner.clone();
        storage::put_proof(&env, &hash, &record);
        storage::append_owner_proof(&env, &new_owner, &hash);
        storage::append_transfer(
            &env,
            &hash,
            &TransferRecord {
                from: caller.clone(),
                to: new_owner.clone(),
                transferred_at: env.ledger().sequence(),
            },
        );

        events::publish_proof_transferred(&env, hash, caller, new_owner);

        Ok(())
    }

    // ── Verification ────────────────────────────────────────────────────────

    /// Register (or re-register) a verifier. Re-adding overwrites the whole
    /// profile: `verified_count` resets and `added_at` is stamped anew.
    pub fn add_verifier(
        env: Env,
        caller: Address,
        verifier: Address,
        name: String,
        organization: String,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        validation::validate_verifier_name(&name)?;

        let profile = VerifierProfile {
            name: name.clone(),
            organization,
            verified_count: 0,
            is_active: true,
            added_at: env.ledger().sequence(),
        };
        storage::put_verifier(&env, &verifier, &profile);

        events::publish_verifier_added(&env, verifier, name);

        Ok(())
    }

    /// Deactivate a verifier. Their profile and `verified_count` survive;
    /// only attestation rights are withdrawn.
    pub fn deactivate_verifier(
        env: Env,
        caller: Address,
        verifier: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let mut profile =
            storage::get_verifier(&env, &verifier).ok_or(ContractError::NotFound)?;
        profile.is_active = false;
        storage::put_verifier(&env, &verifier, &profile);

        events::publish_verifier_deactivated(&env, verifier);

        Ok(())
    }

    /// Attest to a proof. One verification per record, ever; the credit
    /// goes to the proof's owner at verification time, not the registrant.
    pub fn verify_proof(env: Env, caller: Address, hash: Bytes) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        let mut record = storage::get_proof(&env, &hash).ok_or(ContractError::NotFound)?;

        let mut profile = storage::get_verifier(&env, &caller).ok_or(ContractError::NotVerifier)?;
        if !profile.is_active {
            return Err(ContractError::NotVerifier);
        }

        if record.is_verified {
            return Err(ContractError::AlreadyVerified);
        }

        record.is_verified = true;
        record.verifier = Some(caller.clone());
        record.verification_date = Some(env.ledger().sequence());
        storage::put_proof(&env, &hash, &record);

        profile.verified_count = profile.verified_count.saturating_add(1);
        storage::put_verifier(&env, &caller, &profile);

        stats::credit_verification(&env, &record.owner)?;
        storage::bump_total_verified(&env);

        events::publish_proof_verified(&env, hash, caller, record.owner);

        Ok(())
    }

    // ── Record maintenance ──────────────────────────────────────────────────

    /// Rewrite a proof's metadata. Owner-only; the new text must be
    /// non-empty and within the length bound.
    pub fn update_metadata(
        env: Env,
        caller: Address,
        hash: Bytes,
        new_metadata: String,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        let mut record = storage::get_proof(&env, &hash).ok_or(ContractError::NotFound)?;
        if record.owner != caller {
            return Err(ContractError::Unauthorized);
        }

        validation::validate_metadata_update(&new_metadata)?;

        record.metadata = new_metadata;
        storage::put_proof(&env, &hash, &record);

        events::publish_metadata_updated(&env, hash, caller);

        Ok(())
    }

    /// Flip a proof's visibility and move it between the owner's public and
    /// private buckets. Returns the new visibility.
    pub fn toggle_visibility(env: Env, caller: Address, hash: Bytes) -> Result<bool, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        let mut record = storage::get_proof(&env, &hash).ok_or(ContractError::NotFound)?;
        if record.owner != caller {
            return Err(ContractError::Unauthorized);
        }

        let now_public = !record.is_public;
        record.is_public = now_public;
        storage::put_proof(&env, &hash, &record);

        stats::apply_visibility_flip(&env, &caller, now_public);

        events::publish_visibility_toggled(&env, hash, caller, now_public);

        Ok(now_public)
    }

    // ── Fee administration ──────────────────────────────────────────────────

    /// Change the registration fee. Admin-only; bounded below by
    /// `MIN_REGISTRATION_FEE`.
    pub fn update_registration_fee(
        env: Env,
        caller: Address,
        new_fee: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if new_fee < MIN_REGISTRATION_FEE {
            return Err(ContractError::InvalidHash);
        }

        storage::set_registration_fee(&env, new_fee);

        events::publish_fee_updated(&env, new_fee);

        Ok(())
    }

    /// Move accumulated fee revenue from the contract's custody to the
    /// admin. `amount` must be positive and within the tracked revenue.
    pub fn withdraw_revenue(env: Env, caller: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let revenue = storage::revenue(&env);
        if amount <= 0 || amount > revenue {
            return Err(ContractError::InvalidHash);
        }

        let fee_token = Self::fee_token(&env)?;
        let payout = token::Client::new(&env, &fee_token).try_transfer(
            &env.current_contract_address(),
            &caller,
            &amount,
        );
        if payout.is_err() {
            return Err(ContractError::TransferFailed);
        }

        let remaining = revenue.saturating_sub(amount);
        storage::set_revenue(&env, remaining);

        events::publish_revenue_withdrawn(&env, caller, amount, remaining);

        Ok(())
    }

    // ── Read-only queries ───────────────────────────────────────────────────

    pub fn get_proof(env: Env, hash: Bytes) -> Option<ProofRecord> {
        storage::get_proof(&env, &hash)
    }

    /// True iff a proof is registered under `hash`.
    pub fn verify_existence(env: Env, hash: Bytes) -> bool {
        storage::has_proof(&env, &hash)
    }

    pub fn get_proof_owner(env: Env, hash: Bytes) -> Option<Address> {
        storage::get_proof(&env, &hash).map(|record| record.owner)
    }

    /// The hash recorded at `index` in `owner`'s append-only index. Entries
    /// survive transfer-out; they record historical association.
    pub fn get_owner_proof(env: Env, owner: Address, index: u64) -> Option<Bytes> {
        storage::owner_proof_at(&env, &owner, index)
    }

    pub fn get_owner_proof_count(env: Env, owner: Address) -> u64 {
        storage::owner_proof_count(&env, &owner)
    }

    pub fn get_transfer_record(env: Env, hash: Bytes, index: u64) -> Option<TransferRecord> {
        storage::transfer_at(&env, &hash, index)
    }

    pub fn get_transfer_count(env: Env, hash: Bytes) -> u64 {
        storage::transfer_count(&env, &hash)
    }

    pub fn get_verifier(env: Env, verifier: Address) -> Option<VerifierProfile> {
        storage::get_verifier(&env, &verifier)
    }

    pub fn get_proof_stats(env: Env, owner: Address) -> Option<OwnerStats> {
        storage::get_stats(&env, &owner)
    }

    pub fn get_platform_stats(env: Env) -> PlatformStats {
        PlatformStats {
            total_proofs: storage::total_proofs(&env),
            total_verified: storage::total_verified(&env),
            platform_revenue: storage::revenue(&env),
            registration_fee: storage::registration_fee(&env),
            proof_nonce: storage::proof_nonce(&env),
        }
    }

    pub fn get_registration_fee(env: Env) -> i128 {
        storage::registration_fee(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&storage::ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&storage::INITIALIZED)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }

    // ── Internal helpers ────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&storage::INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: revert if `caller` is not the stored admin.
    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&storage::ADMIN)
            .ok_or(ContractError::NotInitialized)?;
        if *caller != admin {
            return Err(ContractError::OwnerOnly);
        }
        Ok(())
    }

    fn fee_token(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&storage::FEE_TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    /// Pull `amount` fee tokens from `payer` into the contract's custody.
    /// A declined transfer surfaces as `TransferFailed` and, through the
    /// host's rollback, leaves the whole invocation without effect.
    fn charge_fee(env: &Env, payer: &Address, amount: i128) -> Result<(), ContractError> {
        let fee_token = Self::fee_token(env)?;
        let payment = token::Client::new(env, &fee_token).try_transfer(
            payer,
            &env.current_contract_address(),
            &amount,
        );
        if payment.is_err() {
            return Err(ContractError::TransferFailed);
        }
        Ok(())
    }

    /// Create one proof record plus its index, stats, and counter updates.
    /// Shared by `register` and `register_batch`; does not touch revenue
    /// or fees.
    fn store_new_proof(
        env: &Env,
        owner: &Address,
        hash: &Bytes,
        metadata: &String,
        is_public: bool,
        category: &String,
    ) -> Result<(), ContractError> {
        validation::validate_hash(hash)?;
        validation::validate_metadata(metadata)?;
        validation::validate_category(category)?;
        if storage::has_proof(env, hash) {
            return Err(ContractError::AlreadyExists);
        }

        let record = ProofRecord {
            owner: owner.clone(),
            document_hash: hash.clone(),
            metadata: metadata.clone(),
            timestamp: env.ledger().sequence(),
            is_public,
            is_verified: false,
            verifier: None,
            verification_date: None,
            category: category.clone(),
        };
        storage::put_proof(env, hash, &record);
        storage::append_owner_proof(env, owner, hash);

        stats::credit_registration(env, owner, is_public);
        storage::bump_registration_counters(env);

        events::publish_proof_registered(
            env,
            owner.clone(),
            hash.clone(),
            is_public,
            category.clone(),
        );

        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_transfer;
