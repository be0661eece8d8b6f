extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    Address, Env, String,
};

use crate::test::{doc_hash, fund, setup, FEE};
use crate::ContractError;

fn register_one(
    env: &Env,
    client: &crate::ProofRegistryContractClient<'static>,
    fee_token: &Address,
    owner: &Address,
    seed: u8,
) -> soroban_sdk::Bytes {
    fund(env, fee_token, owner, 10 * FEE);
    let hash = doc_hash(env, seed);
    client.register(
        owner,
        &hash,
        &String::from_str(env, "m"),
        &true,
        &String::from_str(env, "docs"),
    );
    hash
}

// ── Transfer ──────────────────────────────────────────────────────────────────

#[test]
fn test_transfer_moves_ownership_and_logs() {
    let (env, client, _admin, fee_token) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let hash = register_one(&env, &client, &fee_token, &alice, 1);

    env.ledger().set_sequence_number(123);
    client.transfer(&alice, &hash, &bob);

    assert_eq!(client.get_proof_owner(&hash), Some(bob.clone()));

    // Exactly one log entry, chronological, with the expected shape.
    assert_eq!(client.get_transfer_count(&hash), 1);
    let entry = client.get_transfer_record(&hash, &0).unwrap();
    assert_eq!(entry.from, alice);
    assert_eq!(entry.to, bob);
    assert_eq!(entry.transferred_at, 123);

    // The new owner gains an index entry; the old owner's is retained.
    assert_eq!(client.get_owner_proof_count(&bob), 1);
    assert_eq!(client.get_owner_proof(&bob, &0), Some(hash.clone()));
    assert_eq!(client.get_owner_proof_count(&alice), 1);
    assert_eq!(client.get_owner_proof(&alice, &0), Some(hash));
}

#[test]
fn test_transfer_does_not_move_stats() {
    let (env, client, _admin, fee_token) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let hash = register_one(&env, &client, &fee_token, &alice, 2);

    client.transfer(&alice, &hash, &bob);

    // Registration stats stay with the registrant; visibility buckets are
    // only moved by registration and toggle events.
    let alice_stats = client.get_proof_stats(&alice).unwrap();
    assert_eq!(alice_stats.total_registered, 1);
    assert_eq!(alice_stats.public_proofs, 1);
    assert_eq!(client.get_proof_stats(&bob), None);
}

#[test]
fn test_verify_after_transfer_to_statless_owner_fails() {
    let (env, client, admin, fee_token) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let verifier = Address::generate(&env);
    let hash = register_one(&env, &client, &fee_token, &alice, 7);

    // Bob never registered anything, so he has no stats record to credit.
    client.transfer(&alice, &hash, &bob);
    client.add_verifier(
        &admin,
        &verifier,
        &String::from_str(&env, "Acme Audit"),
        &String::from_str(&env, "Acme Inc"),
    );

    let result = client.try_verify_proof(&verifier, &hash);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::NotFound),
        _ => unreachable!("Expected NotFound error"),
    }

    // The failed attempt left everything untouched.
    let record = client.get_proof(&hash).unwrap();
    assert!(!record.is_verified);
    assert_eq!(record.verifier, None);
    assert_eq!(record.verification_date, None);
    assert_eq!(client.get_verifier(&verifier).unwrap().verified_count, 0);
    assert_eq!(client.get_platform_stats().total_verified, 0);
}

#[test]
fn test_transfer_requires_current_owner() {
    let (env, client, _admin, fee_token) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let carol = Address::generate(&env);
    let hash = register_one(&env, &client, &fee_token, &alice, 3);

    let result = client.try_transfer(&bob, &hash, &carol);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }

    assert_eq!(client.get_proof_owner(&hash), Some(alice));
    assert_eq!(client.get_transfer_count(&hash), 0);
}

#[test]
fn test_self_transfer_fails() {
    let (env, client, _admin, fee_token) = setup();

    let alice = Address::generate(&env);
    let hash = register_one(&env, &client, &fee_token, &alice, 4);

    let result = client.try_transfer(&alice, &hash, &alice);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_transfer_count(&hash), 0);
}

#[test]
fn test_transfer_missing_record_fails() {
    let (env, client, _admin, _fee_token) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let result = client.try_transfer(&alice, &doc_hash(&env, 99), &bob);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::NotFound),
        _ => unreachable!("Expected NotFound error"),
    }
}

#[test]
fn test_transfer_chain_keeps_ordered_log() {
    let (env, client, _admin, fee_token) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let carol = Address::generate(&env);
    let hash = register_one(&env, &client, &fee_token, &alice, 5);

    env.ledger().set_sequence_number(10);
    client.transfer(&alice, &hash, &bob);
    env.ledger().set_sequence_number(20);
    client.transfer(&bob, &hash, &carol);

    assert_eq!(client.get_proof_owner(&hash), Some(carol.clone()));
    assert_eq!(client.get_transfer_count(&hash), 2);

    let first = client.get_transfer_record(&hash, &0).unwrap();
    assert_eq!(first.from, alice);
    assert_eq!(first.to, bob);
    assert_eq!(first.transferred_at, 10);

    let second = client.get_transfer_record(&hash, &1).unwrap();
    assert_eq!(second.from, bob);
    assert_eq!(second.to, carol);
    assert_eq!(second.transferred_at, 20);
}

#[test]
fn test_previous_owner_loses_control() {
    let (env, client, _admin, fee_token) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let hash = register_one(&env, &client, &fee_token, &alice, 6);

    client.transfer(&alice, &hash, &bob);

    let result = client.try_toggle_visibility(&alice, &hash);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    let result = client.try_update_metadata(&alice, &hash, &String::from_str(&env, "x"));
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }

    // The new owner has full control.
    client.update_metadata(&bob, &hash, &String::from_str(&env, "bob's"));
    assert!(!client.toggle_visibility(&bob, &hash));
}
