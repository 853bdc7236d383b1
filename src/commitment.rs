//! Blinded registration commitments.
//!
//! A registrant publishes `sha256(label || owner || secret)` first, waits out
//! the minimum commitment age, and only then reveals the label by calling
//! `register`. A front-runner watching the commitment cannot recover the
//! label, and a commitment revealed too late expires rather than lingering.

use soroban_sdk::{panic_with_error, xdr::ToXdr, Address, Bytes, BytesN, Env};

use crate::storage::{RegistryKey, REGISTRY_TTL_EXTEND, REGISTRY_TTL_THRESHOLD};
use crate::RegistryError;

/// Hash identifying a label in the name ledger.
///
/// Records are keyed by this hash rather than the label text.
pub fn label_hash(env: &Env, label: &Bytes) -> BytesN<32> {
    env.crypto().sha256(label).into()
}

/// Blinded commitment hash over a label, its intended owner, and a secret.
///
/// Pure; never touches storage. The caller publishes the result via
/// [`commit`] and later reproduces it during registration.
pub fn make_commitment(
    env: &Env,
    label: &Bytes,
    owner: &Address,
    secret: &BytesN<32>,
) -> BytesN<32> {
    let mut preimage = Bytes::new(env);
    preimage.append(label);
    preimage.append(&owner.clone().to_xdr(env));
    let secret_bytes: Bytes = secret.clone().into();
    preimage.append(&secret_bytes);
    env.crypto().sha256(&preimage).into()
}

/// Record a commitment at the current ledger time.
///
/// Re-committing the same hash overwrites its timestamp, letting a caller
/// refresh an expiring commitment without changing its blinding.
pub fn commit(env: &Env, hash: &BytesN<32>) {
    let key = RegistryKey::Commitment(hash.clone());
    env.storage()
        .persistent()
        .set(&key, &env.ledger().timestamp());
    env.storage()
        .persistent()
        .extend_ttl(&key, REGISTRY_TTL_THRESHOLD, REGISTRY_TTL_EXTEND);
}

/// Creation timestamp of a live commitment, if any.
pub fn created_at(env: &Env, hash: &BytesN<32>) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&RegistryKey::Commitment(hash.clone()))
}

/// Validate a commitment's age and delete it. Commitments are single-use.
///
/// # Panics
/// - `CommitmentNotFound` if no commitment exists for the hash
/// - `CommitmentTooYoung` if it is younger than `min_age`
/// - `CommitmentTooOld` if it is older than `max_age`
pub fn consume_if_valid(env: &Env, hash: &BytesN<32>, min_age: u64, max_age: u64) {
    let key = RegistryKey::Commitment(hash.clone());
    let created: u64 = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, RegistryError::CommitmentNotFound));

    let age = env.ledger().timestamp().saturating_sub(created);
    if age < min_age {
        panic_with_error!(env, RegistryError::CommitmentTooYoung);
    }
    if age > max_age {
        panic_with_error!(env, RegistryError::CommitmentTooOld);
    }

    env.storage().persistent().remove(&key);
}
