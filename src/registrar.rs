//! Name ledger: ownership and expiry bookkeeping.
//!
//! Records are never deleted. Availability is derived from the expiry and
//! the configured grace period, so an expired name simply becomes
//! re-registrable once the grace window has passed.

use soroban_sdk::{contracttype, panic_with_error, Address, BytesN, Env};

use crate::storage::{RegistryKey, REGISTRY_TTL_EXTEND, REGISTRY_TTL_THRESHOLD};
use crate::RegistryError;

/// Ownership record for a registered name.
#[contracttype]
#[derive(Clone, Debug)]
pub struct NameRecord {
    /// Current owner of the name.
    pub owner: Address,

    /// Timestamp at which the registration lapses.
    pub expires_at: u64,
}

/// Current record for a label hash, if the name was ever registered.
pub fn record(env: &Env, label_hash: &BytesN<32>) -> Option<NameRecord> {
    env.storage()
        .persistent()
        .get(&RegistryKey::Name(label_hash.clone()))
}

/// Expiry timestamp for a name. Zero if never registered.
pub fn name_expires(env: &Env, label_hash: &BytesN<32>) -> u64 {
    record(env, label_hash).map_or(0, |r| r.expires_at)
}

/// A name is available if it was never registered, or if its expiry plus
/// the grace period has passed. During the grace window the name belongs
/// to nobody but can only be extended through renewal.
pub fn is_available(env: &Env, label_hash: &BytesN<32>, grace_period: u64) -> bool {
    match record(env, label_hash) {
        None => true,
        Some(r) => env.ledger().timestamp() >= r.expires_at + grace_period,
    }
}

/// Register a name, overwriting any lapsed record.
///
/// Returns the previous record so the caller can decide whether a
/// displaced deposit must be released.
///
/// # Panics
/// - `NameUnavailable` if the name is registered and not past expiry + grace
pub fn register(
    env: &Env,
    label_hash: &BytesN<32>,
    owner: &Address,
    expires_at: u64,
    grace_period: u64,
) -> Option<NameRecord> {
    if !is_available(env, label_hash, grace_period) {
        panic_with_error!(env, RegistryError::NameUnavailable);
    }

    let prior = record(env, label_hash);

    let key = RegistryKey::Name(label_hash.clone());
    env.storage().persistent().set(
        &key,
        &NameRecord {
            owner: owner.clone(),
            expires_at,
        },
    );
    env.storage()
        .persistent()
        .extend_ttl(&key, REGISTRY_TTL_THRESHOLD, REGISTRY_TTL_EXTEND);

    prior
}

/// Extend an active registration. Open to any caller; ownership does not
/// change, only the expiry moves.
///
/// Returns the new expiry.
///
/// # Panics
/// - `NameUnavailable` if the name was never registered or has lapsed
///   past its grace window
pub fn renew(env: &Env, label_hash: &BytesN<32>, extension: u64, grace_period: u64) -> u64 {
    let mut rec = record(env, label_hash)
        .unwrap_or_else(|| panic_with_error!(env, RegistryError::NameUnavailable));

    if env.ledger().timestamp() >= rec.expires_at + grace_period {
        panic_with_error!(env, RegistryError::NameUnavailable);
    }

    rec.expires_at += extension;

    let key = RegistryKey::Name(label_hash.clone());
    env.storage().persistent().set(&key, &rec);
    env.storage()
        .persistent()
        .extend_ttl(&key, REGISTRY_TTL_THRESHOLD, REGISTRY_TTL_EXTEND);

    rec.expires_at
}
