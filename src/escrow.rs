//! Deposit escrow: locked amounts, withdrawable balances, and the fee pool.
//!
//! Every registration locks a refundable deposit against its label. A lock
//! is resolved exactly once, through one of two paths: the owner unlocks it
//! explicitly after its unlock time, or a later registration displaces it
//! and the amount moves into the previous owner's withdrawable balance.
//!
//! Invariant: the contract's token balance always equals
//! `locked_sum + fee_pool + sum(withdrawable balances)`. Functions here
//! only move amounts between those buckets; the actual token transfers are
//! performed by the contract entry points after state is committed.

use soroban_sdk::{contracttype, panic_with_error, Address, BytesN, Env};

use crate::storage::{RegistryKey, REGISTRY_TTL_EXTEND, REGISTRY_TTL_THRESHOLD};
use crate::RegistryError;

/// A deposit locked against a registered name.
#[contracttype]
#[derive(Clone, Debug)]
pub struct LockRecord {
    /// Address the deposit is refundable to.
    pub owner: Address,

    /// Locked amount.
    pub amount: i128,

    /// Earliest timestamp at which the owner may unlock.
    pub unlock_at: u64,
}

/// Live lock record for a label hash, if its deposit is unresolved.
pub fn lock_of(env: &Env, label_hash: &BytesN<32>) -> Option<LockRecord> {
    env.storage()
        .persistent()
        .get(&RegistryKey::Lock(label_hash.clone()))
}

/// Lock a deposit for a fresh registration.
///
/// The caller must have resolved any prior lock on the same label first.
pub fn lock(env: &Env, label_hash: &BytesN<32>, owner: &Address, amount: i128, unlock_at: u64) {
    let key = RegistryKey::Lock(label_hash.clone());
    env.storage().persistent().set(
        &key,
        &LockRecord {
            owner: owner.clone(),
            amount,
            unlock_at,
        },
    );
    env.storage()
        .persistent()
        .extend_ttl(&key, REGISTRY_TTL_THRESHOLD, REGISTRY_TTL_EXTEND);

    set_locked_sum(env, locked_sum(env) + amount);
}

/// Resolve a lock in favor of its owner.
///
/// Clears the record and decrements the locked sum; the caller pays out
/// the returned amount after this state change is committed.
///
/// # Panics
/// - `Unauthorized` if there is no lock or the caller does not own it
/// - `NotExpired` if the unlock time has not been reached
pub fn unlock_to_owner(env: &Env, label_hash: &BytesN<32>, caller: &Address) -> i128 {
    let rec = lock_of(env, label_hash)
        .unwrap_or_else(|| panic_with_error!(env, RegistryError::Unauthorized));

    if rec.owner != *caller {
        panic_with_error!(env, RegistryError::Unauthorized);
    }
    if env.ledger().timestamp() < rec.unlock_at {
        panic_with_error!(env, RegistryError::NotExpired);
    }

    env.storage()
        .persistent()
        .remove(&RegistryKey::Lock(label_hash.clone()));
    set_locked_sum(env, locked_sum(env) - rec.amount);

    rec.amount
}

/// Resolve a displaced lock into its owner's withdrawable balance.
///
/// Invoked when a re-registration displaces a deposit the previous owner
/// never unlocked. Nothing is paid out here; the owner collects later via
/// `withdraw_all`. Returns the credited owner and amount, or `None` if the
/// label carried no unresolved lock.
pub fn release_to_withdrawable(env: &Env, label_hash: &BytesN<32>) -> Option<(Address, i128)> {
    let rec = lock_of(env, label_hash)?;

    env.storage()
        .persistent()
        .remove(&RegistryKey::Lock(label_hash.clone()));
    set_locked_sum(env, locked_sum(env) - rec.amount);

    let key = RegistryKey::Withdrawable(rec.owner.clone());
    let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    env.storage().persistent().set(&key, &(balance + rec.amount));
    env.storage()
        .persistent()
        .extend_ttl(&key, REGISTRY_TTL_THRESHOLD, REGISTRY_TTL_EXTEND);

    Some((rec.owner, rec.amount))
}

/// Drain the caller's withdrawable balance to zero.
///
/// Returns the drained amount; the caller pays it out after this state
/// change is committed.
///
/// # Panics
/// - `NoWithdrawableBalance` if the balance is zero
pub fn withdraw_all(env: &Env, caller: &Address) -> i128 {
    let key = RegistryKey::Withdrawable(caller.clone());
    let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    if balance == 0 {
        panic_with_error!(env, RegistryError::NoWithdrawableBalance);
    }

    env.storage().persistent().remove(&key);
    balance
}

/// Pending withdrawable balance for an address.
pub fn withdrawable(env: &Env, who: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&RegistryKey::Withdrawable(who.clone()))
        .unwrap_or(0)
}

/// Sum of all currently locked deposits.
pub fn locked_sum(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&RegistryKey::LockedSum)
        .unwrap_or(0)
}

fn set_locked_sum(env: &Env, sum: i128) {
    env.storage().instance().set(&RegistryKey::LockedSum, &sum);
}

/// Credit fees (including any retained excess payment) to the fee pool.
pub fn add_fees(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&RegistryKey::FeePool, &(fee_pool(env) + amount));
}

/// Accumulated fees not yet withdrawn by the administrator.
pub fn fee_pool(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&RegistryKey::FeePool)
        .unwrap_or(0)
}

/// Zero the fee pool, returning its prior value for payout.
pub fn take_fees(env: &Env) -> i128 {
    let pool = fee_pool(env);
    env.storage().instance().set(&RegistryKey::FeePool, &0i128);
    pool
}
