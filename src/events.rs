//! Event emission helpers for the vanity name registry.

use soroban_sdk::{Address, Bytes, Env, Symbol};

/// Emit an event when a name is registered.
pub fn emit_name_registered(env: &Env, label: &Bytes, owner: &Address) {
    let topics = (Symbol::new(env, "name_registered"),);
    env.events().publish(topics, (label.clone(), owner.clone()));
}

/// Emit an event when a name is renewed.
pub fn emit_name_renewed(env: &Env, label: &Bytes, expires_at: u64) {
    let topics = (Symbol::new(env, "name_renewed"),);
    env.events().publish(topics, (label.clone(), expires_at));
}

/// Emit an event when an owner unlocks their deposit.
pub fn emit_amount_unlocked(env: &Env, label: &Bytes, owner: &Address, amount: i128) {
    let topics = (Symbol::new(env, "amount_unlocked"),);
    env.events()
        .publish(topics, (label.clone(), owner.clone(), amount));
}

/// Emit an event when a displaced deposit becomes withdrawable.
pub fn emit_amount_released(env: &Env, label: &Bytes, owner: &Address, amount: i128) {
    let topics = (Symbol::new(env, "amount_released"),);
    env.events()
        .publish(topics, (label.clone(), owner.clone(), amount));
}

/// Emit an event when a withdrawable balance is paid out.
pub fn emit_amount_withdrawn(env: &Env, owner: &Address, amount: i128) {
    let topics = (Symbol::new(env, "amount_withdrawn"),);
    env.events().publish(topics, (owner.clone(), amount));
}

/// Emit an event when the administrator withdraws accumulated fees.
pub fn emit_fees_withdrawn(env: &Env, admin: &Address, amount: i128) {
    let topics = (Symbol::new(env, "fees_withdrawn"),);
    env.events().publish(topics, (admin.clone(), amount));
}
