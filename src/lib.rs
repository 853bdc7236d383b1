//! # Soroban Vanity Names
//!
//! Commit-reveal name registry with escrowed anti-squatting deposits.
//!
//! Registrations are a two-phase protocol: a registrant first publishes a
//! blinded commitment over the desired label, waits out the minimum
//! commitment age, then reveals the label and pays the length-tiered fee
//! plus a refundable locking deposit. Features include:
//!
//! - Code-point-aware label validation (emoji count by character)
//! - Front-running protection via timed commit-reveal
//! - Length-tiered registration fees
//! - Refundable deposits held in escrow per registration
//! - Open renewal and a post-expiry grace period
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Commit, wait out the minimum age, then reveal:
//! let hash = client.make_commitment(&label, &owner, &secret);
//! client.commit(&hash);
//! // ... min_commitment_age later ...
//! client.register(&label, &owner, &secret, &payment);
//!
//! // After the registration lapses:
//! client.unlock_and_withdraw_amount(&label, &owner);
//! ```

#![no_std]

mod commitment;
mod escrow;
mod events;
mod prices;
mod registrar;
mod storage;
mod validation;

pub use escrow::LockRecord;
pub use prices::PRICE_TIERS;
pub use registrar::NameRecord;
pub use storage::RegistryKey;
pub use validation::MIN_LABEL_LENGTH;

use soroban_sdk::{
    contract, contractimpl, panic_with_error, token, Address, Bytes, BytesN, Env, Vec,
};

use crate::events::*;

/// Error codes for the vanity name registry.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RegistryError {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// Caller is not authorized for this operation.
    Unauthorized = 3,
    /// Label is too short to register.
    InvalidLabel = 4,
    /// Name is registered and not past its grace window.
    NameUnavailable = 5,
    /// No commitment exists for the recomputed hash.
    CommitmentNotFound = 6,
    /// Commitment is younger than the minimum age.
    CommitmentTooYoung = 7,
    /// Commitment is older than the maximum age.
    CommitmentTooOld = 8,
    /// Payment does not cover fee plus locking amount.
    InsufficientPayment = 9,
    /// Deposit is still inside its locking window.
    NotExpired = 10,
    /// Caller has no withdrawable balance.
    NoWithdrawableBalance = 11,
    /// Price table is not exactly seven non-negative fees.
    InvalidPriceTable = 12,
    /// Commitment age bounds are not an ordered pair.
    InvalidCommitmentAges = 13,
    /// Locking amount is negative.
    InvalidLockingAmount = 14,
}

impl From<RegistryError> for soroban_sdk::Error {
    fn from(e: RegistryError) -> Self {
        soroban_sdk::Error::from_contract_error(e as u32)
    }
}

#[contract]
pub struct VanityNameRegistry;

#[contractimpl]
impl VanityNameRegistry {
    // ========== Initialization ==========

    /// Initialize the contract with an admin and a payment token.
    ///
    /// This must be called once before any other operations. Fees and
    /// deposits are denominated in the given token.
    pub fn init(env: Env, admin: Address, token: Address) {
        if env.storage().instance().has(&RegistryKey::Admin) {
            panic_with_error!(&env, RegistryError::AlreadyInitialized);
        }

        admin.require_auth();
        env.storage().instance().set(&RegistryKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&RegistryKey::PaymentToken, &token);
        env.storage().instance().set(&RegistryKey::LockedSum, &0i128);
        env.storage().instance().set(&RegistryKey::FeePool, &0i128);
    }

    /// Get the admin address.
    pub fn admin(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&RegistryKey::Admin)
            .unwrap_or_else(|| panic_with_error!(&env, RegistryError::NotInitialized))
    }

    /// Get the payment token address.
    pub fn payment_token(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&RegistryKey::PaymentToken)
            .unwrap_or_else(|| panic_with_error!(&env, RegistryError::NotInitialized))
    }

    // ========== Configuration ==========

    /// Set the post-expiry grace period (admin only).
    pub fn set_grace_period(env: Env, duration: u64, caller: Address) {
        Self::require_admin(&env, &caller);
        env.storage()
            .instance()
            .set(&RegistryKey::GracePeriod, &duration);
    }

    /// Get the current grace period.
    pub fn grace_period(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&RegistryKey::GracePeriod)
            .unwrap_or(0)
    }

    /// Replace the fee table wholesale (admin only).
    ///
    /// Exactly seven non-negative fees, indexed by code-point length
    /// minus one; the last tier covers all longer labels.
    pub fn set_prices(env: Env, tiers: Vec<i128>, caller: Address) {
        Self::require_admin(&env, &caller);
        prices::set_prices(&env, &tiers);
    }

    /// Get the current fee table.
    pub fn prices(env: Env) -> Vec<i128> {
        prices::prices(&env)
    }

    /// Set the locking amount and registration period (admin only).
    pub fn set_locking_parameters(env: Env, amount: i128, register_period: u64, caller: Address) {
        Self::require_admin(&env, &caller);

        if amount < 0 {
            panic_with_error!(&env, RegistryError::InvalidLockingAmount);
        }

        env.storage()
            .instance()
            .set(&RegistryKey::LockingAmount, &amount);
        env.storage()
            .instance()
            .set(&RegistryKey::RegisterPeriod, &register_period);
    }

    /// Get the refundable deposit required per registration.
    pub fn locking_amount(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&RegistryKey::LockingAmount)
            .unwrap_or(0)
    }

    /// Get the duration a registration or renewal stays active.
    pub fn register_period(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&RegistryKey::RegisterPeriod)
            .unwrap_or(0)
    }

    /// Set the commitment age bounds (admin only).
    pub fn set_commitment_ages(env: Env, min: u64, max: u64, caller: Address) {
        Self::require_admin(&env, &caller);

        if min >= max {
            panic_with_error!(&env, RegistryError::InvalidCommitmentAges);
        }

        env.storage()
            .instance()
            .set(&RegistryKey::MinCommitmentAge, &min);
        env.storage()
            .instance()
            .set(&RegistryKey::MaxCommitmentAge, &max);
    }

    /// Get the minimum commitment age.
    pub fn min_commitment_age(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&RegistryKey::MinCommitmentAge)
            .unwrap_or(0)
    }

    /// Get the maximum commitment age.
    pub fn max_commitment_age(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&RegistryKey::MaxCommitmentAge)
            .unwrap_or(0)
    }

    // ========== Queries ==========

    /// Check whether a label is acceptable for registration.
    ///
    /// Length-only: at least three Unicode code points, counted by
    /// character rather than storage width.
    pub fn valid(_env: Env, label: Bytes) -> bool {
        validation::valid(&label)
    }

    /// Registration fee for a label at the current price table.
    pub fn price(env: Env, label: Bytes) -> i128 {
        prices::price(&env, &label)
    }

    /// Check whether a name can be registered right now.
    pub fn available(env: Env, label: Bytes) -> bool {
        let label_hash = commitment::label_hash(&env, &label);
        registrar::is_available(&env, &label_hash, Self::grace_period(env.clone()))
    }

    /// Expiry timestamp for a name. Zero if never registered.
    pub fn name_expires(env: Env, label_hash: BytesN<32>) -> u64 {
        registrar::name_expires(&env, &label_hash)
    }

    /// Current owner of a name, if it was ever registered.
    pub fn owner_of(env: Env, label_hash: BytesN<32>) -> Option<Address> {
        registrar::record(&env, &label_hash).map(|r| r.owner)
    }

    /// Creation timestamp of a live commitment, if any.
    pub fn commitment(env: Env, hash: BytesN<32>) -> Option<u64> {
        commitment::created_at(&env, &hash)
    }

    /// Sum of all currently locked deposits.
    pub fn locked_amount_sum(env: Env) -> i128 {
        escrow::locked_sum(&env)
    }

    /// Pending withdrawable balance for an address.
    pub fn withdrawable_balance(env: Env, who: Address) -> i128 {
        escrow::withdrawable(&env, &who)
    }

    /// Accumulated fees available to the administrator.
    pub fn fee_balance(env: Env) -> i128 {
        escrow::fee_pool(&env)
    }

    // ========== Registration ==========

    /// Compute the blinded commitment hash for a label, owner, and secret.
    ///
    /// Pure; publish the result via [`commit`](Self::commit) without
    /// revealing the label.
    pub fn make_commitment(env: Env, label: Bytes, owner: Address, secret: BytesN<32>) -> BytesN<32> {
        commitment::make_commitment(&env, &label, &owner, &secret)
    }

    /// Record a blinded registration intent.
    ///
    /// No payment and no authorization required. Re-committing the same
    /// hash refreshes its timestamp.
    pub fn commit(env: Env, hash: BytesN<32>) {
        commitment::commit(&env, &hash);
    }

    /// Reveal a commitment and register the name.
    ///
    /// The payment must cover the label's fee plus the locking amount;
    /// any excess is retained by the registry. If the registration
    /// displaces an expired name whose deposit was never unlocked, that
    /// deposit becomes withdrawable by its previous owner.
    ///
    /// # Panics
    /// - `InvalidLabel` if the label is shorter than three code points
    /// - `NameUnavailable` if the name is held or inside its grace window
    /// - `CommitmentNotFound` / `CommitmentTooYoung` / `CommitmentTooOld`
    /// - `InsufficientPayment` if `payment < price + locking_amount`
    pub fn register(env: Env, label: Bytes, owner: Address, secret: BytesN<32>, payment: i128) {
        owner.require_auth();

        if !env.storage().instance().has(&RegistryKey::Admin) {
            panic_with_error!(&env, RegistryError::NotInitialized);
        }

        if !validation::valid(&label) {
            panic_with_error!(&env, RegistryError::InvalidLabel);
        }

        let grace = Self::grace_period(env.clone());
        let label_hash = commitment::label_hash(&env, &label);
        if !registrar::is_available(&env, &label_hash, grace) {
            panic_with_error!(&env, RegistryError::NameUnavailable);
        }

        let hash = commitment::make_commitment(&env, &label, &owner, &secret);
        commitment::consume_if_valid(
            &env,
            &hash,
            Self::min_commitment_age(env.clone()),
            Self::max_commitment_age(env.clone()),
        );

        let fee = prices::price(&env, &label);
        let locking_amount = Self::locking_amount(env.clone());
        if payment < fee + locking_amount {
            panic_with_error!(&env, RegistryError::InsufficientPayment);
        }

        let token_id = Self::payment_token(env.clone());
        token::Client::new(&env, &token_id).transfer(
            &owner,
            &env.current_contract_address(),
            &payment,
        );

        let now = env.ledger().timestamp();
        let register_period = Self::register_period(env.clone());
        let prior = registrar::register(&env, &label_hash, &owner, now + register_period, grace);

        // A displaced registration whose deposit was never unlocked hands
        // that deposit to its previous owner as a withdrawable balance.
        if prior.is_some() {
            if let Some((prev_owner, amount)) = escrow::release_to_withdrawable(&env, &label_hash) {
                emit_amount_released(&env, &label, &prev_owner, amount);
            }
        }

        escrow::lock(
            &env,
            &label_hash,
            &owner,
            locking_amount,
            now + register_period + grace,
        );
        escrow::add_fees(&env, payment - locking_amount);

        emit_name_registered(&env, &label, &owner);
    }

    /// Renew an active name, extending its expiry by the register period.
    ///
    /// Open to any payer, not just the owner. Does not touch the locked
    /// deposit. Returns the new expiry.
    ///
    /// # Panics
    /// - `InsufficientPayment` if `payment < price(label)`
    /// - `NameUnavailable` if the name was never registered or has lapsed
    ///   past its grace window
    pub fn renew(env: Env, label: Bytes, payer: Address, payment: i128) -> u64 {
        payer.require_auth();

        if !env.storage().instance().has(&RegistryKey::Admin) {
            panic_with_error!(&env, RegistryError::NotInitialized);
        }

        let fee = prices::price(&env, &label);
        if payment < fee {
            panic_with_error!(&env, RegistryError::InsufficientPayment);
        }

        let token_id = Self::payment_token(env.clone());
        token::Client::new(&env, &token_id).transfer(
            &payer,
            &env.current_contract_address(),
            &payment,
        );

        let label_hash = commitment::label_hash(&env, &label);
        let expires_at = registrar::renew(
            &env,
            &label_hash,
            Self::register_period(env.clone()),
            Self::grace_period(env.clone()),
        );
        escrow::add_fees(&env, payment);

        emit_name_renewed(&env, &label, expires_at);
        expires_at
    }

    // ========== Fund release ==========

    /// Unlock the caller's deposit for a lapsed registration and pay it out.
    ///
    /// Ledger state is committed before the outbound transfer. Returns the
    /// paid amount.
    ///
    /// # Panics
    /// - `Unauthorized` if the caller does not own the deposit
    /// - `NotExpired` before the deposit's unlock time
    pub fn unlock_and_withdraw_amount(env: Env, label: Bytes, caller: Address) -> i128 {
        caller.require_auth();

        let label_hash = commitment::label_hash(&env, &label);
        let amount = escrow::unlock_to_owner(&env, &label_hash, &caller);

        let token_id = Self::payment_token(env.clone());
        token::Client::new(&env, &token_id).transfer(
            &env.current_contract_address(),
            &caller,
            &amount,
        );

        emit_amount_unlocked(&env, &label, &caller, amount);
        amount
    }

    /// Pay out the caller's entire withdrawable balance.
    ///
    /// The balance is zeroed before the outbound transfer. Returns the
    /// paid amount.
    ///
    /// # Panics
    /// - `NoWithdrawableBalance` if the balance is zero
    pub fn withdraw_unlocked_amount(env: Env, caller: Address) -> i128 {
        caller.require_auth();

        let amount = escrow::withdraw_all(&env, &caller);

        let token_id = Self::payment_token(env.clone());
        token::Client::new(&env, &token_id).transfer(
            &env.current_contract_address(),
            &caller,
            &amount,
        );

        emit_amount_withdrawn(&env, &caller, amount);
        amount
    }

    /// Withdraw all accumulated fees (admin only).
    ///
    /// Pays out everything the registry holds that is neither locked nor
    /// pending withdrawal. Returns the paid amount, which may be zero.
    pub fn withdraw(env: Env, caller: Address) -> i128 {
        Self::require_admin(&env, &caller);

        let amount = escrow::take_fees(&env);
        if amount > 0 {
            let token_id = Self::payment_token(env.clone());
            token::Client::new(&env, &token_id).transfer(
                &env.current_contract_address(),
                &caller,
                &amount,
            );
        }

        emit_fees_withdrawn(&env, &caller, amount);
        amount
    }

    // ========== Internal Helpers ==========

    fn require_admin(env: &Env, caller: &Address) {
        let admin: Address = env
            .storage()
            .instance()
            .get(&RegistryKey::Admin)
            .unwrap_or_else(|| panic_with_error!(env, RegistryError::NotInitialized));

        if *caller != admin {
            panic_with_error!(env, RegistryError::Unauthorized);
        }

        caller.require_auth();
    }
}
