//! Storage key definitions for the vanity name registry.

use soroban_sdk::{contracttype, Address, BytesN};

/// Storage keys for the registry contract.
///
/// Configuration and global counters live in instance storage; per-name
/// and per-address records live in persistent storage.
#[contracttype]
#[derive(Clone, Debug)]
pub enum RegistryKey {
    /// Contract administrator address.
    Admin,

    /// Token used for fees and locked deposits.
    PaymentToken,

    /// Ordered fee tiers, indexed by code-point length minus one.
    Prices,

    /// Window after expiry during which a name cannot yet be re-registered.
    GracePeriod,

    /// Refundable deposit required per registration.
    LockingAmount,

    /// Duration a registration or renewal stays active.
    RegisterPeriod,

    /// Minimum commitment age before it can be revealed.
    MinCommitmentAge,

    /// Maximum commitment age after which it becomes unusable.
    MaxCommitmentAge,

    /// Sum of all currently locked deposits.
    LockedSum,

    /// Accumulated registration and renewal fees.
    FeePool,

    /// Maps commitment hash to its creation timestamp.
    Commitment(BytesN<32>),

    /// Maps label hash to its registration record.
    /// Primary storage for name ownership and expiry.
    Name(BytesN<32>),

    /// Maps label hash to the deposit locked for its current owner.
    Lock(BytesN<32>),

    /// Maps address to its pending withdrawable balance.
    Withdrawable(Address),
}

/// Time-to-live for registry data in ledger entries.
pub const REGISTRY_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const REGISTRY_TTL_EXTEND: u32 = 2592000; // ~150 days
