//! Length-tiered pricing.
//!
//! Registration fees are bucketed by a label's code-point length. The table
//! holds one fee per length from one to six, with the last tier covering all
//! longer labels. Labels shorter than the validation minimum are rejected
//! before pricing, so the first two tiers are conventionally zero.

use soroban_sdk::{panic_with_error, Bytes, Env, Vec};

use crate::storage::RegistryKey;
use crate::validation::code_point_length;
use crate::RegistryError;

/// Number of fee tiers. The last tier is the catch-all for longer labels.
pub const PRICE_TIERS: u32 = 7;

/// Replace the fee table wholesale.
///
/// The table must contain exactly [`PRICE_TIERS`] non-negative fees.
pub fn set_prices(env: &Env, tiers: &Vec<i128>) {
    if tiers.len() != PRICE_TIERS {
        panic_with_error!(env, RegistryError::InvalidPriceTable);
    }
    for fee in tiers.iter() {
        if fee < 0 {
            panic_with_error!(env, RegistryError::InvalidPriceTable);
        }
    }
    env.storage().instance().set(&RegistryKey::Prices, tiers);
}

/// Get the current fee table. All tiers are zero until configured.
pub fn prices(env: &Env) -> Vec<i128> {
    env.storage()
        .instance()
        .get(&RegistryKey::Prices)
        .unwrap_or_else(|| Vec::from_array(env, [0i128; 7]))
}

/// Registration fee for a label.
pub fn price(env: &Env, label: &Bytes) -> i128 {
    prices(env)
        .get(tier_index(code_point_length(label)))
        .unwrap_or(0)
}

/// Pricing bucket for a label of the given code-point length.
pub fn tier_index(length: u32) -> u32 {
    if length == 0 {
        return 0;
    }
    core::cmp::min(length - 1, PRICE_TIERS - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_index() {
        assert_eq!(tier_index(0), 0);
        assert_eq!(tier_index(1), 0);
        assert_eq!(tier_index(2), 1);
        assert_eq!(tier_index(3), 2);
        assert_eq!(tier_index(4), 3);
        assert_eq!(tier_index(5), 4);
        assert_eq!(tier_index(6), 5);
        assert_eq!(tier_index(7), 6);
        assert_eq!(tier_index(16), 6);
        assert_eq!(tier_index(u32::MAX), 6);
    }
}
