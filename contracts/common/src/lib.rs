//! Constants and helpers shared by the oracle contract and its off-chain clients.

#![no_std]

use soroban_sdk::{Env, String};

// ---------------------------------------------------------------------------
// Signal conventions
// ---------------------------------------------------------------------------

/// Decimals of the fixed-point `price` field.
pub const PRICE_DECIMALS: u32 = 18;

/// `10^PRICE_DECIMALS`.
pub const PRICE_SCALE: i128 = 1_000_000_000_000_000_000;

/// Upper bound (inclusive) for a signal's confidence score.
pub const MAX_CONFIDENCE: u32 = 100;

pub const ACTION_BUY: &str = "BUY";
pub const ACTION_SELL: &str = "SELL";
pub const ACTION_HOLD: &str = "HOLD";

pub const CANONICAL_ACTIONS: [&str; 3] = [ACTION_BUY, ACTION_SELL, ACTION_HOLD];

// ---------------------------------------------------------------------------
// Access tiers
// ---------------------------------------------------------------------------

/// Tier given to the deployer when the contract is constructed.
pub const OWNER_TIER: &str = "admin";

pub const TIER_FREE: &str = "free";
pub const TIER_PREMIUM: &str = "premium";
pub const TIER_VIP: &str = "vip";

// ---------------------------------------------------------------------------
// Storage TTL policy
// ---------------------------------------------------------------------------

pub const DAY_IN_LEDGERS: u32 = 17280; // ~24 hours

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ---------------------------------------------------------------------------
// Paged reads
// ---------------------------------------------------------------------------

/// Maximum number of entries a single paged read returns.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Clamp a `[start, start + limit)` window to a sequence of length `len`.
///
/// Returns `None` when the window is empty, otherwise the half-open range
/// `(start, end)` with `end - start <= MAX_PAGE_SIZE`.
pub fn page_bounds(start: u64, limit: u32, len: u64) -> Option<(u64, u64)> {
    if start >= len || limit == 0 {
        return None;
    }
    let limit = limit.min(MAX_PAGE_SIZE) as u64;
    let end = start.saturating_add(limit).min(len);
    Some((start, end))
}

/// Scale a whole-unit price to the 18-decimal fixed-point representation.
pub fn to_fixed_price(whole: i128) -> Option<i128> {
    whole.checked_mul(PRICE_SCALE)
}

pub fn is_valid_confidence(confidence: u32) -> bool {
    confidence <= MAX_CONFIDENCE
}

/// Advisory check for client code; the contract accepts any action text.
pub fn is_canonical_action(action: &str) -> bool {
    CANONICAL_ACTIONS.iter().any(|canonical| *canonical == action)
}

pub fn owner_tier(env: &Env) -> String {
    String::from_str(env, OWNER_TIER)
}
