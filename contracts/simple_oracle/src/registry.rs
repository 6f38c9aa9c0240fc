//! Access registry
//!
//! Owner-controlled authorization flags and tier labels per wallet. The
//! user list is append-only: revocation flips the flag but never removes
//! the address, so `total_users` counts every address ever authorized.
//! `ActiveUsers` is adjusted on every flag transition instead of being
//! recomputed from the list.

use soroban_sdk::{log, Address, Env, String, Vec};
use signal_oracle_common::page_bounds;

use crate::errors::OracleError;
use crate::events;
use crate::storage;
use crate::types::UserProfile;

/// Fails with `Unauthorized` unless `caller` is the owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), OracleError> {
    if *caller != storage::get_owner(env) {
        log!(env, "owner-only call rejected", caller.clone());
        return Err(OracleError::Unauthorized);
    }
    Ok(())
}

/// Fails with `NotAuthorized` unless `caller` is currently authorized.
/// Returns the caller's stored profile.
pub fn require_authorized(env: &Env, caller: &Address) -> Result<UserProfile, OracleError> {
    match storage::get_user(env, caller) {
        Some(profile) if profile.is_authorized => Ok(profile),
        _ => {
            log!(env, "user-gated call rejected", caller.clone());
            Err(OracleError::NotAuthorized)
        }
    }
}

pub fn authorize(env: &Env, user: &Address, tier: String) {
    let (mut profile, was_authorized) = match storage::get_user(env, user) {
        Some(profile) => {
            let was_authorized = profile.is_authorized;
            (profile, was_authorized)
        }
        None => {
            storage::push_user(env, user);
            (UserProfile::unknown(env, user.clone()), false)
        }
    };

    profile.is_authorized = true;
    profile.tier = tier;
    profile.last_active = env.ledger().timestamp();
    storage::set_user(env, &profile);

    if !was_authorized {
        storage::set_active_users(env, storage::active_users(env) + 1);
    }

    events::emit_user_authorized(env, user, &profile.tier);
}

/// Never-seen addresses stay unknown: nothing is written for them.
pub fn revoke(env: &Env, user: &Address) {
    if let Some(mut profile) = storage::get_user(env, user) {
        if profile.is_authorized {
            storage::set_active_users(env, storage::active_users(env).saturating_sub(1));
        }
        profile.is_authorized = false;
        profile.last_active = env.ledger().timestamp();
        storage::set_user(env, &profile);
    }

    events::emit_user_revoked(env, user);
}

pub fn is_authorized(env: &Env, user: &Address) -> bool {
    storage::get_user(env, user)
        .map(|profile| profile.is_authorized)
        .unwrap_or(false)
}

pub fn profile(env: &Env, user: &Address) -> UserProfile {
    storage::get_user(env, user).unwrap_or_else(|| UserProfile::unknown(env, user.clone()))
}

/// Refresh `last_active` for an authorized caller.
pub fn record_activity(env: &Env, mut profile: UserProfile, tag: &String) {
    profile.last_active = env.ledger().timestamp();
    storage::set_user(env, &profile);
    events::emit_activity(env, &profile.wallet, tag);
}

/// Page of the user list in insertion order.
pub fn users(env: &Env, start: u32, limit: u32) -> Vec<Address> {
    let mut page = Vec::new(env);
    if let Some((from, to)) = page_bounds(start as u64, limit, storage::user_count(env) as u64) {
        for index in from..to {
            if let Some(user) = storage::get_user_at(env, index as u32) {
                page.push_back(user);
            }
        }
    }
    page
}
