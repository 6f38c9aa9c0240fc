//! Storage layer
//!
//! Singletons and counters live in instance storage; per-user profiles,
//! the user list and the signal ledger live in persistent storage, one
//! entry per slot so appends and indexed reads stay O(1).

use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env};
use signal_oracle_common::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};

use crate::types::{Signal, UserProfile};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Contract owner, written once by the constructor.
    Owner,
    /// Length of the user list.
    UserCount,
    /// Users currently authorized.
    ActiveUsers,
    /// Length of the signal ledger.
    SignalCount,
    User(Address),
    /// Slot `i` of the append-only user list.
    UserAt(u32),
    /// Slot `i` of the append-only signal ledger.
    Signal(u64),
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Reads extend the TTL of entries that exist.
fn bump_if_present(env: &Env, key: &DataKey) {
    if env.storage().persistent().has(key) {
        bump_persistent(env, key);
    }
}

// ---------------------------------------------------------------------------
// Owner
// ---------------------------------------------------------------------------

pub fn get_owner(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<_, Address>(&DataKey::Owner)
        .unwrap_optimized()
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

pub fn get_user(env: &Env, user: &Address) -> Option<UserProfile> {
    let key = DataKey::User(user.clone());
    bump_if_present(env, &key);
    env.storage().persistent().get(&key)
}

pub fn set_user(env: &Env, profile: &UserProfile) {
    let key = DataKey::User(profile.wallet.clone());
    env.storage().persistent().set(&key, profile);
    bump_persistent(env, &key);
}

pub fn user_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::UserCount)
        .unwrap_or(0)
}

/// Append to the user list. Returns the new slot index.
pub fn push_user(env: &Env, user: &Address) -> u32 {
    let index = user_count(env);
    let key = DataKey::UserAt(index);
    env.storage().persistent().set(&key, user);
    bump_persistent(env, &key);
    env.storage().instance().set(&DataKey::UserCount, &(index + 1));
    index
}

pub fn get_user_at(env: &Env, index: u32) -> Option<Address> {
    let key = DataKey::UserAt(index);
    bump_if_present(env, &key);
    env.storage().persistent().get(&key)
}

pub fn active_users(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ActiveUsers)
        .unwrap_or(0)
}

pub fn set_active_users(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ActiveUsers, &count);
}

// ---------------------------------------------------------------------------
// Signals
// ---------------------------------------------------------------------------

pub fn signal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::SignalCount)
        .unwrap_or(0)
}

/// Append to the signal ledger. Returns the new signal's index.
pub fn push_signal(env: &Env, signal: &Signal) -> u64 {
    let index = signal_count(env);
    let key = DataKey::Signal(index);
    env.storage().persistent().set(&key, signal);
    bump_persistent(env, &key);
    env.storage()
        .instance()
        .set(&DataKey::SignalCount, &(index + 1));
    index
}

pub fn get_signal(env: &Env, index: u64) -> Option<Signal> {
    let key = DataKey::Signal(index);
    bump_if_present(env, &key);
    env.storage().persistent().get(&key)
}
