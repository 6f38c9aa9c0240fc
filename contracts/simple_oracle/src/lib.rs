#![no_std]

mod errors;
mod events;
mod ledger;
mod registry;
mod stats;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};
use signal_oracle_common::owner_tier;

pub use errors::OracleError;
pub use types::{ContractStats, Signal, UserProfile};

#[contract]
pub struct SimpleOracle;

#[contractimpl]
impl SimpleOracle {
    /// Deploy with `owner` as the administrator. The owner is authorized
    /// immediately and is the first entry of the user list.
    pub fn __constructor(env: Env, owner: Address) {
        storage::set_owner(&env, &owner);
        registry::authorize(&env, &owner, owner_tier(&env));
        storage::bump_instance(&env);
    }

    pub fn owner(env: Env) -> Address {
        storage::bump_instance(&env);
        storage::get_owner(&env)
    }

    // ---------------------------------------------------------------------
    // Access registry (owner only)
    // ---------------------------------------------------------------------

    /// Authorize `user` with `tier`, or update the tier of an existing user.
    pub fn authorize_user(
        env: Env,
        caller: Address,
        user: Address,
        tier: String,
    ) -> Result<(), OracleError> {
        caller.require_auth();
        storage::bump_instance(&env);
        registry::require_owner(&env, &caller)?;

        registry::authorize(&env, &user, tier);
        Ok(())
    }

    /// Revoke `user`. The profile and its user-list slot are kept.
    pub fn revoke_user(env: Env, caller: Address, user: Address) -> Result<(), OracleError> {
        caller.require_auth();
        storage::bump_instance(&env);
        registry::require_owner(&env, &caller)?;

        registry::revoke(&env, &user);
        Ok(())
    }

    pub fn is_user_authorized(env: Env, user: Address) -> bool {
        storage::bump_instance(&env);
        registry::is_authorized(&env, &user)
    }

    /// Profile of `user`; a zero-valued profile if the address was never
    /// authorized.
    pub fn get_user_profile(env: Env, user: Address) -> UserProfile {
        storage::bump_instance(&env);
        registry::profile(&env, &user)
    }

    /// Addresses ever authorized, in insertion order, `limit` capped at 50.
    pub fn get_users(env: Env, start: u32, limit: u32) -> Vec<Address> {
        storage::bump_instance(&env);
        registry::users(&env, start, limit)
    }

    // ---------------------------------------------------------------------
    // Signal ledger (authorized users)
    // ---------------------------------------------------------------------

    /// Append a signal and return its index.
    pub fn generate_signal(
        env: Env,
        caller: Address,
        action: String,
        token: String,
        price: i128,
        confidence: u32,
        metadata: String,
    ) -> Result<u64, OracleError> {
        caller.require_auth();
        storage::bump_instance(&env);
        let author = registry::require_authorized(&env, &caller)?;

        ledger::append(&env, author, action, token, price, confidence, metadata)
    }

    pub fn get_signal(env: Env, index: u64) -> Result<Signal, OracleError> {
        storage::bump_instance(&env);
        ledger::get(&env, index)
    }

    pub fn get_signal_count(env: Env) -> u64 {
        storage::bump_instance(&env);
        ledger::count(&env)
    }

    /// Signals `[start, start + limit)` in index order, `limit` capped at 50.
    pub fn get_signals(env: Env, start: u64, limit: u32) -> Vec<Signal> {
        storage::bump_instance(&env);
        ledger::page(&env, start, limit)
    }

    /// Refresh the caller's `last_active` without generating a signal.
    pub fn record_activity(env: Env, caller: Address, tag: String) -> Result<(), OracleError> {
        caller.require_auth();
        storage::bump_instance(&env);
        let profile = registry::require_authorized(&env, &caller)?;

        registry::record_activity(&env, profile, &tag);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Stats
    // ---------------------------------------------------------------------

    pub fn get_stats(env: Env) -> ContractStats {
        storage::bump_instance(&env);
        stats::get_stats(&env)
    }
}
