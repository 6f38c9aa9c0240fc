//! Append-only signal ledger.

use soroban_sdk::{log, Env, String, Vec};
use signal_oracle_common::{is_valid_confidence, page_bounds};

use crate::errors::OracleError;
use crate::events;
use crate::storage;
use crate::types::{Signal, UserProfile};

/// Append a signal attributed to `author`, whose authorization has already
/// been checked. Returns the index of the new entry.
///
/// `action` and `price` are stored as given.
pub fn append(
    env: &Env,
    mut author: UserProfile,
    action: String,
    token: String,
    price: i128,
    confidence: u32,
    metadata: String,
) -> Result<u64, OracleError> {
    if !is_valid_confidence(confidence) {
        log!(env, "confidence out of range", confidence);
        return Err(OracleError::InvalidConfidence);
    }

    let now = env.ledger().timestamp();
    let signal = Signal {
        action,
        token,
        price,
        confidence,
        metadata,
        generated_by: author.wallet.clone(),
        created_at: now,
    };
    let index = storage::push_signal(env, &signal);

    author.signals_generated += 1;
    author.last_active = now;
    storage::set_user(env, &author);

    events::emit_signal_created(
        env,
        index,
        &signal.generated_by,
        &signal.action,
        &signal.token,
        confidence,
    );
    Ok(index)
}

pub fn get(env: &Env, index: u64) -> Result<Signal, OracleError> {
    if index >= storage::signal_count(env) {
        return Err(OracleError::IndexOutOfRange);
    }
    storage::get_signal(env, index).ok_or(OracleError::IndexOutOfRange)
}

pub fn count(env: &Env) -> u64 {
    storage::signal_count(env)
}

/// Page of the ledger in index order.
pub fn page(env: &Env, start: u64, limit: u32) -> Vec<Signal> {
    let mut signals = Vec::new(env);
    if let Some((from, to)) = page_bounds(start, limit, count(env)) {
        for index in from..to {
            if let Some(signal) = storage::get_signal(env, index) {
                signals.push_back(signal);
            }
        }
    }
    signals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{registry, SimpleOracle};
    use soroban_sdk::testutils::{Address as _, Ledger as _};
    use soroban_sdk::Address;

    fn setup() -> (Env, Address, Address) {
        let env = Env::default();
        env.ledger().set_timestamp(5_000);
        let owner = Address::generate(&env);
        let contract_id = env.register(SimpleOracle, (owner.clone(),));
        (env, contract_id, owner)
    }

    fn append_from(env: &Env, author: &Address, confidence: u32) -> Result<u64, OracleError> {
        append(
            env,
            registry::profile(env, author),
            String::from_str(env, "HOLD"),
            String::from_str(env, "SOL"),
            98,
            confidence,
            String::from_str(env, "{}"),
        )
    }

    #[test]
    fn test_append_assigns_sequential_indices() {
        let (env, contract_id, owner) = setup();

        env.as_contract(&contract_id, || {
            assert_eq!(append_from(&env, &owner, 10), Ok(0));
            assert_eq!(append_from(&env, &owner, 20), Ok(1));
            assert_eq!(append_from(&env, &owner, 30), Ok(2));
            assert_eq!(count(&env), 3);
            assert_eq!(get(&env, 1).unwrap().confidence, 20);
        });
    }

    #[test]
    fn test_rejected_append_leaves_ledger_untouched() {
        let (env, contract_id, owner) = setup();

        env.as_contract(&contract_id, || {
            assert_eq!(
                append_from(&env, &owner, 101),
                Err(OracleError::InvalidConfidence)
            );
            assert_eq!(count(&env), 0);
            assert_eq!(registry::profile(&env, &owner).signals_generated, 0);
        });
    }

    #[test]
    fn test_append_updates_author_profile() {
        let (env, contract_id, owner) = setup();

        env.as_contract(&contract_id, || {
            env.ledger().set_timestamp(7_500);
            append_from(&env, &owner, 50).unwrap();

            let profile = registry::profile(&env, &owner);
            assert_eq!(profile.signals_generated, 1);
            assert_eq!(profile.last_active, 7_500);
            assert_eq!(get(&env, 0).unwrap().created_at, 7_500);
        });
    }

    #[test]
    fn test_get_out_of_range() {
        let (env, contract_id, owner) = setup();

        env.as_contract(&contract_id, || {
            assert_eq!(get(&env, 0), Err(OracleError::IndexOutOfRange));
            append_from(&env, &owner, 50).unwrap();
            assert!(get(&env, 0).is_ok());
            assert_eq!(get(&env, 1), Err(OracleError::IndexOutOfRange));
            assert_eq!(get(&env, u64::MAX), Err(OracleError::IndexOutOfRange));
        });
    }

    #[test]
    fn test_page_clamps_to_ledger_end() {
        let (env, contract_id, owner) = setup();

        env.as_contract(&contract_id, || {
            for confidence in 0..5 {
                append_from(&env, &owner, confidence).unwrap();
            }

            let tail = page(&env, 3, 10);
            assert_eq!(tail.len(), 2);
            assert_eq!(tail.get(0).unwrap().confidence, 3);
            assert_eq!(tail.get(1).unwrap().confidence, 4);

            assert_eq!(page(&env, 5, 10).len(), 0);
            assert_eq!(page(&env, 0, 0).len(), 0);
        });
    }
}
