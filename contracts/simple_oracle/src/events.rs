//! Contract events. Every event carries the fixed topics
//! `("oracle", <name>)`; data is the field list in declaration order.

use soroban_sdk::{contractevent, Address, Env, String};

#[contractevent(topics = ["oracle", "authorize"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserAuthorized {
    pub user: Address,
    pub tier: String,
}

#[contractevent(topics = ["oracle", "revoke"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserRevoked {
    pub user: Address,
}

#[contractevent(topics = ["oracle", "signal"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignalCreated {
    pub index: u64,
    pub generated_by: Address,
    pub action: String,
    pub token: String,
    pub confidence: u32,
}

#[contractevent(topics = ["oracle", "activity"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActivityRecorded {
    pub user: Address,
    pub tag: String,
}

pub fn emit_user_authorized(env: &Env, user: &Address, tier: &String) {
    UserAuthorized {
        user: user.clone(),
        tier: tier.clone(),
    }
    .publish(env);
}

pub fn emit_user_revoked(env: &Env, user: &Address) {
    UserRevoked { user: user.clone() }.publish(env);
}

pub fn emit_signal_created(
    env: &Env,
    index: u64,
    generated_by: &Address,
    action: &String,
    token: &String,
    confidence: u32,
) {
    SignalCreated {
        index,
        generated_by: generated_by.clone(),
        action: action.clone(),
        token: token.clone(),
        confidence,
    }
    .publish(env);
}

pub fn emit_activity(env: &Env, user: &Address, tag: &String) {
    ActivityRecorded {
        user: user.clone(),
        tag: tag.clone(),
    }
    .publish(env);
}
