use soroban_sdk::{contracttype, Address, Env, String};

/// Access record for a wallet.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserProfile {
    pub wallet: Address,
    pub is_authorized: bool,
    pub tier: String, // e.g. "free", "premium", "vip"
    pub signals_generated: u64,
    pub last_active: u64,
}

impl UserProfile {
    /// Profile reported for an address that was never authorized.
    pub fn unknown(env: &Env, wallet: Address) -> Self {
        UserProfile {
            wallet,
            is_authorized: false,
            tier: String::from_str(env, ""),
            signals_generated: 0,
            last_active: 0,
        }
    }
}

/// Immutable ledger entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signal {
    pub action: String, // "BUY" / "SELL" / "HOLD" by convention
    pub token: String,
    pub price: i128, // 18 decimals
    pub confidence: u32,
    pub metadata: String,
    pub generated_by: Address,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContractStats {
    pub total_signals: u64,
    pub total_users: u32,
    pub active_users: u32,
}
