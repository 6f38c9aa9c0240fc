use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum OracleError {
    /// Caller is not the contract owner.
    Unauthorized = 1,
    /// Caller is not a currently authorized user.
    NotAuthorized = 2,
    /// Confidence score above 100.
    InvalidConfidence = 3,
    /// Signal index at or beyond the ledger length.
    IndexOutOfRange = 4,
}

impl OracleError {
    /// Human-readable rejection reason for clients.
    pub fn reason(&self) -> &'static str {
        match self {
            OracleError::Unauthorized => "caller is not the owner",
            OracleError::NotAuthorized => "user is not authorized",
            OracleError::InvalidConfidence => "confidence must be <= 100",
            OracleError::IndexOutOfRange => "signal index out of range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(OracleError::Unauthorized as u32, 1);
        assert_eq!(OracleError::NotAuthorized as u32, 2);
        assert_eq!(OracleError::InvalidConfidence as u32, 3);
        assert_eq!(OracleError::IndexOutOfRange as u32, 4);
    }

    #[test]
    fn test_owner_and_user_gating_are_distinct() {
        assert_ne!(OracleError::Unauthorized, OracleError::NotAuthorized);
        assert_ne!(
            OracleError::Unauthorized.reason(),
            OracleError::NotAuthorized.reason()
        );
    }
}
