//! Teller error types with stable classification.
//!
//! Every rejection the rule engine can produce maps to a stable
//! `(error_code, http_status_code)` pair so the boundary layer can render
//! a response without knowing internal branching order.

use thiserror::Error;

use tresor_shared::types::{AccountId, UserId};

/// Rejections produced by the teller.
///
/// All variants are terminal per request; none is retried by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TellerError {
    // ========== Referential Errors ==========
    /// No user has the given id.
    #[error("User {0} not found: bank accounts must be assigned to an existing user")]
    OwnerNotFound(UserId),

    /// Account does not exist at all.
    #[error("Account {0} not found")]
    AccountNotFound(AccountId),

    // ========== Authorization Errors ==========
    /// The owning user is not active.
    #[error("User {0} is not active, please contact us")]
    OwnerInactive(UserId),

    /// Account exists but belongs to someone else. The message is
    /// deliberately generic: it must not confirm whose account it is.
    #[error("Unable to process request: something went wrong")]
    OwnershipMismatch,

    // ========== Invariant Violations ==========
    /// Balance increase larger than the single-transaction cap.
    #[error("Unable to process request: cannot deposit more than 10,000.00 in a single transaction")]
    ExceedsSingleTransactionCap,

    /// Balance would fall below the account minimum.
    #[error("Unable to process request: a minimum balance of 100.00 must remain in the account")]
    BelowMinimumBalance,

    /// Withdrawal larger than 90% of the current balance.
    #[error("Unable to process request: cannot withdraw more than 90% of the current balance")]
    ExceedsWithdrawalCap,

    /// Amount is zero or negative.
    #[error("Amount must be positive")]
    InvalidAmount,
}

impl TellerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::OwnerNotFound(_) => "OWNER_NOT_FOUND",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::OwnerInactive(_) => "OWNER_INACTIVE",
            Self::OwnershipMismatch => "OWNERSHIP_MISMATCH",
            Self::ExceedsSingleTransactionCap => "EXCEEDS_SINGLE_TRANSACTION_CAP",
            Self::BelowMinimumBalance => "BELOW_MINIMUM_BALANCE",
            Self::ExceedsWithdrawalCap => "EXCEEDS_WITHDRAWAL_CAP",
            Self::InvalidAmount => "INVALID_AMOUNT",
        }
    }

    /// Returns the HTTP status code for this rejection.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 422 Unprocessable - the referenced owner does not exist
            Self::OwnerNotFound(_) => 422,

            // 403 Forbidden - inactive owners cannot mutate accounts
            Self::OwnerInactive(_) => 403,

            // 404 Not Found
            Self::AccountNotFound(_) => 404,

            // 400 Bad Request - ownership and balance rule violations
            Self::OwnershipMismatch
            | Self::ExceedsSingleTransactionCap
            | Self::BelowMinimumBalance
            | Self::ExceedsWithdrawalCap
            | Self::InvalidAmount => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            TellerError::OwnerNotFound(UserId::new(1)).error_code(),
            "OWNER_NOT_FOUND"
        );
        assert_eq!(
            TellerError::OwnerInactive(UserId::new(1)).error_code(),
            "OWNER_INACTIVE"
        );
        assert_eq!(
            TellerError::AccountNotFound(AccountId::new(1)).error_code(),
            "ACCOUNT_NOT_FOUND"
        );
        assert_eq!(
            TellerError::OwnershipMismatch.error_code(),
            "OWNERSHIP_MISMATCH"
        );
        assert_eq!(
            TellerError::ExceedsSingleTransactionCap.error_code(),
            "EXCEEDS_SINGLE_TRANSACTION_CAP"
        );
        assert_eq!(
            TellerError::BelowMinimumBalance.error_code(),
            "BELOW_MINIMUM_BALANCE"
        );
        assert_eq!(
            TellerError::ExceedsWithdrawalCap.error_code(),
            "EXCEEDS_WITHDRAWAL_CAP"
        );
        assert_eq!(TellerError::InvalidAmount.error_code(), "INVALID_AMOUNT");
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(
            TellerError::OwnerNotFound(UserId::new(1)).http_status_code(),
            422
        );
        assert_eq!(
            TellerError::OwnerInactive(UserId::new(1)).http_status_code(),
            403
        );
        assert_eq!(
            TellerError::AccountNotFound(AccountId::new(1)).http_status_code(),
            404
        );
        assert_eq!(TellerError::OwnershipMismatch.http_status_code(), 400);
        assert_eq!(
            TellerError::ExceedsSingleTransactionCap.http_status_code(),
            400
        );
        assert_eq!(TellerError::BelowMinimumBalance.http_status_code(), 400);
        assert_eq!(TellerError::ExceedsWithdrawalCap.http_status_code(), 400);
        assert_eq!(TellerError::InvalidAmount.http_status_code(), 400);
    }

    #[test]
    fn test_ownership_mismatch_message_is_generic() {
        // Must not leak whose account it is or that it exists.
        let msg = TellerError::OwnershipMismatch.to_string();
        assert!(!msg.contains("owner"));
        assert!(!msg.contains("account"));
    }
}
