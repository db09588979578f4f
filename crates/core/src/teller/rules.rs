//! Balance rule validation for account mutations.
//!
//! Each check is evaluated against the account's current balance before
//! anything is written back. Check order matters: the first violated rule
//! determines the rejection reason.

use rust_decimal::Decimal;

use super::error::TellerError;
use super::types::{
    MAX_SINGLE_AMOUNT, MINIMUM_BALANCE, MIN_BALANCE_FRACTION, WITHDRAWAL_CAP_FRACTION,
};

/// Validates an opening balance.
///
/// The boundary layer validates the full `[100.00, 10_000.00]` range; the
/// teller re-asserts the lower bound as an invariant of its own.
///
/// # Errors
///
/// Returns `BelowMinimumBalance` if the opening balance is under the
/// account minimum.
pub fn check_opening_balance(initial_balance: Decimal) -> Result<(), TellerError> {
    if initial_balance < MINIMUM_BALANCE {
        return Err(TellerError::BelowMinimumBalance);
    }
    Ok(())
}

/// Validates a requested absolute balance against the current one.
///
/// Checks, in order:
/// 1. The increase may not exceed the single-transaction cap.
/// 2. The result may not fall below the account minimum.
/// 3. The result may not fall below 10% of the current balance
///    (withdrawing more than 90% in one call).
///
/// # Errors
///
/// Returns the error of the first violated rule.
pub fn check_replacement_balance(current: Decimal, requested: Decimal) -> Result<(), TellerError> {
    if requested > current + MAX_SINGLE_AMOUNT {
        return Err(TellerError::ExceedsSingleTransactionCap);
    }
    if requested < MINIMUM_BALANCE {
        return Err(TellerError::BelowMinimumBalance);
    }
    if requested < current * MIN_BALANCE_FRACTION {
        return Err(TellerError::ExceedsWithdrawalCap);
    }
    Ok(())
}

/// Validates a deposit amount.
///
/// The boundary layer caps deposits at the single-transaction maximum;
/// the teller asserts positivity. Once the amount is valid the deposit
/// commits unconditionally - balance only increases, so no balance rule
/// is re-checked.
///
/// # Errors
///
/// Returns `InvalidAmount` if the amount is zero or negative.
pub fn check_deposit(amount: Decimal) -> Result<(), TellerError> {
    if amount <= Decimal::ZERO {
        return Err(TellerError::InvalidAmount);
    }
    Ok(())
}

/// Validates a withdrawal amount against the current balance.
///
/// Checks, in order:
/// 1. The amount must be positive.
/// 2. The remaining balance may not fall below the account minimum.
/// 3. The amount may not exceed 90% of the current balance. The bound is
///    strict: withdrawing exactly 90% is allowed.
///
/// # Errors
///
/// Returns the error of the first violated rule.
pub fn check_withdrawal(current: Decimal, amount: Decimal) -> Result<(), TellerError> {
    if amount <= Decimal::ZERO {
        return Err(TellerError::InvalidAmount);
    }
    if current - amount < MINIMUM_BALANCE {
        return Err(TellerError::BelowMinimumBalance);
    }
    if amount > current * WITHDRAWAL_CAP_FRACTION {
        return Err(TellerError::ExceedsWithdrawalCap);
    }
    Ok(())
}
