//! Domain types for users, bank accounts, and mutation intents.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tresor_shared::types::{AccountId, UserId};

/// Minimum balance every account must hold at all times (100.00).
pub const MINIMUM_BALANCE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 2);

/// Maximum amount a single transaction may move (10,000.00).
pub const MAX_SINGLE_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 2);

/// Fraction of the current balance a full update may not drop below (0.10).
pub const MIN_BALANCE_FRACTION: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Fraction of the current balance a single withdrawal may not exceed (0.90).
pub const WITHDRAWAL_CAP_FRACTION: Decimal = Decimal::from_parts(90, 0, 0, false, 2);

/// A registered user of the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned sequentially at creation.
    pub id: UserId,
    /// Login-style handle.
    pub user_name: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub family_name: String,
    /// Gates all account mutations for accounts owned by this user.
    pub is_active: bool,
}

/// A bank account owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Unique identifier, assigned sequentially within the ledger.
    pub id: AccountId,
    /// Display name.
    pub account_name: String,
    /// Free-form description.
    pub description: String,
    /// Current balance, 2 decimal places. Mutable only through the teller.
    pub balance: Decimal,
    /// Owning user. Set at creation, immutable thereafter.
    pub owner: UserId,
}

/// Input for creating a new bank account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountInput {
    /// Display name (non-empty).
    pub account_name: String,
    /// Free-form description (non-empty).
    pub description: String,
    /// Opening balance; the boundary validates the `[100.00, 10_000.00]`
    /// range, the teller re-asserts the lower bound.
    pub initial_balance: Decimal,
}

/// A requested change to the ledger, validated and typed at the boundary.
///
/// Every variant except `Create` targets an existing account; the acting
/// owner id travels alongside the intent as a separate argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountMutation {
    /// Open a new account for the acting owner.
    Create(CreateAccountInput),
    /// Replace name, description, and balance in one call.
    ReplaceFields {
        /// Target account.
        account_id: AccountId,
        /// New display name; `None` or empty leaves the stored value.
        account_name: Option<String>,
        /// New description; `None` or empty leaves the stored value.
        description: Option<String>,
        /// Requested absolute balance.
        new_balance: Decimal,
    },
    /// Add funds to an account.
    Deposit {
        /// Target account.
        account_id: AccountId,
        /// Amount to add; must be positive.
        amount: Decimal,
    },
    /// Remove funds from an account.
    Withdraw {
        /// Target account.
        account_id: AccountId,
        /// Amount to remove; must be positive.
        amount: Decimal,
    },
    /// Close an account.
    Delete {
        /// Target account.
        account_id: AccountId,
    },
}

impl AccountMutation {
    /// The account this mutation targets, if it targets an existing one.
    #[must_use]
    pub const fn target(&self) -> Option<AccountId> {
        match self {
            Self::Create(_) => None,
            Self::ReplaceFields { account_id, .. }
            | Self::Deposit { account_id, .. }
            | Self::Withdraw { account_id, .. }
            | Self::Delete { account_id } => Some(*account_id),
        }
    }
}
