//! Property-based tests for TellerService.
//!
//! - Property 1: Creation invariants
//! - Property 2: Withdrawal floor and cap
//! - Property 3: Deposit/withdraw round trip
//! - Property 4: Rejections never mutate state

use proptest::prelude::*;
use rust_decimal::Decimal;

use tresor_shared::types::{AccountId, UserId};

use super::error::TellerError;
use super::service::TellerService;
use super::store::{Directory, Ledger};
use super::types::{BankAccount, CreateAccountInput, User, MINIMUM_BALANCE};

struct OneUserDirectory {
    user: User,
}

impl Directory for OneUserDirectory {
    fn resolve_owner(&self, id: UserId) -> Option<User> {
        (self.user.id == id).then(|| self.user.clone())
    }
}

#[derive(Default)]
struct VecLedger {
    accounts: Vec<BankAccount>,
}

impl Ledger for VecLedger {
    fn next_id(&self) -> AccountId {
        AccountId::new(self.accounts.len() as u64 + 1)
    }

    fn find_by_id(&self, id: AccountId) -> Option<BankAccount> {
        self.accounts.iter().find(|a| a.id == id).cloned()
    }

    fn find_by_id_and_owner(&self, id: AccountId, owner: UserId) -> Option<BankAccount> {
        self.accounts
            .iter()
            .find(|a| a.id == id && a.owner == owner)
            .cloned()
    }

    fn list_by_owner(&self, owner: UserId) -> Vec<BankAccount> {
        self.accounts
            .iter()
            .filter(|a| a.owner == owner)
            .cloned()
            .collect()
    }

    fn insert(&mut self, account: BankAccount) {
        self.accounts.push(account);
    }

    fn replace(&mut self, account: BankAccount) {
        if let Some(stored) = self.accounts.iter_mut().find(|a| a.id == account.id) {
            *stored = account;
        }
    }

    fn remove(&mut self, id: AccountId) -> bool {
        let before = self.accounts.len();
        self.accounts.retain(|a| a.id != id);
        self.accounts.len() < before
    }
}

fn make_directory() -> OneUserDirectory {
    OneUserDirectory {
        user: User {
            id: UserId::new(1),
            user_name: "prop_user".to_string(),
            first_name: "Prop".to_string(),
            family_name: "Tester".to_string(),
            is_active: true,
        },
    }
}

fn seeded_ledger(balance: Decimal) -> VecLedger {
    let mut ledger = VecLedger::default();
    ledger.insert(BankAccount {
        id: AccountId::new(1),
        account_name: "Checking".to_string(),
        description: "Property fixture".to_string(),
        balance,
        owner: UserId::new(1),
    });
    ledger
}

/// Strategy for valid opening balances (100.00 to 10,000.00).
fn opening_balance() -> impl Strategy<Value = Decimal> {
    (10_000i64..=1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for account balances with comfortable headroom (1,000.01 to
/// 10,000.00), so both withdrawal rules have room to trigger.
fn roomy_balance() -> impl Strategy<Value = Decimal> {
    (100_001i64..=1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: Creation invariants
    // =========================================================================

    /// *For any* valid opening balance, the returned account keeps the
    /// balance in range and carries the acting owner.
    #[test]
    fn prop_create_satisfies_invariants(balance in opening_balance()) {
        let directory = make_directory();
        let mut ledger = VecLedger::default();

        let account = TellerService::create_account(
            &directory,
            &mut ledger,
            UserId::new(1),
            CreateAccountInput {
                account_name: "Checking".to_string(),
                description: "Property fixture".to_string(),
                initial_balance: balance,
            },
        )
        .unwrap();

        prop_assert!(account.balance >= MINIMUM_BALANCE);
        prop_assert!(account.balance <= Decimal::new(1_000_000, 2));
        prop_assert_eq!(account.owner, UserId::new(1));
    }

    // =========================================================================
    // Property 2: Withdrawal floor and cap
    // =========================================================================

    /// *For any* withdrawal leaving less than the minimum, the rejection
    /// is the floor - independent of the 90% rule - and the balance is
    /// unchanged.
    #[test]
    fn prop_withdraw_floor_rejected_first(
        balance in roomy_balance(),
        shortfall in 1i64..10_000i64,
    ) {
        // amount chosen so that balance - amount < 100.00
        let amount = balance - MINIMUM_BALANCE + Decimal::new(shortfall, 2);
        let directory = make_directory();
        let mut ledger = seeded_ledger(balance);

        let result = TellerService::withdraw(
            &directory,
            &mut ledger,
            UserId::new(1),
            AccountId::new(1),
            amount,
        );

        prop_assert_eq!(result, Err(TellerError::BelowMinimumBalance));
        prop_assert_eq!(ledger.find_by_id(AccountId::new(1)).unwrap().balance, balance);
    }

    /// *For any* withdrawal above 90% of the balance that still clears
    /// the floor, the rejection is the cap and the balance is unchanged.
    #[test]
    fn prop_withdraw_above_cap_rejected(balance in roomy_balance()) {
        // Just above 90%: floor still passes because balance > 1000.00.
        let amount = balance * Decimal::new(90, 2) + Decimal::new(1, 2);
        prop_assume!(balance - amount >= MINIMUM_BALANCE);

        let directory = make_directory();
        let mut ledger = seeded_ledger(balance);

        let result = TellerService::withdraw(
            &directory,
            &mut ledger,
            UserId::new(1),
            AccountId::new(1),
            amount,
        );

        prop_assert_eq!(result, Err(TellerError::ExceedsWithdrawalCap));
        prop_assert_eq!(ledger.find_by_id(AccountId::new(1)).unwrap().balance, balance);
    }

    // =========================================================================
    // Property 3: Deposit/withdraw round trip
    // =========================================================================

    /// *For any* amount both operations individually accept, a deposit
    /// followed by an equal withdrawal restores the original balance.
    #[test]
    fn prop_deposit_withdraw_round_trip(
        balance in opening_balance(),
        amount_cents in 1i64..90_000i64,
    ) {
        // amount <= 900.00 <= 9 * minimum, so the post-deposit cap always
        // allows withdrawing it back.
        let amount = Decimal::new(amount_cents, 2);
        let directory = make_directory();
        let mut ledger = seeded_ledger(balance);

        TellerService::deposit(
            &directory,
            &mut ledger,
            UserId::new(1),
            AccountId::new(1),
            amount,
        )
        .unwrap();
        let account = TellerService::withdraw(
            &directory,
            &mut ledger,
            UserId::new(1),
            AccountId::new(1),
            amount,
        )
        .unwrap();

        prop_assert_eq!(account.balance, balance);
    }

    // =========================================================================
    // Property 4: Rejections never mutate state
    // =========================================================================

    /// *For any* replacement request above the single-transaction cap,
    /// nothing about the stored account changes.
    #[test]
    fn prop_rejected_replace_leaves_state(
        balance in opening_balance(),
        excess in 1i64..100_000i64,
    ) {
        let requested = balance + Decimal::new(1_000_000, 2) + Decimal::new(excess, 2);
        let directory = make_directory();
        let mut ledger = seeded_ledger(balance);
        let before = ledger.find_by_id(AccountId::new(1)).unwrap();

        let result = TellerService::replace_account_fields(
            &directory,
            &mut ledger,
            UserId::new(1),
            AccountId::new(1),
            Some("Renamed".to_string()),
            Some("Rewritten".to_string()),
            requested,
        );

        prop_assert_eq!(result, Err(TellerError::ExceedsSingleTransactionCap));
        prop_assert_eq!(ledger.find_by_id(AccountId::new(1)).unwrap(), before);
    }
}
