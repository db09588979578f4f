//! Bank account repository.

use tresor_core::teller::store::Ledger;
use tresor_core::teller::types::BankAccount;
use tresor_shared::types::{AccountId, UserId};

use crate::demo;

/// In-memory bank account repository, insertion-ordered.
///
/// Implements the [`Ledger`] capability consumed by the teller; the
/// mutating methods are only ever called after the teller's checks pass.
#[derive(Debug, Default)]
pub struct AccountLedger {
    accounts: Vec<BankAccount>,
}

impl AccountLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All accounts regardless of owner, in insertion order.
    ///
    /// Demo/debug listing; owner-scoped reads go through the teller.
    #[must_use]
    pub fn list_all(&self) -> &[BankAccount] {
        &self.accounts
    }

    /// Drops all accounts and repopulates the demo fixtures.
    pub fn reset_with_demo_data(&mut self) {
        self.accounts = demo::demo_accounts();
    }
}

impl Ledger for AccountLedger {
    fn next_id(&self) -> AccountId {
        // Count-based, not max-based: after a deletion the next id can
        // collide with a previously deleted one. Kept as-is; pinned by
        // test_next_id_reuses_ids_after_deletion below.
        let next = self.accounts.len() as u64 + 1;
        AccountId::new(next)
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

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_account(id: u64, owner: u64) -> BankAccount {
        BankAccount {
            id: AccountId::new(id),
            account_name: format!("Account {id}"),
            description: "Fixture".to_string(),
            balance: dec!(500.00),
            owner: UserId::new(owner),
        }
    }

    #[test]
    fn test_next_id_is_count_based() {
        let mut ledger = AccountLedger::new();
        assert_eq!(ledger.next_id(), AccountId::new(1));

        ledger.insert(make_account(1, 1));
        ledger.insert(make_account(2, 1));
        assert_eq!(ledger.next_id(), AccountId::new(3));
    }

    #[test]
    fn test_next_id_reuses_ids_after_deletion() {
        // Pins the count-based allocation scheme: deleting account 1 of
        // two shrinks the count to one, so the next id collides with the
        // surviving account 2.
        let mut ledger = AccountLedger::new();
        ledger.insert(make_account(1, 1));
        ledger.insert(make_account(2, 1));
        assert!(ledger.remove(AccountId::new(1)));

        assert_eq!(ledger.next_id(), AccountId::new(2));
    }

    #[test]
    fn test_find_by_id_and_owner_distinguishes_mismatch() {
        let mut ledger = AccountLedger::new();
        ledger.insert(make_account(1, 1));

        assert!(ledger.find_by_id(AccountId::new(1)).is_some());
        assert!(ledger
            .find_by_id_and_owner(AccountId::new(1), UserId::new(2))
            .is_none());
        assert!(ledger.find_by_id(AccountId::new(2)).is_none());
    }

    #[test]
    fn test_list_by_owner_preserves_insertion_order() {
        let mut ledger = AccountLedger::new();
        ledger.insert(make_account(1, 1));
        ledger.insert(make_account(2, 2));
        ledger.insert(make_account(3, 1));

        let owned: Vec<u64> = ledger
            .list_by_owner(UserId::new(1))
            .into_iter()
            .map(|a| a.id.into_inner())
            .collect();
        assert_eq!(owned, vec![1, 3]);
    }

    #[test]
    fn test_replace_updates_stored_record() {
        let mut ledger = AccountLedger::new();
        ledger.insert(make_account(1, 1));

        let mut updated = make_account(1, 1);
        updated.balance = dec!(750.00);
        ledger.replace(updated);

        assert_eq!(
            ledger.find_by_id(AccountId::new(1)).unwrap().balance,
            dec!(750.00)
        );
    }

    #[test]
    fn test_reset_with_demo_data() {
        let mut ledger = AccountLedger::new();
        ledger.insert(make_account(1, 9));
        ledger.reset_with_demo_data();

        assert_eq!(ledger.list_all().len(), 10);
        // Every demo balance already satisfies the account minimum.
        assert!(ledger.list_all().iter().all(|a| a.balance >= dec!(100.00)));
    }
}
