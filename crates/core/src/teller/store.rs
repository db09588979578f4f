//! Store capabilities consumed by the teller.
//!
//! The engine holds no persistent state of its own; it mediates between
//! these two injected stores. Concrete in-memory implementations live in
//! `tresor-store`.

use tresor_shared::types::{AccountId, UserId};

use super::types::{BankAccount, User};

/// Read-only user lookup.
pub trait Directory {
    /// Resolves a user id to the full user record.
    fn resolve_owner(&self, id: UserId) -> Option<User>;
}

/// Bank account storage.
///
/// Mutating methods are called only by the teller after every applicable
/// precondition and invariant check has passed.
pub trait Ledger {
    /// Allocates the next account id.
    ///
    /// Computed as `count(existing accounts) + 1` at allocation time.
    /// This is count-based, not max-based: after a deletion a new id can
    /// collide with a previously deleted one. Faithful to the system this
    /// replaces; pinned by tests in the store crate.
    fn next_id(&self) -> AccountId;

    /// Returns the account with the given id, if any.
    fn find_by_id(&self, id: AccountId) -> Option<BankAccount>;

    /// Returns the account only when it exists AND belongs to `owner`.
    ///
    /// Callers that need to distinguish "absent" from "present but other
    /// owner" must use [`Ledger::find_by_id`] and compare owners.
    fn find_by_id_and_owner(&self, id: AccountId, owner: UserId) -> Option<BankAccount>;

    /// All accounts owned by `owner`, in insertion order.
    fn list_by_owner(&self, owner: UserId) -> Vec<BankAccount>;

    /// Inserts a new account record.
    fn insert(&mut self, account: BankAccount);

    /// Replaces the stored record with the same id.
    fn replace(&mut self, account: BankAccount);

    /// Removes the account; returns whether it existed.
    fn remove(&mut self, id: AccountId) -> bool;
}
