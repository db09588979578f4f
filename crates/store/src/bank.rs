//! The bank aggregate owned by the composition root.

use tresor_core::teller::store::Ledger;
use tresor_shared::error::{AppError, AppResult};
use tresor_shared::types::UserId;

use crate::directory::UserDirectory;
use crate::ledger::AccountLedger;

/// Both repositories behind a single handle.
///
/// The server shares one `Bank` behind an `RwLock`: reads take the read
/// lock, every mutation holds the write lock for the whole
/// check-then-commit sequence, so a rule check can never race a
/// write-back on the same account.
#[derive(Debug, Default)]
pub struct Bank {
    /// The user repository.
    pub directory: UserDirectory,
    /// The bank account repository.
    pub ledger: AccountLedger,
}

impl Bank {
    /// Creates an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bank pre-populated with the demo fixtures.
    #[must_use]
    pub fn seeded() -> Self {
        let mut bank = Self::new();
        bank.directory.reset_with_demo_data();
        bank.ledger.reset_with_demo_data();
        bank
    }

    /// Removes a user from the directory.
    ///
    /// Deletion is blocked while the user still owns accounts: cascading
    /// would bypass the teller's delete checks, and orphaning would
    /// strand balances nobody can reach. The owner must close their
    /// accounts first.
    ///
    /// # Errors
    ///
    /// `NotFound` if no such user; `Conflict` while accounts remain.
    pub fn remove_user(&mut self, id: UserId) -> AppResult<()> {
        if self.directory.find(id).is_none() {
            return Err(AppError::NotFound(format!("User {id} not found")));
        }
        let owned = self.ledger.list_by_owner(id).len();
        if owned > 0 {
            return Err(AppError::Conflict(format!(
                "User {id} still owns {owned} account(s); close them first"
            )));
        }
        self.directory.remove(id);
        Ok(())
    }
}
