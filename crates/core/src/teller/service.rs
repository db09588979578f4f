//! Teller service: validates and commits account mutations.
//!
//! The service contains pure business logic with no storage dependencies.
//! Every call is a stateless check-then-commit transaction over the
//! injected [`Directory`] and [`Ledger`]; on any failure the stores are
//! left untouched.

use rust_decimal::Decimal;

use tresor_shared::types::money::round_cents;
use tresor_shared::types::{AccountId, UserId};

use super::error::TellerError;
use super::rules;
use super::store::{Directory, Ledger};
use super::types::{AccountMutation, BankAccount, CreateAccountInput, User};

/// Result of a committed mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The account as stored after the mutation.
    Account(BankAccount),
    /// The account was removed; deletion returns no body.
    Deleted,
}

/// Account mutation rule engine.
///
/// For every mutation the preconditions are checked in a fixed order,
/// short-circuiting on the first failure:
///
/// 1. Owner existence
/// 2. Owner activity
/// 3. Account existence (all operations except create)
/// 4. Account ownership (all operations except create)
///
/// Only then are the operation-specific balance rules evaluated, and only
/// after those pass is the new state written back.
pub struct TellerService;

impl TellerService {
    /// Applies a typed mutation intent on behalf of `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns the classified rejection of the first failed check.
    pub fn apply(
        directory: &impl Directory,
        ledger: &mut impl Ledger,
        owner_id: UserId,
        mutation: AccountMutation,
    ) -> Result<MutationOutcome, TellerError> {
        match mutation {
            AccountMutation::Create(input) => {
                Self::create_account(directory, ledger, owner_id, input)
                    .map(MutationOutcome::Account)
            }
            AccountMutation::ReplaceFields {
                account_id,
                account_name,
                description,
                new_balance,
            } => Self::replace_account_fields(
                directory,
                ledger,
                owner_id,
                account_id,
                account_name,
                description,
                new_balance,
            )
            .map(MutationOutcome::Account),
            AccountMutation::Deposit { account_id, amount } => {
                Self::deposit(directory, ledger, owner_id, account_id, amount)
                    .map(MutationOutcome::Account)
            }
            AccountMutation::Withdraw { account_id, amount } => {
                Self::withdraw(directory, ledger, owner_id, account_id, amount)
                    .map(MutationOutcome::Account)
            }
            AccountMutation::Delete { account_id } => {
                Self::delete_account(directory, ledger, owner_id, account_id)
                    .map(|()| MutationOutcome::Deleted)
            }
        }
    }

    /// Opens a new account for `owner_id`.
    ///
    /// # Errors
    ///
    /// Fails on owner checks or an opening balance below the minimum.
    pub fn create_account(
        directory: &impl Directory,
        ledger: &mut impl Ledger,
        owner_id: UserId,
        input: CreateAccountInput,
    ) -> Result<BankAccount, TellerError> {
        let owner = Self::authorize_owner(directory, owner_id)?;
        rules::check_opening_balance(input.initial_balance)?;

        let account = BankAccount {
            id: ledger.next_id(),
            account_name: input.account_name,
            description: input.description,
            balance: round_cents(input.initial_balance),
            owner: owner.id,
        };
        ledger.insert(account.clone());
        Ok(account)
    }

    /// Replaces name, description, and balance in one call.
    ///
    /// Non-empty incoming name/description replace the stored values;
    /// empty or absent fields leave them unchanged. The owner never
    /// changes.
    ///
    /// # Errors
    ///
    /// Fails on owner/account checks or the replacement balance rules.
    pub fn replace_account_fields(
        directory: &impl Directory,
        ledger: &mut impl Ledger,
        owner_id: UserId,
        account_id: AccountId,
        account_name: Option<String>,
        description: Option<String>,
        new_balance: Decimal,
    ) -> Result<BankAccount, TellerError> {
        let owner = Self::authorize_owner(directory, owner_id)?;
        let mut account = Self::authorize_account(ledger, &owner, account_id)?;

        rules::check_replacement_balance(account.balance, new_balance)?;

        if let Some(name) = account_name
            && !name.is_empty()
        {
            account.account_name = name;
        }
        if let Some(desc) = description
            && !desc.is_empty()
        {
            account.description = desc;
        }
        account.balance = round_cents(new_balance);

        ledger.replace(account.clone());
        Ok(account)
    }

    /// Adds funds to an account.
    ///
    /// # Errors
    ///
    /// Fails on owner/account checks or a non-positive amount.
    pub fn deposit(
        directory: &impl Directory,
        ledger: &mut impl Ledger,
        owner_id: UserId,
        account_id: AccountId,
        amount: Decimal,
    ) -> Result<BankAccount, TellerError> {
        let owner = Self::authorize_owner(directory, owner_id)?;
        let mut account = Self::authorize_account(ledger, &owner, account_id)?;

        rules::check_deposit(amount)?;

        account.balance = round_cents(account.balance + amount);
        ledger.replace(account.clone());
        Ok(account)
    }

    /// Removes funds from an account.
    ///
    /// # Errors
    ///
    /// Fails on owner/account checks, a non-positive amount, the minimum
    /// balance floor, or the 90% withdrawal cap.
    pub fn withdraw(
        directory: &impl Directory,
        ledger: &mut impl Ledger,
        owner_id: UserId,
        account_id: AccountId,
        amount: Decimal,
    ) -> Result<BankAccount, TellerError> {
        let owner = Self::authorize_owner(directory, owner_id)?;
        let mut account = Self::authorize_account(ledger, &owner, account_id)?;

        rules::check_withdrawal(account.balance, amount)?;

        account.balance = round_cents(account.balance - amount);
        ledger.replace(account.clone());
        Ok(account)
    }

    /// Closes an account.
    ///
    /// No balance rules apply; the same owner and ownership checks as any
    /// other mutation do.
    ///
    /// # Errors
    ///
    /// Fails on owner/account checks.
    pub fn delete_account(
        directory: &impl Directory,
        ledger: &mut impl Ledger,
        owner_id: UserId,
        account_id: AccountId,
    ) -> Result<(), TellerError> {
        let owner = Self::authorize_owner(directory, owner_id)?;
        let account = Self::authorize_account(ledger, &owner, account_id)?;

        ledger.remove(account.id);
        Ok(())
    }

    /// Fetches a single account for its owner.
    ///
    /// Reads validate owner existence but not activity; an inactive owner
    /// can still see their accounts.
    ///
    /// # Errors
    ///
    /// Fails with `OwnerNotFound`, `AccountNotFound`, or
    /// `OwnershipMismatch` - the latter two kept distinct so the boundary
    /// can render 404 vs. the generic 400.
    pub fn get_account(
        directory: &impl Directory,
        ledger: &impl Ledger,
        owner_id: UserId,
        account_id: AccountId,
    ) -> Result<BankAccount, TellerError> {
        let owner = directory
            .resolve_owner(owner_id)
            .ok_or(TellerError::OwnerNotFound(owner_id))?;

        if ledger.find_by_id(account_id).is_none() {
            return Err(TellerError::AccountNotFound(account_id));
        }
        ledger
            .find_by_id_and_owner(account_id, owner.id)
            .ok_or(TellerError::OwnershipMismatch)
    }

    /// Lists all accounts owned by `owner_id`, in insertion order.
    ///
    /// An empty list is a success, not a rejection.
    ///
    /// # Errors
    ///
    /// Fails with `OwnerNotFound` if the owner does not exist.
    pub fn list_accounts(
        directory: &impl Directory,
        ledger: &impl Ledger,
        owner_id: UserId,
    ) -> Result<Vec<BankAccount>, TellerError> {
        let owner = directory
            .resolve_owner(owner_id)
            .ok_or(TellerError::OwnerNotFound(owner_id))?;
        Ok(ledger.list_by_owner(owner.id))
    }

    /// Precondition 1 + 2: the owner exists and is active.
    fn authorize_owner(
        directory: &impl Directory,
        owner_id: UserId,
    ) -> Result<User, TellerError> {
        let owner = directory
            .resolve_owner(owner_id)
            .ok_or(TellerError::OwnerNotFound(owner_id))?;
        if !owner.is_active {
            return Err(TellerError::OwnerInactive(owner_id));
        }
        Ok(owner)
    }

    /// Precondition 3 + 4: the account exists and belongs to `owner`.
    fn authorize_account(
        ledger: &impl Ledger,
        owner: &User,
        account_id: AccountId,
    ) -> Result<BankAccount, TellerError> {
        let account = ledger
            .find_by_id(account_id)
            .ok_or(TellerError::AccountNotFound(account_id))?;
        if account.owner != owner.id {
            return Err(TellerError::OwnershipMismatch);
        }
        Ok(account)
    }
}
