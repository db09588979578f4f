//! Account mutation rule engine.
//!
//! This module implements the core banking functionality:
//! - Domain types for users and bank accounts
//! - Typed mutation intents
//! - Balance rule validation
//! - Error types with stable classification
//! - The teller service that checks and commits mutations

pub mod error;
pub mod rules;
pub mod service;
pub mod store;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::TellerError;
pub use service::{MutationOutcome, TellerService};
pub use store::{Directory, Ledger};
pub use types::{
    AccountMutation, BankAccount, CreateAccountInput, User, MAX_SINGLE_AMOUNT,
    MINIMUM_BALANCE, MIN_BALANCE_FRACTION, WITHDRAWAL_CAP_FRACTION,
};
