//! In-memory repositories for Tresor.
//!
//! This crate provides the concrete stores the teller operates on:
//! - `UserDirectory` - the user repository
//! - `AccountLedger` - the bank account repository
//! - `Bank` - the aggregate the composition root owns and shares
//!
//! Both repositories are plain Vec-backed, insertion-ordered stores. The
//! system they replace kept these lists as module-level globals; here
//! they are explicit values owned by the process-level composition root
//! and injected into the rule engine.

pub mod bank;
pub mod demo;
pub mod directory;
pub mod ledger;

pub use bank::Bank;
pub use directory::{NewUser, UserChanges, UserDirectory};
pub use ledger::AccountLedger;
