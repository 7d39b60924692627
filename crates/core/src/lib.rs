//! Core bookkeeping logic for Tally.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, validation rules, and report derivations live here.
//!
//! # Modules
//!
//! - `ledger` - Account registry, journal posting, and validation
//! - `reports` - Trial balance and per-account ledger derivation

pub mod ledger;
pub mod reports;

pub use ledger::{Account, AccountType, Books, JournalEntry, JournalLine, LedgerError};
pub use reports::{AccountLedger, LedgerLine, TrialBalanceRow};
