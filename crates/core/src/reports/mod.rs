//! Derived report views.
//!
//! Reports are recomputed from the raw accounts and entries on every call.
//! There is deliberately no caching or materialized view: the journal is
//! the single source of truth and these functions never mutate it.

pub mod service;
pub mod types;

pub use service::{account_ledger, trial_balance};
pub use types::{AccountLedger, LedgerLine, TrialBalanceRow};
