//! Double-entry bookkeeping logic.
//!
//! This module implements the core ledger functionality:
//! - Chart of accounts with unique codes
//! - Journal entries (debits and credits) with atomic posting
//! - Business rule validation
//! - Error types for ledger operations
//! - Identifier generation for ledger entities

pub mod books;
pub mod error;
pub mod id;
pub mod types;

#[cfg(test)]
mod books_props;

pub use books::Books;
pub use error::LedgerError;
pub use id::IdGenerator;
pub use types::{Account, AccountType, JournalEntry, JournalLine, LineInput, PostEntryInput};
