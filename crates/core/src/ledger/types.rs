//! Ledger domain types for accounts and journal entries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account type classification.
///
/// In double-entry bookkeeping the account type determines the normal
/// balance side:
/// - Asset/Expense accounts are debit-normal (debits increase the balance)
/// - Liability/Equity/Income accounts are credit-normal (credits increase it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// Resources owned by the business (cash, inventory, equipment).
    Asset,
    /// Obligations owed to others (payables, loans).
    Liability,
    /// Owner's residual interest in the business.
    Equity,
    /// Revenue earned by the business.
    Income,
    /// Costs incurred by the business.
    Expense,
}

impl AccountType {
    /// Returns true if the account's normal balance is on the debit side.
    #[must_use]
    pub fn is_debit_normal(self) -> bool {
        matches!(self, Self::Asset | Self::Expense)
    }

    /// Returns the signed balance change for a posting against this
    /// account type.
    ///
    /// Asset/Expense: `debit - credit`. Liability/Equity/Income:
    /// `credit - debit`.
    #[must_use]
    pub fn balance_change(self, debit: Decimal, credit: Decimal) -> Decimal {
        if self.is_debit_normal() {
            debit - credit
        } else {
            credit - debit
        }
    }
}

impl std::str::FromStr for AccountType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASSET" => Ok(Self::Asset),
            "LIABILITY" => Ok(Self::Liability),
            "EQUITY" => Ok(Self::Equity),
            "INCOME" => Ok(Self::Income),
            "EXPENSE" => Ok(Self::Expense),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Asset => "ASSET",
            Self::Liability => "LIABILITY",
            Self::Equity => "EQUITY",
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        };
        f.write_str(s)
    }
}

/// A chart-of-accounts entry.
///
/// Accounts are immutable once created and live for the process lifetime.
/// The `code` is unique across the registry (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier (e.g. `acc_1`).
    pub id: String,
    /// Account code (e.g. `"100"`). Sorting is lexicographic, not numeric.
    pub code: String,
    /// Human-readable account name.
    pub name: String,
    /// Account type classification.
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

/// A single line of a posted journal entry.
///
/// Exactly one of `debit`/`credit` is strictly positive; the other is zero.
/// Lines never exist outside their parent entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalLine {
    /// Unique identifier (e.g. `line_3`).
    pub id: String,
    /// The entry this line belongs to.
    pub entry_id: String,
    /// The account this line posts to.
    pub account_id: String,
    /// Debit amount (zero if this is a credit line).
    pub debit: Decimal,
    /// Credit amount (zero if this is a debit line).
    pub credit: Decimal,
}

/// A posted journal entry.
///
/// Entries are accepted atomically, are immutable and permanent, and are
/// balanced: debits equal credits after rounding both sums to 2 decimal
/// places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier (e.g. `je_2`).
    pub id: String,
    /// Entry date.
    pub date: NaiveDate,
    /// Free-form description.
    pub description: String,
    /// The entry's lines (at least one).
    pub lines: Vec<JournalLine>,
}

/// Input for a single line when posting an entry.
///
/// Missing debit/credit default to zero during validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineInput {
    /// The account to post to.
    pub account_id: String,
    /// Debit amount (optional, defaults to 0).
    pub debit: Option<Decimal>,
    /// Credit amount (optional, defaults to 0).
    pub credit: Option<Decimal>,
}

/// Input for posting a new journal entry.
#[derive(Debug, Clone)]
pub struct PostEntryInput {
    /// The entry date.
    pub date: NaiveDate,
    /// Free-form description.
    pub description: String,
    /// The lines to post (must be non-empty).
    pub lines: Vec<LineInput>,
}
