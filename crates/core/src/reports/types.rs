//! Report data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{Account, AccountType};

/// One trial balance row, derived on demand and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceRow {
    /// The account ID.
    pub account_id: String,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Total of all debits posted to the account.
    pub total_debit: Decimal,
    /// Total of all credits posted to the account.
    pub total_credit: Decimal,
    /// Net balance in the account's normal-balance direction.
    pub balance: Decimal,
}

/// One ledger row for a single account, with a running balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerLine {
    /// Date of the entry the line belongs to.
    pub date: NaiveDate,
    /// Description of the entry the line belongs to.
    pub description: String,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Running balance after this line.
    pub balance: Decimal,
}

/// Per-account ledger view: every posting to one account in date order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountLedger {
    /// The account this ledger belongs to.
    pub account: Account,
    /// Chronological postings with running balance.
    pub lines: Vec<LedgerLine>,
    /// Running balance after the last line (0 if no lines exist).
    pub final_balance: Decimal,
}
