//! Report derivation.
//!
//! Both reports read the account registry and the journal and perform no
//! mutation. Balances follow the normal-balance sign convention: debit
//! minus credit for ASSET/EXPENSE accounts, credit minus debit for
//! LIABILITY/EQUITY/INCOME accounts.

use rust_decimal::Decimal;

use super::types::{AccountLedger, LedgerLine, TrialBalanceRow};
use crate::ledger::{Account, JournalEntry, LedgerError};

/// Derives the trial balance: one row per account, sorted by code.
///
/// Zero-activity accounts are not filtered out; every registered account
/// appears with zero totals.
#[must_use]
pub fn trial_balance(accounts: &[Account], entries: &[JournalEntry]) -> Vec<TrialBalanceRow> {
    let mut rows: Vec<TrialBalanceRow> = accounts
        .iter()
        .map(|account| {
            let mut total_debit = Decimal::ZERO;
            let mut total_credit = Decimal::ZERO;

            for line in entries.iter().flat_map(|e| &e.lines) {
                if line.account_id == account.id {
                    total_debit += line.debit;
                    total_credit += line.credit;
                }
            }

            TrialBalanceRow {
                account_id: account.id.clone(),
                code: account.code.clone(),
                name: account.name.clone(),
                account_type: account.account_type,
                total_debit,
                total_credit,
                balance: account.account_type.balance_change(total_debit, total_credit),
            }
        })
        .collect();

    rows.sort_by(|a, b| a.code.cmp(&b.code));
    rows
}

/// Derives the ledger view for one account.
///
/// Collects every journal line touching the account across all entries,
/// sorted by entry date (ties keep insertion order), and carries a running
/// balance forward line by line.
///
/// # Errors
///
/// Returns [`LedgerError::AccountNotFound`] if the id is unknown.
pub fn account_ledger(
    accounts: &[Account],
    entries: &[JournalEntry],
    account_id: &str,
) -> Result<AccountLedger, LedgerError> {
    let account = accounts
        .iter()
        .find(|a| a.id == account_id)
        .ok_or_else(|| LedgerError::AccountNotFound(account_id.to_string()))?;

    let mut sorted: Vec<&JournalEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);

    let mut running_balance = Decimal::ZERO;
    let mut lines = Vec::new();

    for entry in sorted {
        for line in &entry.lines {
            if line.account_id != account_id {
                continue;
            }

            running_balance += account
                .account_type
                .balance_change(line.debit, line.credit);

            lines.push(LedgerLine {
                date: entry.date,
                description: entry.description.clone(),
                debit: line.debit,
                credit: line.credit,
                balance: running_balance,
            });
        }
    }

    Ok(AccountLedger {
        account: account.clone(),
        lines,
        final_balance: running_balance,
    })
}
