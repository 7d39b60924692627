//! The bookkeeping state object.
//!
//! [`Books`] owns the account registry, the journal, and the identifier
//! generator. It is an explicit state handle: the composition root creates
//! one instance and passes it into every operation, so tests can work
//! against isolated instances instead of a process-wide singleton.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::id::IdGenerator;
use super::types::{Account, AccountType, JournalEntry, JournalLine, PostEntryInput};
use crate::reports::{self, AccountLedger, TrialBalanceRow};

/// In-memory bookkeeping state: chart of accounts plus posted journal.
///
/// All mutating operations validate before they mutate; a failed call
/// leaves the state untouched. Callers sharing one instance across threads
/// must wrap it in a lock so "check invariant, then mutate" stays atomic.
#[derive(Debug, Default)]
pub struct Books {
    accounts: Vec<Account>,
    entries: Vec<JournalEntry>,
    ids: IdGenerator,
}

impl Books {
    /// Creates an empty bookkeeping state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new account in the registry.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::DuplicateCode`] if an account with the same
    /// code already exists (case-sensitive exact match).
    pub fn create_account(
        &mut self,
        code: &str,
        name: &str,
        account_type: AccountType,
    ) -> Result<Account, LedgerError> {
        if self.accounts.iter().any(|a| a.code == code) {
            return Err(LedgerError::DuplicateCode(code.to_string()));
        }

        let account = Account {
            id: self.ids.next("acc"),
            code: code.to_string(),
            name: name.to_string(),
            account_type,
        };

        self.accounts.push(account.clone());
        Ok(account)
    }

    /// Returns a snapshot of all accounts sorted by code.
    ///
    /// Ordering is lexicographic string ordering, not numeric: callers
    /// relying on numeric account-code ordering must zero-pad their codes.
    /// Later mutation of the registry does not affect a returned snapshot.
    #[must_use]
    pub fn list_accounts(&self) -> Vec<Account> {
        let mut accounts = self.accounts.clone();
        accounts.sort_by(|a, b| a.code.cmp(&b.code));
        accounts
    }

    /// Looks up an account by id.
    #[must_use]
    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Posts a journal entry atomically.
    ///
    /// Validation runs in a fixed order and the first failing check
    /// determines the reported error:
    ///
    /// 1. the entry must have at least one line;
    /// 2. per line: the account must exist;
    /// 3. per line: missing debit/credit default to 0, negatives rejected;
    /// 4. per line: debit and credit cannot both be positive;
    /// 5. per line: debit and credit cannot both be zero;
    /// 6. total debits must equal total credits after rounding both sums
    ///    to 2 decimal places.
    ///
    /// Identifiers are allocated only after every check passes, and the
    /// entry is appended with all its lines or not at all. The journal can
    /// never contain an invalid entry or a dangling line.
    ///
    /// # Errors
    ///
    /// Returns the [`LedgerError`] for the first failing check.
    pub fn post_entry(&mut self, input: PostEntryInput) -> Result<JournalEntry, LedgerError> {
        if input.lines.is_empty() {
            return Err(LedgerError::EmptyEntry);
        }

        let mut validated = Vec::with_capacity(input.lines.len());
        for line in &input.lines {
            if self.account(&line.account_id).is_none() {
                return Err(LedgerError::UnknownAccount(line.account_id.clone()));
            }

            let debit = line.debit.unwrap_or(Decimal::ZERO);
            let credit = line.credit.unwrap_or(Decimal::ZERO);

            if debit < Decimal::ZERO || credit < Decimal::ZERO {
                return Err(LedgerError::NegativeAmount);
            }
            if debit > Decimal::ZERO && credit > Decimal::ZERO {
                return Err(LedgerError::AmbiguousLine);
            }
            if debit == Decimal::ZERO && credit == Decimal::ZERO {
                return Err(LedgerError::EmptyLine);
            }

            validated.push((line.account_id.clone(), debit, credit));
        }

        let total_debit: Decimal = validated.iter().map(|(_, d, _)| *d).sum();
        let total_credit: Decimal = validated.iter().map(|(_, _, c)| *c).sum();

        if total_debit.round_dp(2) != total_credit.round_dp(2) {
            return Err(LedgerError::Unbalanced {
                debit: total_debit,
                credit: total_credit,
            });
        }

        // All checks passed: allocate identifiers and append.
        let entry_id = self.ids.next("je");
        let lines = validated
            .into_iter()
            .map(|(account_id, debit, credit)| JournalLine {
                id: self.ids.next("line"),
                entry_id: entry_id.clone(),
                account_id,
                debit,
                credit,
            })
            .collect();

        let entry = JournalEntry {
            id: entry_id,
            date: input.date,
            description: input.description,
            lines,
        };

        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Returns a snapshot of all entries sorted by date.
    ///
    /// Entries sharing a date keep their insertion order (stable sort).
    #[must_use]
    pub fn list_entries(&self) -> Vec<JournalEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by_key(|e| e.date);
        entries
    }

    /// Derives the trial balance from the current state.
    #[must_use]
    pub fn trial_balance(&self) -> Vec<TrialBalanceRow> {
        reports::trial_balance(&self.accounts, &self.entries)
    }

    /// Derives the ledger view for one account from the current state.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AccountNotFound`] for an unknown account id.
    pub fn account_ledger(&self, account_id: &str) -> Result<AccountLedger, LedgerError> {
        reports::account_ledger(&self.accounts, &self.entries, account_id)
    }
}
