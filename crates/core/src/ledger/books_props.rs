//! Property tests for journal posting and report derivation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::books::Books;
use super::types::{AccountType, LineInput, PostEntryInput};

/// A simple balanced movement: one debit leg and one credit leg.
#[derive(Debug, Clone)]
struct Movement {
    debit_account: usize,
    credit_account: usize,
    amount: Decimal,
    day: u32,
}

fn movement_strategy(account_count: usize) -> impl Strategy<Value = Movement> {
    (
        0..account_count,
        0..account_count,
        1i64..10_000_000,
        1u32..=28,
    )
        .prop_map(|(debit_account, credit_account, cents, day)| Movement {
            debit_account,
            credit_account,
            amount: Decimal::new(cents, 2),
            day,
        })
}

fn movements_strategy(account_count: usize) -> impl Strategy<Value = Vec<Movement>> {
    prop::collection::vec(movement_strategy(account_count), 1..40)
}

fn fixture_books() -> (Books, Vec<String>) {
    let mut books = Books::new();
    let chart = [
        ("100", "Cash", AccountType::Asset),
        ("320", "Accounts Payable", AccountType::Liability),
        ("500", "Capital", AccountType::Equity),
        ("600", "Sales", AccountType::Income),
        ("770", "Rent", AccountType::Expense),
    ];
    let ids = chart
        .iter()
        .map(|(code, name, account_type)| {
            books.create_account(code, name, *account_type).unwrap().id
        })
        .collect();
    (books, ids)
}

fn post_movements(books: &mut Books, ids: &[String], movements: &[Movement]) {
    for m in movements {
        books
            .post_entry(PostEntryInput {
                date: NaiveDate::from_ymd_opt(2025, 1, m.day).unwrap(),
                description: "movement".to_string(),
                lines: vec![
                    LineInput {
                        account_id: ids[m.debit_account].clone(),
                        debit: Some(m.amount),
                        credit: None,
                    },
                    LineInput {
                        account_id: ids[m.credit_account].clone(),
                        debit: None,
                        credit: Some(m.amount),
                    },
                ],
            })
            .unwrap();
    }
}

proptest! {
    /// Every accepted entry balances after rounding to 2 dp.
    #[test]
    fn prop_accepted_entries_balance(movements in movements_strategy(5)) {
        let (mut books, ids) = fixture_books();
        post_movements(&mut books, &ids, &movements);

        for entry in books.list_entries() {
            let debits: Decimal = entry.lines.iter().map(|l| l.debit).sum();
            let credits: Decimal = entry.lines.iter().map(|l| l.credit).sum();
            prop_assert_eq!(debits.round_dp(2), credits.round_dp(2));
        }
    }

    /// Trial balance rows sum to zero under the sign convention,
    /// whatever balanced entries were posted.
    #[test]
    fn prop_trial_balance_sums_to_zero(movements in movements_strategy(5)) {
        let (mut books, ids) = fixture_books();
        post_movements(&mut books, &ids, &movements);

        let signed_sum: Decimal = books
            .trial_balance()
            .iter()
            .map(|r| {
                if r.account_type.is_debit_normal() {
                    r.balance
                } else {
                    -r.balance
                }
            })
            .sum();
        prop_assert_eq!(signed_sum, Decimal::ZERO);
    }

    /// For every account the ledger's final balance agrees with the trial
    /// balance row derived from the same entry set.
    #[test]
    fn prop_ledger_agrees_with_trial_balance(movements in movements_strategy(5)) {
        let (mut books, ids) = fixture_books();
        post_movements(&mut books, &ids, &movements);

        let rows = books.trial_balance();
        for id in &ids {
            let ledger = books.account_ledger(id).unwrap();
            let row = rows.iter().find(|r| &r.account_id == id).unwrap();
            prop_assert_eq!(ledger.final_balance, row.balance);
            if let Some(last) = ledger.lines.last() {
                prop_assert_eq!(last.balance, ledger.final_balance);
            }
        }
    }

    /// Reads are idempotent: two snapshots without intervening writes
    /// are equal.
    #[test]
    fn prop_reads_idempotent(movements in movements_strategy(5)) {
        let (mut books, ids) = fixture_books();
        post_movements(&mut books, &ids, &movements);

        prop_assert_eq!(books.list_accounts(), books.list_accounts());
        prop_assert_eq!(books.list_entries(), books.list_entries());
    }
}
