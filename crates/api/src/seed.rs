//! Demo-data seeding for development.
//!
//! Populates a fixed demo chart of accounts and a fixed sequence of
//! balanced journal entries. The caller is responsible for the
//! only-if-empty idempotency guard.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use tally_core::ledger::{AccountType, Books, LedgerError, LineInput, PostEntryInput};

fn post(
    books: &mut Books,
    date: NaiveDate,
    description: &str,
    debit_account: &str,
    credit_account: &str,
    amount: Decimal,
) -> Result<(), LedgerError> {
    books.post_entry(PostEntryInput {
        date,
        description: description.to_string(),
        lines: vec![
            LineInput {
                account_id: debit_account.to_string(),
                debit: Some(amount),
                credit: None,
            },
            LineInput {
                account_id: credit_account.to_string(),
                debit: None,
                credit: Some(amount),
            },
        ],
    })?;
    Ok(())
}

/// Seeds the demo chart of accounts and entries into `books`.
///
/// # Errors
///
/// Propagates any [`LedgerError`]; cannot occur with the fixed demo data
/// against an empty registry.
pub fn seed_demo_books(books: &mut Books) -> Result<(), LedgerError> {
    // Chart of accounts
    let cash = books.create_account("100", "Cash", AccountType::Asset)?;
    let bank = books.create_account("102", "Bank", AccountType::Asset)?;
    let materials = books.create_account("150", "Raw Materials Inventory", AccountType::Asset)?;
    let equipment = books.create_account("255", "Production Equipment", AccountType::Asset)?;
    let payables = books.create_account("320", "Accounts Payable", AccountType::Liability)?;
    let equity = books.create_account("500", "Owner's Equity", AccountType::Equity)?;
    let product_sales = books.create_account("600", "Product Sales", AccountType::Income)?;
    let service_revenue = books.create_account("602", "Service Revenue", AccountType::Income)?;
    let operating = books.create_account("770", "Operating Expenses", AccountType::Expense)?;

    let d = |day: u32| NaiveDate::from_ymd_opt(2025, 12, day).unwrap_or_default();

    // Journal entries
    post(
        books,
        d(1),
        "Owner capital contribution",
        &cash.id,
        &equity.id,
        Decimal::from(500_000),
    )?;
    post(
        books,
        d(2),
        "Raw materials purchased on credit",
        &materials.id,
        &payables.id,
        Decimal::from(80_000),
    )?;
    post(
        books,
        d(3),
        "Supplier payment via bank",
        &payables.id,
        &bank.id,
        Decimal::from(20_000),
    )?;
    post(
        books,
        d(3),
        "Equipment installation expense",
        &operating.id,
        &bank.id,
        Decimal::from(10_000),
    )?;
    post(
        books,
        d(4),
        "Production line purchase",
        &equipment.id,
        &cash.id,
        Decimal::from(200_000),
    )?;
    post(
        books,
        d(4),
        "Product sale, paid by bank transfer",
        &bank.id,
        &product_sales.id,
        Decimal::from(150_000),
    )?;
    post(
        books,
        d(5),
        "Annual service contract sale",
        &bank.id,
        &service_revenue.id,
        Decimal::from(30_000),
    )?;

    Ok(())
}
