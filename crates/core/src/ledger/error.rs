//! Ledger error types for validation and lookup errors.
//!
//! Every error here is a caller-input or state-lookup error: none are
//! transient or retryable, and none are fatal to the process. The core
//! raises them at the point of detection and performs no partial mutation
//! before doing so.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// An account with the same code already exists.
    #[error("Account code already exists: {0}")]
    DuplicateCode(String),

    /// Entry has no lines.
    #[error("Entry must contain at least one line")]
    EmptyEntry,

    /// A line references an account that does not exist.
    #[error("Unknown account id: {0}")]
    UnknownAccount(String),

    /// A line has a negative debit or credit.
    #[error("Debit and credit cannot be negative")]
    NegativeAmount,

    /// A line has both debit and credit positive.
    #[error("A line cannot have both debit and credit")]
    AmbiguousLine,

    /// A line has both debit and credit zero.
    #[error("A line must have either debit or credit")]
    EmptyLine,

    /// Entry debits and credits do not balance after rounding to 2 dp.
    #[error("Entry is not balanced. Debit: {debit}, Credit: {credit}")]
    Unbalanced {
        /// Total debit amount (unrounded).
        debit: Decimal,
        /// Total credit amount (unrounded).
        credit: Decimal,
    },

    /// Ledger requested for an account that does not exist.
    #[error("Account not found: {0}")]
    AccountNotFound(String),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateCode(_) => "DUPLICATE_CODE",
            Self::EmptyEntry => "EMPTY_ENTRY",
            Self::UnknownAccount(_) => "UNKNOWN_ACCOUNT",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::AmbiguousLine => "AMBIGUOUS_LINE",
            Self::EmptyLine => "EMPTY_LINE",
            Self::Unbalanced { .. } => "UNBALANCED_ENTRY",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - validation errors
            Self::EmptyEntry
            | Self::UnknownAccount(_)
            | Self::NegativeAmount
            | Self::AmbiguousLine
            | Self::EmptyLine
            | Self::Unbalanced { .. } => 400,

            // 404 Not Found - lookup errors
            Self::AccountNotFound(_) => 404,

            // 409 Conflict - uniqueness violations
            Self::DuplicateCode(_) => 409,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LedgerError::DuplicateCode("100".into()).error_code(),
            "DUPLICATE_CODE"
        );
        assert_eq!(LedgerError::EmptyEntry.error_code(), "EMPTY_ENTRY");
        assert_eq!(
            LedgerError::UnknownAccount("acc_9".into()).error_code(),
            "UNKNOWN_ACCOUNT"
        );
        assert_eq!(LedgerError::NegativeAmount.error_code(), "NEGATIVE_AMOUNT");
        assert_eq!(LedgerError::AmbiguousLine.error_code(), "AMBIGUOUS_LINE");
        assert_eq!(LedgerError::EmptyLine.error_code(), "EMPTY_LINE");
        assert_eq!(
            LedgerError::Unbalanced {
                debit: dec!(100),
                credit: dec!(50),
            }
            .error_code(),
            "UNBALANCED_ENTRY"
        );
        assert_eq!(
            LedgerError::AccountNotFound("acc_9".into()).error_code(),
            "ACCOUNT_NOT_FOUND"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(LedgerError::EmptyEntry.http_status_code(), 400);
        assert_eq!(
            LedgerError::UnknownAccount("acc_9".into()).http_status_code(),
            400
        );
        assert_eq!(
            LedgerError::AccountNotFound("acc_9".into()).http_status_code(),
            404
        );
        assert_eq!(
            LedgerError::DuplicateCode("100".into()).http_status_code(),
            409
        );
    }

    #[test]
    fn test_error_display() {
        let err = LedgerError::Unbalanced {
            debit: dec!(100.00),
            credit: dec!(50.00),
        };
        assert_eq!(
            err.to_string(),
            "Entry is not balanced. Debit: 100.00, Credit: 50.00"
        );

        let err = LedgerError::DuplicateCode("100".into());
        assert_eq!(err.to_string(), "Account code already exists: 100");
    }
}
