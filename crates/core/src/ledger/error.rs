//! Ledger error types.

use rust_decimal::Decimal;
use grootboek_shared::types::AccountId;
use thiserror::Error;

/// Errors that can occur while validating or posting journal entries.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Entry amount cannot be zero.
    #[error("Entry amount cannot be zero")]
    ZeroAmount,

    /// Entry amount cannot be negative.
    #[error("Entry amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// Debit and credit side must hit different accounts.
    #[error("Debit and credit account must differ: {0}")]
    SameAccount(AccountId),

    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Account is inactive and cannot be posted to.
    #[error("Account {0} is inactive")]
    AccountInactive(AccountId),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroAmount => "ZERO_AMOUNT",
            Self::NegativeAmount(_) => "NEGATIVE_AMOUNT",
            Self::SameAccount(_) => "SAME_ACCOUNT",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::AccountInactive(_) => "ACCOUNT_INACTIVE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::ZeroAmount | Self::NegativeAmount(_) | Self::SameAccount(_) => 400,
            Self::AccountNotFound(_) => 404,
            Self::AccountInactive(_) => 422,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn nil_account() -> AccountId {
        AccountId::from_uuid(Uuid::nil())
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(LedgerError::ZeroAmount.error_code(), "ZERO_AMOUNT");
        assert_eq!(
            LedgerError::NegativeAmount(dec!(-5)).error_code(),
            "NEGATIVE_AMOUNT"
        );
        assert_eq!(
            LedgerError::SameAccount(nil_account()).error_code(),
            "SAME_ACCOUNT"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(LedgerError::ZeroAmount.http_status_code(), 400);
        assert_eq!(
            LedgerError::AccountNotFound(nil_account()).http_status_code(),
            404
        );
        assert_eq!(
            LedgerError::AccountInactive(nil_account()).http_status_code(),
            422
        );
    }
}
