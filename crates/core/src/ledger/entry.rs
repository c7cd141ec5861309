//! Journal entry specification and validation.

use chrono::NaiveDate;
use grootboek_shared::types::AccountId;
use rust_decimal::Decimal;

use super::error::LedgerError;

/// Specification for one balanced journal entry before it is persisted.
///
/// Every entry materializes as exactly two ledger postings: a debit line
/// carrying the full amount and a credit line carrying the full amount.
#[derive(Debug, Clone)]
pub struct NewJournalEntry {
    /// Date the entry takes effect.
    pub entry_date: NaiveDate,
    /// Account debited.
    pub debit_account_id: AccountId,
    /// Account credited.
    pub credit_account_id: AccountId,
    /// Entry amount (must be positive).
    pub amount: Decimal,
    /// Human-readable memo.
    pub memo: String,
}

/// One side of a journal entry, ready for persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostingLine {
    /// Account the line posts to.
    pub account_id: AccountId,
    /// Debit column value.
    pub debit: Decimal,
    /// Credit column value.
    pub credit: Decimal,
}

impl NewJournalEntry {
    /// Validates the double-entry preconditions.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is not positive or both sides hit
    /// the same account.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.amount == Decimal::ZERO {
            return Err(LedgerError::ZeroAmount);
        }
        if self.amount < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount(self.amount));
        }
        if self.debit_account_id == self.credit_account_id {
            return Err(LedgerError::SameAccount(self.debit_account_id));
        }
        Ok(())
    }

    /// Returns the two posting lines this entry expands into.
    ///
    /// The debit line and credit line each carry the full amount, so
    /// `sum(debit) == sum(credit) == amount` by construction.
    #[must_use]
    pub fn posting_lines(&self) -> [PostingLine; 2] {
        [
            PostingLine {
                account_id: self.debit_account_id,
                debit: self.amount,
                credit: Decimal::ZERO,
            },
            PostingLine {
                account_id: self.credit_account_id,
                debit: Decimal::ZERO,
                credit: self.amount,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_entry(amount: Decimal) -> NewJournalEntry {
        NewJournalEntry {
            entry_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            debit_account_id: AccountId::new(),
            credit_account_id: AccountId::new(),
            amount,
            memo: "Cash sale".to_string(),
        }
    }

    #[test]
    fn test_valid_entry() {
        assert!(make_entry(dec!(1000)).validate().is_ok());
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert!(matches!(
            make_entry(dec!(0)).validate(),
            Err(LedgerError::ZeroAmount)
        ));
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert!(matches!(
            make_entry(dec!(-10)).validate(),
            Err(LedgerError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_same_account_rejected() {
        let mut entry = make_entry(dec!(10));
        entry.credit_account_id = entry.debit_account_id;
        assert!(matches!(
            entry.validate(),
            Err(LedgerError::SameAccount(_))
        ));
    }

    #[test]
    fn test_posting_lines_balance() {
        let entry = make_entry(dec!(250.75));
        let [debit_line, credit_line] = entry.posting_lines();

        assert_eq!(debit_line.account_id, entry.debit_account_id);
        assert_eq!(debit_line.debit, dec!(250.75));
        assert_eq!(debit_line.credit, dec!(0));

        assert_eq!(credit_line.account_id, entry.credit_account_id);
        assert_eq!(credit_line.debit, dec!(0));
        assert_eq!(credit_line.credit, dec!(250.75));

        assert_eq!(
            debit_line.debit + credit_line.debit,
            debit_line.credit + credit_line.credit
        );
    }
}
