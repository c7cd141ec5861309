//! Manual journal approval workflow.
//!
//! The interactive journal manager lets a bookkeeper draft multi-line
//! entries, route them through approval, and post them. It shares the
//! double-entry balance invariant with the automatic mapping path but
//! none of its account resolution: lines reference accounts directly.

use grootboek_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Debits and credits may differ by strictly less than one cent.
#[must_use]
pub fn balance_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

/// Lifecycle of a manual journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManualJournalStatus {
    /// Being drafted; editable.
    Draft,
    /// Approved and ready for posting.
    Approved,
    /// Rejected; terminal.
    Rejected,
    /// Posted to the ledger; terminal.
    Posted,
}

impl ManualJournalStatus {
    /// Returns the canonical string form used in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Posted => "posted",
        }
    }

    /// Returns true if the journal can still change.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Posted)
    }
}

impl std::fmt::Display for ManualJournalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a manual journal: exactly one side carries an amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalLine {
    /// Account this line posts to.
    pub account_id: AccountId,
    /// Debit column value (zero if the credit side is used).
    pub debit: Decimal,
    /// Credit column value (zero if the debit side is used).
    pub credit: Decimal,
    /// Optional line memo.
    pub memo: Option<String>,
}

/// Errors from manual journal validation and state transitions.
#[derive(Debug, Error)]
pub enum JournalError {
    /// A journal needs at least two lines.
    #[error("Journal must have at least 2 lines")]
    InsufficientLines,

    /// A line must carry an amount on exactly one side.
    #[error("Line {0} must have an amount on exactly one of debit or credit")]
    LineSides(usize),

    /// Line amounts cannot be negative.
    #[error("Line {0} has a negative amount")]
    NegativeLine(usize),

    /// Debits and credits differ beyond tolerance.
    #[error("Journal is not balanced. Debit: {debit}, Credit: {credit}")]
    Unbalanced {
        /// Sum of debit columns.
        debit: Decimal,
        /// Sum of credit columns.
        credit: Decimal,
    },

    /// The requested transition is not allowed from the current status.
    #[error("Cannot {action} a {status} journal")]
    InvalidTransition {
        /// Current status.
        status: ManualJournalStatus,
        /// Attempted action.
        action: &'static str,
    },
}

impl JournalError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientLines => "INSUFFICIENT_LINES",
            Self::LineSides(_) => "INVALID_LINE_SIDES",
            Self::NegativeLine(_) => "NEGATIVE_LINE_AMOUNT",
            Self::Unbalanced { .. } => "UNBALANCED_JOURNAL",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InsufficientLines | Self::LineSides(_) | Self::NegativeLine(_) => 400,
            Self::Unbalanced { .. } | Self::InvalidTransition { .. } => 422,
        }
    }
}

/// Sums the debit and credit columns of a line set.
#[must_use]
pub fn totals(lines: &[JournalLine]) -> (Decimal, Decimal) {
    let debit = lines.iter().map(|l| l.debit).sum();
    let credit = lines.iter().map(|l| l.credit).sum();
    (debit, credit)
}

/// Returns true if the line set balances within tolerance.
#[must_use]
pub fn is_balanced(lines: &[JournalLine]) -> bool {
    let (debit, credit) = totals(lines);
    (debit - credit).abs() < balance_tolerance()
}

/// Validates a draft's line set: enough lines, well-formed sides, balanced.
///
/// # Errors
///
/// Returns the first violation found.
pub fn validate_lines(lines: &[JournalLine]) -> Result<(), JournalError> {
    if lines.len() < 2 {
        return Err(JournalError::InsufficientLines);
    }

    for (index, journal_line) in lines.iter().enumerate() {
        if journal_line.debit < Decimal::ZERO || journal_line.credit < Decimal::ZERO {
            return Err(JournalError::NegativeLine(index));
        }
        let has_debit = journal_line.debit > Decimal::ZERO;
        let has_credit = journal_line.credit > Decimal::ZERO;
        if has_debit == has_credit {
            return Err(JournalError::LineSides(index));
        }
    }

    if !is_balanced(lines) {
        let (debit, credit) = totals(lines);
        return Err(JournalError::Unbalanced { debit, credit });
    }

    Ok(())
}

/// Checks that a journal in `status` may be approved or rejected.
///
/// # Errors
///
/// Returns an error unless the journal is a draft.
pub fn validate_can_review(status: ManualJournalStatus) -> Result<(), JournalError> {
    if status == ManualJournalStatus::Draft {
        Ok(())
    } else {
        Err(JournalError::InvalidTransition {
            status,
            action: "review",
        })
    }
}

/// Checks that a journal in `status` may be posted.
///
/// # Errors
///
/// Returns an error unless the journal is approved.
pub fn validate_can_post(status: ManualJournalStatus) -> Result<(), JournalError> {
    if status == ManualJournalStatus::Approved {
        Ok(())
    } else {
        Err(JournalError::InvalidTransition {
            status,
            action: "post",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn debit_line(amount: Decimal) -> JournalLine {
        JournalLine {
            account_id: AccountId::new(),
            debit: amount,
            credit: Decimal::ZERO,
            memo: None,
        }
    }

    fn credit_line(amount: Decimal) -> JournalLine {
        JournalLine {
            account_id: AccountId::new(),
            debit: Decimal::ZERO,
            credit: amount,
            memo: None,
        }
    }

    #[test]
    fn test_balanced_two_line_journal() {
        let lines = vec![debit_line(dec!(100)), credit_line(dec!(100))];
        assert!(validate_lines(&lines).is_ok());
    }

    #[test]
    fn test_balanced_multi_line_journal() {
        let lines = vec![
            debit_line(dec!(70)),
            debit_line(dec!(30)),
            credit_line(dec!(100)),
        ];
        assert!(validate_lines(&lines).is_ok());
    }

    #[test]
    fn test_single_line_rejected() {
        assert!(matches!(
            validate_lines(&[debit_line(dec!(100))]),
            Err(JournalError::InsufficientLines)
        ));
    }

    #[test]
    fn test_unbalanced_rejected() {
        let lines = vec![debit_line(dec!(100)), credit_line(dec!(50))];
        assert!(matches!(
            validate_lines(&lines),
            Err(JournalError::Unbalanced { .. })
        ));
    }

    #[test]
    fn test_sub_cent_difference_tolerated() {
        let lines = vec![debit_line(dec!(100.005)), credit_line(dec!(100.00))];
        assert!(validate_lines(&lines).is_ok());
    }

    #[test]
    fn test_exact_cent_difference_rejected() {
        let lines = vec![debit_line(dec!(100.01)), credit_line(dec!(100.00))];
        assert!(matches!(
            validate_lines(&lines),
            Err(JournalError::Unbalanced { .. })
        ));
    }

    #[test]
    fn test_line_with_both_sides_rejected() {
        let both = JournalLine {
            account_id: AccountId::new(),
            debit: dec!(50),
            credit: dec!(50),
            memo: None,
        };
        let lines = vec![both, credit_line(dec!(0))];
        assert!(matches!(
            validate_lines(&lines),
            Err(JournalError::LineSides(0))
        ));
    }

    #[test]
    fn test_empty_line_rejected() {
        let empty = JournalLine {
            account_id: AccountId::new(),
            debit: dec!(0),
            credit: dec!(0),
            memo: None,
        };
        let lines = vec![debit_line(dec!(10)), empty];
        assert!(matches!(
            validate_lines(&lines),
            Err(JournalError::LineSides(1))
        ));
    }

    #[test]
    fn test_negative_line_rejected() {
        let negative = JournalLine {
            account_id: AccountId::new(),
            debit: dec!(-10),
            credit: dec!(0),
            memo: None,
        };
        let lines = vec![negative, credit_line(dec!(10))];
        assert!(matches!(
            validate_lines(&lines),
            Err(JournalError::NegativeLine(0))
        ));
    }

    #[test]
    fn test_review_only_from_draft() {
        assert!(validate_can_review(ManualJournalStatus::Draft).is_ok());
        for status in [
            ManualJournalStatus::Approved,
            ManualJournalStatus::Rejected,
            ManualJournalStatus::Posted,
        ] {
            assert!(matches!(
                validate_can_review(status),
                Err(JournalError::InvalidTransition { .. })
            ));
        }
    }

    #[test]
    fn test_post_only_from_approved() {
        assert!(validate_can_post(ManualJournalStatus::Approved).is_ok());
        for status in [
            ManualJournalStatus::Draft,
            ManualJournalStatus::Rejected,
            ManualJournalStatus::Posted,
        ] {
            assert!(matches!(
                validate_can_post(status),
                Err(JournalError::InvalidTransition { .. })
            ));
        }
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!ManualJournalStatus::Draft.is_terminal());
        assert!(!ManualJournalStatus::Approved.is_terminal());
        assert!(ManualJournalStatus::Rejected.is_terminal());
        assert!(ManualJournalStatus::Posted.is_terminal());
    }
}
