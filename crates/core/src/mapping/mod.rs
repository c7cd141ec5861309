//! Transaction kind to account mapping.
//!
//! Every business event the system records is classified by a closed
//! [`TransactionKind`]. [`AccountMapping::builtin`] is total over the
//! enum, so every kind resolves to a debit/credit account code pair at
//! compile time; the bootstrap migration materializes the same set as
//! rows so operators can deactivate a mapping without a deploy.

use serde::{Deserialize, Serialize};

/// Semantic classification of a recordable business event.
///
/// This is global business-rule configuration, intentionally NOT
/// parameterized by entity: the per-entity chart supplies the accounts,
/// the mapping supplies the codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Cash sale: bank in, revenue up.
    SaleCash,
    /// Credit sale: receivable up, revenue up.
    SaleCredit,
    /// Cash purchase of stock.
    PurchaseCash,
    /// Credit purchase of stock.
    PurchaseCredit,
    /// Owner pays capital into the business.
    CapitalContribution,
    /// Periodic straight-line depreciation charge.
    MonthlyDepreciation,
    /// Disposal: remove the asset's gross cost from the books.
    DisposalCostRemove,
    /// Disposal: recognize cash proceeds.
    DisposalSaleCash,
    /// Disposal: recognize proceeds on credit.
    DisposalSaleCredit,
    /// Disposal: proceeds exceeded net book value.
    DisposalGain,
    /// Disposal: proceeds fell short of net book value.
    DisposalLoss,
}

impl TransactionKind {
    /// All kinds, in seeding order.
    pub const ALL: [Self; 11] = [
        Self::SaleCash,
        Self::SaleCredit,
        Self::PurchaseCash,
        Self::PurchaseCredit,
        Self::CapitalContribution,
        Self::MonthlyDepreciation,
        Self::DisposalCostRemove,
        Self::DisposalSaleCash,
        Self::DisposalSaleCredit,
        Self::DisposalGain,
        Self::DisposalLoss,
    ];

    /// Returns the canonical string form used in the database and the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SaleCash => "sale_cash",
            Self::SaleCredit => "sale_credit",
            Self::PurchaseCash => "purchase_cash",
            Self::PurchaseCredit => "purchase_credit",
            Self::CapitalContribution => "capital_contribution",
            Self::MonthlyDepreciation => "monthly_depreciation",
            Self::DisposalCostRemove => "disposal_cost_remove",
            Self::DisposalSaleCash => "disposal_sale_cash",
            Self::DisposalSaleCredit => "disposal_sale_credit",
            Self::DisposalGain => "disposal_gain",
            Self::DisposalLoss => "disposal_loss",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown transaction type: {s}"))
    }
}

/// The debit/credit account codes a transaction kind posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountMapping {
    /// The kind this mapping belongs to.
    pub kind: TransactionKind,
    /// Account code debited.
    pub debit_code: &'static str,
    /// Account code credited.
    pub credit_code: &'static str,
    /// Whether a VAT side entry accompanies the primary entry.
    pub apply_vat: bool,
    /// Operator-facing description.
    pub description: &'static str,
}

impl AccountMapping {
    /// Returns the built-in mapping for a kind.
    ///
    /// Total over [`TransactionKind`]: there is no kind without a mapping.
    #[must_use]
    pub const fn builtin(kind: TransactionKind) -> Self {
        let (debit_code, credit_code, apply_vat, description) = match kind {
            TransactionKind::SaleCash => ("1001", "4001", true, "Cash sale"),
            TransactionKind::SaleCredit => ("1101", "4001", true, "Credit sale"),
            TransactionKind::PurchaseCash => ("5001", "1001", true, "Cash purchase"),
            TransactionKind::PurchaseCredit => ("5001", "2001", true, "Credit purchase"),
            TransactionKind::CapitalContribution => {
                ("1001", "3001", false, "Owner capital contribution")
            }
            TransactionKind::MonthlyDepreciation => {
                ("5201", "1601", false, "Monthly depreciation charge")
            }
            TransactionKind::DisposalCostRemove => {
                ("5301", "1501", false, "Asset disposal: remove cost")
            }
            TransactionKind::DisposalSaleCash => {
                ("1001", "5301", false, "Asset disposal: cash proceeds")
            }
            TransactionKind::DisposalSaleCredit => {
                ("1101", "5301", false, "Asset disposal: credit proceeds")
            }
            TransactionKind::DisposalGain => ("5301", "4101", false, "Gain on asset disposal"),
            TransactionKind::DisposalLoss => ("5302", "5301", false, "Loss on asset disposal"),
        };
        Self {
            kind,
            debit_code,
            credit_code,
            apply_vat,
            description,
        }
    }

    /// All built-in mappings, in seeding order.
    #[must_use]
    pub fn all() -> impl Iterator<Item = Self> {
        TransactionKind::ALL.into_iter().map(Self::builtin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn test_eleven_builtin_mappings() {
        assert_eq!(AccountMapping::all().count(), 11);
    }

    #[test]
    fn test_kind_string_roundtrip() {
        for kind in TransactionKind::ALL {
            assert_eq!(TransactionKind::from_str(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(TransactionKind::from_str("petty_cash_topup").is_err());
    }

    #[test]
    fn test_mapping_sides_differ() {
        for mapping in AccountMapping::all() {
            assert_ne!(
                mapping.debit_code, mapping.credit_code,
                "{} maps both sides to the same code",
                mapping.kind
            );
        }
    }

    #[test]
    fn test_mapping_kinds_unique() {
        let kinds: HashSet<_> = AccountMapping::all().map(|m| m.kind).collect();
        assert_eq!(kinds.len(), 11);
    }

    #[test]
    fn test_sale_cash_mapping() {
        let mapping = AccountMapping::builtin(TransactionKind::SaleCash);
        assert_eq!(mapping.debit_code, "1001");
        assert_eq!(mapping.credit_code, "4001");
        assert!(mapping.apply_vat);
    }

    #[test]
    fn test_vat_only_on_trading_kinds() {
        for mapping in AccountMapping::all() {
            let expect_vat = matches!(
                mapping.kind,
                TransactionKind::SaleCash
                    | TransactionKind::SaleCredit
                    | TransactionKind::PurchaseCash
                    | TransactionKind::PurchaseCredit
            );
            assert_eq!(mapping.apply_vat, expect_vat, "{}", mapping.kind);
        }
    }

    #[test]
    fn test_disposal_clearing_account_is_consistent() {
        // Cost removal, proceeds, and gain/loss all settle through 5301.
        let clearing = "5301";
        assert_eq!(
            AccountMapping::builtin(TransactionKind::DisposalCostRemove).debit_code,
            clearing
        );
        assert_eq!(
            AccountMapping::builtin(TransactionKind::DisposalSaleCash).credit_code,
            clearing
        );
        assert_eq!(
            AccountMapping::builtin(TransactionKind::DisposalGain).debit_code,
            clearing
        );
        assert_eq!(
            AccountMapping::builtin(TransactionKind::DisposalLoss).credit_code,
            clearing
        );
    }
}
