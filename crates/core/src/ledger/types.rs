//! Ledger domain types.

use serde::{Deserialize, Serialize};

/// Classification of a ledger account.
///
/// In double-entry bookkeeping:
/// - Debits increase asset/expense accounts, decrease the rest
/// - Credits increase liability/equity/revenue accounts, decrease the rest
/// - Contra-asset accounts (e.g. accumulated depreciation) sit on the asset
///   side of the balance sheet but carry a credit-normal balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Asset account (debit-normal).
    Asset,
    /// Contra-asset account such as accumulated depreciation (credit-normal).
    ContraAsset,
    /// Liability account (credit-normal).
    Liability,
    /// Equity account (credit-normal).
    Equity,
    /// Revenue account (credit-normal).
    Revenue,
    /// Expense account (debit-normal).
    Expense,
}

impl AccountType {
    /// Returns the canonical string form used in the database enum.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::ContraAsset => "contra_asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
            Self::Revenue => "revenue",
            Self::Expense => "expense",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asset" => Ok(Self::Asset),
            "contra_asset" => Ok(Self::ContraAsset),
            "liability" => Ok(Self::Liability),
            "equity" => Ok(Self::Equity),
            "revenue" => Ok(Self::Revenue),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown account type: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_account_type_roundtrip() {
        for ty in [
            AccountType::Asset,
            AccountType::ContraAsset,
            AccountType::Liability,
            AccountType::Equity,
            AccountType::Revenue,
            AccountType::Expense,
        ] {
            assert_eq!(AccountType::from_str(ty.as_str()).unwrap(), ty);
        }
    }

    #[test]
    fn test_unknown_account_type_rejected() {
        assert!(AccountType::from_str("goodwill").is_err());
    }
}
