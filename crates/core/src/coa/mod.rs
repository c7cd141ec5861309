//! Chart-of-accounts templates per ownership form.
//!
//! Every new entity gets a starter chart derived from its ownership form.
//! The operational section (bank, debtors, stock, VAT, fixed assets,
//! trading accounts) is identical across forms; only the equity section
//! differs. Each template carries every code the mapping table references
//! so account resolution can never miss for a freshly seeded entity.

use serde::{Deserialize, Serialize};

use crate::ledger::AccountType;
use crate::tax;

/// Legal ownership form of a business entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipForm {
    /// Sole proprietorship.
    Sole,
    /// Partnership.
    Partnership,
    /// Close corporation / LLC.
    Llc,
    /// Private company (Pty Ltd).
    Corporation,
}

impl OwnershipForm {
    /// All forms, in seeding order.
    pub const ALL: [Self; 4] = [
        Self::Sole,
        Self::Partnership,
        Self::Llc,
        Self::Corporation,
    ];

    /// Returns the canonical string form used in the database and the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sole => "sole",
            Self::Partnership => "partnership",
            Self::Llc => "llc",
            Self::Corporation => "corporation",
        }
    }

    /// Display name of this form's starter template.
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Sole => "Sole Proprietor Starter Chart",
            Self::Partnership => "Partnership Starter Chart",
            Self::Llc => "Close Corporation Starter Chart",
            Self::Corporation => "Private Company Starter Chart",
        }
    }
}

impl std::fmt::Display for OwnershipForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OwnershipForm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sole" => Ok(Self::Sole),
            "partnership" => Ok(Self::Partnership),
            "llc" => Ok(Self::Llc),
            "corporation" => Ok(Self::Corporation),
            _ => Err(format!("Unknown ownership form: {s}")),
        }
    }
}

/// One starter account in a chart template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateLine {
    /// Account code, unique within the template.
    pub code: &'static str,
    /// Account display name.
    pub name: &'static str,
    /// Account classification.
    pub account_type: AccountType,
}

const fn line(code: &'static str, name: &'static str, account_type: AccountType) -> TemplateLine {
    TemplateLine {
        code,
        name,
        account_type,
    }
}

/// Operational accounts shared by every ownership form.
const OPERATIONAL: &[TemplateLine] = &[
    line("1001", "Bank", AccountType::Asset),
    line("1101", "Accounts Receivable", AccountType::Asset),
    line("1501", "Fixed Assets at Cost", AccountType::Asset),
    line("1601", "Accumulated Depreciation", AccountType::ContraAsset),
    line("2001", "Accounts Payable", AccountType::Liability),
    line(tax::VAT_CONTROL_CODE, "VAT Control", AccountType::Liability),
    line("4001", "Sales Revenue", AccountType::Revenue),
    line("4101", "Gain on Asset Disposal", AccountType::Revenue),
    line("5001", "Purchases", AccountType::Expense),
    line("5201", "Depreciation Expense", AccountType::Expense),
    line("5301", "Asset Disposal", AccountType::Expense),
    line("5302", "Loss on Asset Disposal", AccountType::Expense),
    line(tax::VAT_EXPENSE_CODE, "VAT Expense", AccountType::Expense),
];

const SOLE_EQUITY: &[TemplateLine] = &[
    line("3001", "Owner's Capital", AccountType::Equity),
    line("3101", "Owner's Drawings", AccountType::Equity),
];

const PARTNERSHIP_EQUITY: &[TemplateLine] = &[
    line("3001", "Partners' Capital", AccountType::Equity),
    line("3101", "Partners' Current Accounts", AccountType::Equity),
];

const LLC_EQUITY: &[TemplateLine] = &[
    line("3001", "Members' Contribution", AccountType::Equity),
    line("3201", "Retained Earnings", AccountType::Equity),
];

const CORPORATION_EQUITY: &[TemplateLine] = &[
    line("3001", "Share Capital", AccountType::Equity),
    line("3201", "Retained Earnings", AccountType::Equity),
];

/// Returns the full starter template for an ownership form.
#[must_use]
pub fn template(form: OwnershipForm) -> Vec<TemplateLine> {
    let equity = match form {
        OwnershipForm::Sole => SOLE_EQUITY,
        OwnershipForm::Partnership => PARTNERSHIP_EQUITY,
        OwnershipForm::Llc => LLC_EQUITY,
        OwnershipForm::Corporation => CORPORATION_EQUITY,
    };

    OPERATIONAL
        .iter()
        .chain(equity.iter())
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::AccountMapping;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn test_ownership_form_roundtrip() {
        for form in OwnershipForm::ALL {
            assert_eq!(OwnershipForm::from_str(form.as_str()).unwrap(), form);
        }
    }

    #[test]
    fn test_unknown_form_rejected() {
        assert!(OwnershipForm::from_str("trust").is_err());
    }

    #[test]
    fn test_template_codes_unique() {
        for form in OwnershipForm::ALL {
            let lines = template(form);
            let codes: HashSet<_> = lines.iter().map(|l| l.code).collect();
            assert_eq!(codes.len(), lines.len(), "{form} has duplicate codes");
        }
    }

    #[test]
    fn test_every_mapping_code_is_seeded() {
        for form in OwnershipForm::ALL {
            let codes: HashSet<_> = template(form).iter().map(|l| l.code).collect();
            for mapping in AccountMapping::all() {
                assert!(
                    codes.contains(mapping.debit_code),
                    "{form} template misses debit code {} for {}",
                    mapping.debit_code,
                    mapping.kind
                );
                assert!(
                    codes.contains(mapping.credit_code),
                    "{form} template misses credit code {} for {}",
                    mapping.credit_code,
                    mapping.kind
                );
            }
        }
    }

    #[test]
    fn test_vat_pair_is_seeded() {
        for form in OwnershipForm::ALL {
            let codes: HashSet<_> = template(form).iter().map(|l| l.code).collect();
            assert!(codes.contains(tax::VAT_EXPENSE_CODE));
            assert!(codes.contains(tax::VAT_CONTROL_CODE));
        }
    }

    #[test]
    fn test_equity_section_varies_by_form() {
        let sole: Vec<_> = template(OwnershipForm::Sole)
            .into_iter()
            .filter(|l| l.account_type == AccountType::Equity)
            .map(|l| l.name)
            .collect();
        let corp: Vec<_> = template(OwnershipForm::Corporation)
            .into_iter()
            .filter(|l| l.account_type == AccountType::Equity)
            .map(|l| l.name)
            .collect();
        assert!(sole.contains(&"Owner's Drawings"));
        assert!(corp.contains(&"Share Capital"));
        assert_ne!(sole, corp);
    }

    #[test]
    fn test_accumulated_depreciation_is_contra_asset() {
        let lines = template(OwnershipForm::Sole);
        let accum = lines.iter().find(|l| l.code == "1601").unwrap();
        assert_eq!(accum.account_type, AccountType::ContraAsset);
    }
}
