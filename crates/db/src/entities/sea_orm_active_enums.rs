//! `SeaORM` active enums mirroring the PostgreSQL enum types.
//!
//! Each enum converts to and from its `grootboek-core` counterpart so the
//! repositories can hand pure domain values to the core logic.

use grootboek_core::asset::DisposalMethod as CoreDisposalMethod;
use grootboek_core::coa::OwnershipForm as CoreOwnershipForm;
use grootboek_core::journal::ManualJournalStatus as CoreManualJournalStatus;
use grootboek_core::ledger::AccountType as CoreAccountType;
use grootboek_core::mapping::TransactionKind as CoreTransactionKind;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ledger account classification.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "account_type")]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Asset account (debit-normal).
    #[sea_orm(string_value = "asset")]
    Asset,
    /// Contra-asset account (credit-normal).
    #[sea_orm(string_value = "contra_asset")]
    ContraAsset,
    /// Liability account.
    #[sea_orm(string_value = "liability")]
    Liability,
    /// Equity account.
    #[sea_orm(string_value = "equity")]
    Equity,
    /// Revenue account.
    #[sea_orm(string_value = "revenue")]
    Revenue,
    /// Expense account.
    #[sea_orm(string_value = "expense")]
    Expense,
}

impl From<CoreAccountType> for AccountType {
    fn from(value: CoreAccountType) -> Self {
        match value {
            CoreAccountType::Asset => Self::Asset,
            CoreAccountType::ContraAsset => Self::ContraAsset,
            CoreAccountType::Liability => Self::Liability,
            CoreAccountType::Equity => Self::Equity,
            CoreAccountType::Revenue => Self::Revenue,
            CoreAccountType::Expense => Self::Expense,
        }
    }
}

impl From<&AccountType> for CoreAccountType {
    fn from(value: &AccountType) -> Self {
        match value {
            AccountType::Asset => Self::Asset,
            AccountType::ContraAsset => Self::ContraAsset,
            AccountType::Liability => Self::Liability,
            AccountType::Equity => Self::Equity,
            AccountType::Revenue => Self::Revenue,
            AccountType::Expense => Self::Expense,
        }
    }
}

/// Legal ownership form of a business entity.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "ownership_form")]
#[serde(rename_all = "snake_case")]
pub enum OwnershipForm {
    /// Sole proprietorship.
    #[sea_orm(string_value = "sole")]
    Sole,
    /// Partnership.
    #[sea_orm(string_value = "partnership")]
    Partnership,
    /// Close corporation / LLC.
    #[sea_orm(string_value = "llc")]
    Llc,
    /// Private company.
    #[sea_orm(string_value = "corporation")]
    Corporation,
}

impl From<CoreOwnershipForm> for OwnershipForm {
    fn from(value: CoreOwnershipForm) -> Self {
        match value {
            CoreOwnershipForm::Sole => Self::Sole,
            CoreOwnershipForm::Partnership => Self::Partnership,
            CoreOwnershipForm::Llc => Self::Llc,
            CoreOwnershipForm::Corporation => Self::Corporation,
        }
    }
}

impl From<&OwnershipForm> for CoreOwnershipForm {
    fn from(value: &OwnershipForm) -> Self {
        match value {
            OwnershipForm::Sole => Self::Sole,
            OwnershipForm::Partnership => Self::Partnership,
            OwnershipForm::Llc => Self::Llc,
            OwnershipForm::Corporation => Self::Corporation,
        }
    }
}

/// Semantic transaction classification.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "transaction_kind")]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Cash sale.
    #[sea_orm(string_value = "sale_cash")]
    SaleCash,
    /// Credit sale.
    #[sea_orm(string_value = "sale_credit")]
    SaleCredit,
    /// Cash purchase.
    #[sea_orm(string_value = "purchase_cash")]
    PurchaseCash,
    /// Credit purchase.
    #[sea_orm(string_value = "purchase_credit")]
    PurchaseCredit,
    /// Owner capital contribution.
    #[sea_orm(string_value = "capital_contribution")]
    CapitalContribution,
    /// Periodic depreciation charge.
    #[sea_orm(string_value = "monthly_depreciation")]
    MonthlyDepreciation,
    /// Disposal cost removal.
    #[sea_orm(string_value = "disposal_cost_remove")]
    DisposalCostRemove,
    /// Disposal cash proceeds.
    #[sea_orm(string_value = "disposal_sale_cash")]
    DisposalSaleCash,
    /// Disposal credit proceeds.
    #[sea_orm(string_value = "disposal_sale_credit")]
    DisposalSaleCredit,
    /// Gain on disposal.
    #[sea_orm(string_value = "disposal_gain")]
    DisposalGain,
    /// Loss on disposal.
    #[sea_orm(string_value = "disposal_loss")]
    DisposalLoss,
}

impl From<CoreTransactionKind> for TransactionKind {
    fn from(value: CoreTransactionKind) -> Self {
        match value {
            CoreTransactionKind::SaleCash => Self::SaleCash,
            CoreTransactionKind::SaleCredit => Self::SaleCredit,
            CoreTransactionKind::PurchaseCash => Self::PurchaseCash,
            CoreTransactionKind::PurchaseCredit => Self::PurchaseCredit,
            CoreTransactionKind::CapitalContribution => Self::CapitalContribution,
            CoreTransactionKind::MonthlyDepreciation => Self::MonthlyDepreciation,
            CoreTransactionKind::DisposalCostRemove => Self::DisposalCostRemove,
            CoreTransactionKind::DisposalSaleCash => Self::DisposalSaleCash,
            CoreTransactionKind::DisposalSaleCredit => Self::DisposalSaleCredit,
            CoreTransactionKind::DisposalGain => Self::DisposalGain,
            CoreTransactionKind::DisposalLoss => Self::DisposalLoss,
        }
    }
}

impl From<&TransactionKind> for CoreTransactionKind {
    fn from(value: &TransactionKind) -> Self {
        match value {
            TransactionKind::SaleCash => Self::SaleCash,
            TransactionKind::SaleCredit => Self::SaleCredit,
            TransactionKind::PurchaseCash => Self::PurchaseCash,
            TransactionKind::PurchaseCredit => Self::PurchaseCredit,
            TransactionKind::CapitalContribution => Self::CapitalContribution,
            TransactionKind::MonthlyDepreciation => Self::MonthlyDepreciation,
            TransactionKind::DisposalCostRemove => Self::DisposalCostRemove,
            TransactionKind::DisposalSaleCash => Self::DisposalSaleCash,
            TransactionKind::DisposalSaleCredit => Self::DisposalSaleCredit,
            TransactionKind::DisposalGain => Self::DisposalGain,
            TransactionKind::DisposalLoss => Self::DisposalLoss,
        }
    }
}

/// How disposal proceeds are settled.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "disposal_method")]
#[serde(rename_all = "lowercase")]
pub enum DisposalMethod {
    /// Cash proceeds.
    #[sea_orm(string_value = "cash")]
    Cash,
    /// Proceeds on credit.
    #[sea_orm(string_value = "credit")]
    Credit,
}

impl From<CoreDisposalMethod> for DisposalMethod {
    fn from(value: CoreDisposalMethod) -> Self {
        match value {
            CoreDisposalMethod::Cash => Self::Cash,
            CoreDisposalMethod::Credit => Self::Credit,
        }
    }
}

impl From<&DisposalMethod> for CoreDisposalMethod {
    fn from(value: &DisposalMethod) -> Self {
        match value {
            DisposalMethod::Cash => Self::Cash,
            DisposalMethod::Credit => Self::Credit,
        }
    }
}

/// Fixed-asset lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "disposal_status")]
#[serde(rename_all = "lowercase")]
pub enum DisposalStatus {
    /// Asset is on the books.
    #[sea_orm(string_value = "active")]
    Active,
    /// Asset has been disposed; terminal.
    #[sea_orm(string_value = "disposed")]
    Disposed,
}

/// Manual journal lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "manual_journal_status")]
#[serde(rename_all = "lowercase")]
pub enum ManualJournalStatus {
    /// Being drafted.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Approved for posting.
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Rejected; terminal.
    #[sea_orm(string_value = "rejected")]
    Rejected,
    /// Posted; terminal.
    #[sea_orm(string_value = "posted")]
    Posted,
}

impl From<CoreManualJournalStatus> for ManualJournalStatus {
    fn from(value: CoreManualJournalStatus) -> Self {
        match value {
            CoreManualJournalStatus::Draft => Self::Draft,
            CoreManualJournalStatus::Approved => Self::Approved,
            CoreManualJournalStatus::Rejected => Self::Rejected,
            CoreManualJournalStatus::Posted => Self::Posted,
        }
    }
}

impl From<&ManualJournalStatus> for CoreManualJournalStatus {
    fn from(value: &ManualJournalStatus) -> Self {
        match value {
            ManualJournalStatus::Draft => Self::Draft,
            ManualJournalStatus::Approved => Self::Approved,
            ManualJournalStatus::Rejected => Self::Rejected,
            ManualJournalStatus::Posted => Self::Posted,
        }
    }
}
