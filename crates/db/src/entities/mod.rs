//! `SeaORM` entity definitions.

pub mod accounts;
pub mod business_entities;
pub mod coa_template_lines;
pub mod coa_templates;
pub mod disposals;
pub mod fixed_assets;
pub mod journal_entries;
pub mod ledger_postings;
pub mod manual_journal_lines;
pub mod manual_journals;
pub mod sea_orm_active_enums;
pub mod tax_configs;
pub mod transaction_type_mappings;
pub mod transactions;
