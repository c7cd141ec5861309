//! Initial database migration.
//!
//! Creates all core tables, enums, and constraints. Natural-key unique
//! constraints back the idempotent bootstrap and the one-disposal-per-asset
//! guarantee.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: ENTITIES & TAX
        // ============================================================
        db.execute_unprepared(BUSINESS_ENTITIES_SQL).await?;
        db.execute_unprepared(TAX_CONFIGS_SQL).await?;

        // ============================================================
        // PART 3: CHART OF ACCOUNTS
        // ============================================================
        db.execute_unprepared(ACCOUNTS_SQL).await?;
        db.execute_unprepared(COA_TEMPLATES_SQL).await?;

        // ============================================================
        // PART 4: MAPPINGS, TRANSACTIONS & LEDGER
        // ============================================================
        db.execute_unprepared(MAPPINGS_SQL).await?;
        db.execute_unprepared(TRANSACTIONS_SQL).await?;
        db.execute_unprepared(JOURNAL_SQL).await?;

        // ============================================================
        // PART 5: FIXED ASSETS & DISPOSALS
        // ============================================================
        db.execute_unprepared(FIXED_ASSETS_SQL).await?;
        db.execute_unprepared(DISPOSALS_SQL).await?;

        // ============================================================
        // PART 6: MANUAL JOURNALS
        // ============================================================
        db.execute_unprepared(MANUAL_JOURNALS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Legal ownership forms
CREATE TYPE ownership_form AS ENUM (
    'sole',
    'partnership',
    'llc',
    'corporation'
);

-- Account types
CREATE TYPE account_type AS ENUM (
    'asset',
    'contra_asset',
    'liability',
    'equity',
    'revenue',
    'expense'
);

-- Semantic transaction kinds
CREATE TYPE transaction_kind AS ENUM (
    'sale_cash',
    'sale_credit',
    'purchase_cash',
    'purchase_credit',
    'capital_contribution',
    'monthly_depreciation',
    'disposal_cost_remove',
    'disposal_sale_cash',
    'disposal_sale_credit',
    'disposal_gain',
    'disposal_loss'
);

-- Disposal settlement method
CREATE TYPE disposal_method AS ENUM ('cash', 'credit');

-- Fixed asset lifecycle
CREATE TYPE disposal_status AS ENUM ('active', 'disposed');

-- Manual journal lifecycle
CREATE TYPE manual_journal_status AS ENUM (
    'draft',
    'approved',
    'rejected',
    'posted'
);
";

const BUSINESS_ENTITIES_SQL: &str = r"
CREATE TABLE business_entities (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    ownership_form ownership_form NOT NULL,
    address TEXT,
    fiscal_year_start_month SMALLINT CHECK (fiscal_year_start_month BETWEEN 1 AND 12),
    is_active BOOLEAN NOT NULL DEFAULT true,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const TAX_CONFIGS_SQL: &str = r"
CREATE TABLE tax_configs (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    entity_id UUID NOT NULL UNIQUE REFERENCES business_entities(id) ON DELETE CASCADE,
    vat_rate NUMERIC(6, 4) NOT NULL CHECK (vat_rate >= 0),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const ACCOUNTS_SQL: &str = r"
CREATE TABLE accounts (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    entity_id UUID NOT NULL REFERENCES business_entities(id) ON DELETE CASCADE,
    code VARCHAR(16) NOT NULL,
    name VARCHAR(255) NOT NULL,
    account_type account_type NOT NULL,
    balance NUMERIC(19, 4) NOT NULL DEFAULT 0,
    is_protected BOOLEAN NOT NULL DEFAULT false,
    is_active BOOLEAN NOT NULL DEFAULT true,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    CONSTRAINT uq_accounts_entity_code UNIQUE (entity_id, code)
);

CREATE INDEX idx_accounts_entity ON accounts(entity_id) WHERE is_active = true;
";

const COA_TEMPLATES_SQL: &str = r"
CREATE TABLE coa_templates (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    ownership_form ownership_form NOT NULL UNIQUE,
    name VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE coa_template_lines (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    template_id UUID NOT NULL REFERENCES coa_templates(id) ON DELETE CASCADE,
    code VARCHAR(16) NOT NULL,
    name VARCHAR(255) NOT NULL,
    account_type account_type NOT NULL,
    position INTEGER NOT NULL,

    CONSTRAINT uq_template_lines_code UNIQUE (template_id, code)
);
";

const MAPPINGS_SQL: &str = r"
CREATE TABLE transaction_type_mappings (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    txn_type transaction_kind NOT NULL UNIQUE,
    debit_code VARCHAR(16) NOT NULL,
    credit_code VARCHAR(16) NOT NULL,
    apply_vat BOOLEAN NOT NULL DEFAULT false,
    description VARCHAR(255) NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT true,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const TRANSACTIONS_SQL: &str = r"
CREATE TABLE transactions (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    entity_id UUID NOT NULL REFERENCES business_entities(id) ON DELETE CASCADE,
    txn_type transaction_kind NOT NULL,
    amount NUMERIC(19, 4) NOT NULL CHECK (amount > 0),
    txn_date DATE NOT NULL,
    description VARCHAR(255) NOT NULL,
    apply_vat BOOLEAN NOT NULL DEFAULT false,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_transactions_entity_date ON transactions(entity_id, txn_date);
";

const JOURNAL_SQL: &str = r"
CREATE TABLE journal_entries (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    entity_id UUID NOT NULL REFERENCES business_entities(id) ON DELETE CASCADE,
    entry_date DATE NOT NULL,
    debit_account_id UUID NOT NULL REFERENCES accounts(id),
    credit_account_id UUID NOT NULL REFERENCES accounts(id),
    amount NUMERIC(19, 4) NOT NULL CHECK (amount > 0),
    memo VARCHAR(255) NOT NULL,
    transaction_id UUID REFERENCES transactions(id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    CONSTRAINT chk_entry_sides_differ CHECK (debit_account_id <> credit_account_id)
);

CREATE INDEX idx_journal_entries_entity_date ON journal_entries(entity_id, entry_date);

CREATE TABLE ledger_postings (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    journal_entry_id UUID NOT NULL REFERENCES journal_entries(id) ON DELETE CASCADE,
    account_id UUID NOT NULL REFERENCES accounts(id),
    debit NUMERIC(19, 4) NOT NULL DEFAULT 0 CHECK (debit >= 0),
    credit NUMERIC(19, 4) NOT NULL DEFAULT 0 CHECK (credit >= 0),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    CONSTRAINT chk_posting_one_side CHECK (
        (debit > 0 AND credit = 0) OR (credit > 0 AND debit = 0)
    )
);

CREATE INDEX idx_ledger_postings_account ON ledger_postings(account_id);
";

const FIXED_ASSETS_SQL: &str = r"
CREATE TABLE fixed_assets (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    entity_id UUID NOT NULL REFERENCES business_entities(id) ON DELETE CASCADE,
    name VARCHAR(255) NOT NULL,
    cost_price NUMERIC(19, 4) NOT NULL CHECK (cost_price > 0),
    depreciation_rate NUMERIC(6, 4) NOT NULL CHECK (depreciation_rate >= 0),
    purchase_date DATE NOT NULL,
    accum_depreciation NUMERIC(19, 4) NOT NULL DEFAULT 0 CHECK (accum_depreciation >= 0),
    disposal_status disposal_status NOT NULL DEFAULT 'active',
    disposal_date DATE,
    selling_price NUMERIC(19, 4),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_fixed_assets_entity ON fixed_assets(entity_id);
";

const DISPOSALS_SQL: &str = r"
CREATE TABLE disposals (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    asset_id UUID NOT NULL UNIQUE REFERENCES fixed_assets(id),
    disposal_date DATE NOT NULL,
    selling_price NUMERIC(19, 4) NOT NULL CHECK (selling_price >= 0),
    method disposal_method NOT NULL,
    profit_loss NUMERIC(19, 4) NOT NULL,
    journal_entry_id UUID REFERENCES journal_entries(id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const MANUAL_JOURNALS_SQL: &str = r"
CREATE TABLE manual_journals (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    entity_id UUID NOT NULL REFERENCES business_entities(id) ON DELETE CASCADE,
    journal_date DATE NOT NULL,
    description VARCHAR(255) NOT NULL,
    status manual_journal_status NOT NULL DEFAULT 'draft',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE manual_journal_lines (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    journal_id UUID NOT NULL REFERENCES manual_journals(id) ON DELETE CASCADE,
    account_id UUID NOT NULL REFERENCES accounts(id),
    debit NUMERIC(19, 4) NOT NULL DEFAULT 0 CHECK (debit >= 0),
    credit NUMERIC(19, 4) NOT NULL DEFAULT 0 CHECK (credit >= 0),
    memo VARCHAR(255),
    position INTEGER NOT NULL,

    CONSTRAINT chk_line_one_side CHECK (
        (debit > 0 AND credit = 0) OR (credit > 0 AND debit = 0)
    )
);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS manual_journal_lines CASCADE;
DROP TABLE IF EXISTS manual_journals CASCADE;
DROP TABLE IF EXISTS disposals CASCADE;
DROP TABLE IF EXISTS fixed_assets CASCADE;
DROP TABLE IF EXISTS ledger_postings CASCADE;
DROP TABLE IF EXISTS journal_entries CASCADE;
DROP TABLE IF EXISTS transactions CASCADE;
DROP TABLE IF EXISTS transaction_type_mappings CASCADE;
DROP TABLE IF EXISTS coa_template_lines CASCADE;
DROP TABLE IF EXISTS coa_templates CASCADE;
DROP TABLE IF EXISTS accounts CASCADE;
DROP TABLE IF EXISTS tax_configs CASCADE;
DROP TABLE IF EXISTS business_entities CASCADE;
DROP TYPE IF EXISTS manual_journal_status;
DROP TYPE IF EXISTS disposal_status;
DROP TYPE IF EXISTS disposal_method;
DROP TYPE IF EXISTS transaction_kind;
DROP TYPE IF EXISTS account_type;
DROP TYPE IF EXISTS ownership_form;
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_transaction_kind_in_enum_sql() {
        for kind in grootboek_core::mapping::TransactionKind::ALL {
            assert!(
                ENUMS_SQL.contains(&format!("'{}'", kind.as_str())),
                "transaction_kind enum misses {kind}"
            );
        }
    }

    #[test]
    fn test_natural_key_constraints_present() {
        assert!(ACCOUNTS_SQL.contains("UNIQUE (entity_id, code)"));
        assert!(MAPPINGS_SQL.contains("txn_type transaction_kind NOT NULL UNIQUE"));
        assert!(COA_TEMPLATES_SQL.contains("ownership_form ownership_form NOT NULL UNIQUE"));
        assert!(DISPOSALS_SQL.contains("asset_id UUID NOT NULL UNIQUE"));
    }

    #[test]
    fn test_postings_enforce_single_side() {
        assert!(JOURNAL_SQL.contains("chk_posting_one_side"));
        assert!(MANUAL_JOURNALS_SQL.contains("chk_line_one_side"));
    }
}
