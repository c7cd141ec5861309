//! Bootstrap migration: seeds global business-rule configuration.
//!
//! Materializes the built-in transaction-type mappings and the four
//! chart-of-accounts templates from their definitions in `grootboek-core`.
//! Every insert lands on a natural-key unique constraint with
//! `ON CONFLICT DO NOTHING`, so re-running the migration (or two
//! deployments racing) is safe.

use grootboek_core::coa::{self, OwnershipForm};
use grootboek_core::mapping::AccountMapping;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(&mapping_seed_sql()).await?;
        db.execute_unprepared(&template_seed_sql()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DELETE FROM coa_template_lines;
             DELETE FROM coa_templates;
             DELETE FROM transaction_type_mappings;",
        )
        .await?;
        Ok(())
    }
}

/// Escapes a string literal for embedding in SQL.
fn quoted(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// INSERT statements for the eleven built-in mappings.
fn mapping_seed_sql() -> String {
    let values: Vec<String> = AccountMapping::all()
        .map(|mapping| {
            format!(
                "({kind}, {debit}, {credit}, {vat}, {description})",
                kind = quoted(mapping.kind.as_str()),
                debit = quoted(mapping.debit_code),
                credit = quoted(mapping.credit_code),
                vat = mapping.apply_vat,
                description = quoted(mapping.description),
            )
        })
        .collect();

    format!(
        "INSERT INTO transaction_type_mappings \
         (txn_type, debit_code, credit_code, apply_vat, description)\n\
         VALUES\n{}\nON CONFLICT (txn_type) DO NOTHING;",
        values.join(",\n")
    )
}

/// INSERT statements for the four chart templates and their lines.
fn template_seed_sql() -> String {
    let mut statements = Vec::new();

    for form in OwnershipForm::ALL {
        statements.push(format!(
            "INSERT INTO coa_templates (ownership_form, name)\n\
             VALUES ({form}, {name})\n\
             ON CONFLICT (ownership_form) DO NOTHING;",
            form = quoted(form.as_str()),
            name = quoted(form.template_name()),
        ));

        for (position, template_line) in coa::template(form).iter().enumerate() {
            statements.push(format!(
                "INSERT INTO coa_template_lines (template_id, code, name, account_type, position)\n\
                 SELECT t.id, {code}, {name}, {account_type}::account_type, {position}\n\
                 FROM coa_templates t WHERE t.ownership_form = {form}\n\
                 ON CONFLICT (template_id, code) DO NOTHING;",
                code = quoted(template_line.code),
                name = quoted(template_line.name),
                account_type = quoted(template_line.account_type.as_str()),
                form = quoted(form.as_str()),
            ));
        }
    }

    statements.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_seed_has_eleven_rows() {
        let sql = mapping_seed_sql();
        let tuples = sql
            .lines()
            .filter(|line| line.trim_start().starts_with("('"))
            .count();
        assert_eq!(tuples, 11);
        assert!(sql.contains("ON CONFLICT (txn_type) DO NOTHING"));
    }

    #[test]
    fn test_mapping_seed_contains_scenario_codes() {
        let sql = mapping_seed_sql();
        assert!(sql.contains("('sale_cash', '1001', '4001', true, 'Cash sale')"));
        assert!(sql.contains("'disposal_gain'"));
        assert!(sql.contains("'disposal_loss'"));
    }

    #[test]
    fn test_template_seed_covers_all_forms() {
        let sql = template_seed_sql();
        for form in OwnershipForm::ALL {
            assert!(sql.contains(&format!("'{}'", form.as_str())));
        }
        assert!(sql.contains("ON CONFLICT (template_id, code) DO NOTHING"));
    }

    #[test]
    fn test_apostrophes_are_escaped() {
        // Sole proprietor equity names carry apostrophes
        let sql = template_seed_sql();
        assert!(sql.contains("Owner''s Capital"));
        assert!(!sql.contains("'Owner's Capital'"));
    }

    proptest::proptest! {
        /// `quoted` never leaves a lone quote inside the literal.
        #[test]
        fn prop_quoted_escapes_everything(s in ".*") {
            let q = quoted(&s);
            proptest::prop_assert!(q.starts_with('\''));
            proptest::prop_assert!(q.ends_with('\''));
            let inner = &q[1..q.len() - 1];
            proptest::prop_assert!(!inner.replace("''", "").contains('\''));
        }
    }
}
