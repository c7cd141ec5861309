//! Running-balance delta rules per account type.

use rust_decimal::Decimal;

use super::types::AccountType;

/// Determines if an account type is debit-normal.
#[must_use]
pub fn is_debit_normal(account_type: AccountType) -> bool {
    matches!(account_type, AccountType::Asset | AccountType::Expense)
}

/// Calculates the balance change for a posting based on account type.
///
/// - Asset/Expense (debit-normal): balance += debit - credit
/// - ContraAsset/Liability/Equity/Revenue (credit-normal): balance += credit - debit
#[must_use]
pub fn balance_change(account_type: AccountType, debit: Decimal, credit: Decimal) -> Decimal {
    if is_debit_normal(account_type) {
        debit - credit
    } else {
        credit - debit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    fn account_type_strategy() -> impl Strategy<Value = AccountType> {
        prop_oneof![
            Just(AccountType::Asset),
            Just(AccountType::ContraAsset),
            Just(AccountType::Liability),
            Just(AccountType::Equity),
            Just(AccountType::Revenue),
            Just(AccountType::Expense),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// A debit increases every debit-normal account and decreases the rest.
        #[test]
        fn prop_debit_direction(
            account_type in account_type_strategy(),
            debit in amount_strategy(),
        ) {
            prop_assume!(debit > Decimal::ZERO);

            let change = balance_change(account_type, debit, Decimal::ZERO);
            if is_debit_normal(account_type) {
                prop_assert_eq!(change, debit);
            } else {
                prop_assert_eq!(change, -debit);
            }
        }

        /// A credit increases every credit-normal account and decreases the rest.
        #[test]
        fn prop_credit_direction(
            account_type in account_type_strategy(),
            credit in amount_strategy(),
        ) {
            prop_assume!(credit > Decimal::ZERO);

            let change = balance_change(account_type, Decimal::ZERO, credit);
            if is_debit_normal(account_type) {
                prop_assert_eq!(change, -credit);
            } else {
                prop_assert_eq!(change, credit);
            }
        }

        /// The debit and credit sides of one balanced entry cancel out across
        /// any two accounts of the same type.
        #[test]
        fn prop_same_type_entry_nets_to_zero(
            account_type in account_type_strategy(),
            amount in amount_strategy(),
        ) {
            let debit_side = balance_change(account_type, amount, Decimal::ZERO);
            let credit_side = balance_change(account_type, Decimal::ZERO, amount);
            prop_assert_eq!(debit_side + credit_side, Decimal::ZERO);
        }

        /// Zero postings produce zero change.
        #[test]
        fn prop_zero_posting_zero_change(account_type in account_type_strategy()) {
            prop_assert_eq!(
                balance_change(account_type, Decimal::ZERO, Decimal::ZERO),
                Decimal::ZERO
            );
        }
    }

    #[test]
    fn test_asset_balance_change() {
        assert_eq!(balance_change(AccountType::Asset, dec!(100), dec!(0)), dec!(100));
        assert_eq!(balance_change(AccountType::Asset, dec!(0), dec!(50)), dec!(-50));
    }

    #[test]
    fn test_contra_asset_is_credit_normal() {
        // Accumulated depreciation grows with credits
        assert_eq!(balance_change(AccountType::ContraAsset, dec!(0), dec!(200)), dec!(200));
        assert_eq!(balance_change(AccountType::ContraAsset, dec!(200), dec!(0)), dec!(-200));
    }

    #[test]
    fn test_revenue_balance_change() {
        assert_eq!(balance_change(AccountType::Revenue, dec!(0), dec!(1000)), dec!(1000));
        assert_eq!(balance_change(AccountType::Revenue, dec!(100), dec!(0)), dec!(-100));
    }

    #[test]
    fn test_is_debit_normal() {
        assert!(is_debit_normal(AccountType::Asset));
        assert!(is_debit_normal(AccountType::Expense));
        assert!(!is_debit_normal(AccountType::ContraAsset));
        assert!(!is_debit_normal(AccountType::Liability));
        assert!(!is_debit_normal(AccountType::Equity));
        assert!(!is_debit_normal(AccountType::Revenue));
    }
}
