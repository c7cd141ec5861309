//! VAT computation.
//!
//! South African VAT is a flat rate on the transaction amount, posted as
//! a separate two-line entry against a fixed expense/liability pair.

use rust_decimal::{Decimal, RoundingStrategy};

/// Account code debited by VAT side entries.
pub const VAT_EXPENSE_CODE: &str = "5901";

/// Account code credited by VAT side entries (SARS control account).
pub const VAT_CONTROL_CODE: &str = "2101";

/// Default VAT rate for new entities (15%).
#[must_use]
pub fn default_vat_rate() -> Decimal {
    Decimal::new(15, 2)
}

/// Computes the VAT amount for a transaction, rounded to cents using
/// Banker's Rounding.
#[must_use]
pub fn vat_amount(amount: Decimal, vat_rate: Decimal) -> Decimal {
    (amount * vat_rate).round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_rate_is_fifteen_percent() {
        assert_eq!(default_vat_rate(), dec!(0.15));
    }

    #[rstest]
    #[case(dec!(1000), dec!(0.15), dec!(150.00))]
    #[case(dec!(0.01), dec!(0.15), dec!(0.00))] // 0.0015 rounds to even
    #[case(dec!(333.33), dec!(0.15), dec!(50.00))] // 49.9995 rounds up
    #[case(dec!(100), dec!(0), dec!(0))]
    fn test_vat_amount(#[case] amount: Decimal, #[case] rate: Decimal, #[case] expected: Decimal) {
        assert_eq!(vat_amount(amount, rate), expected);
    }

    #[test]
    fn test_bankers_rounding_midpoint() {
        // 15% of 0.10 = 0.015: midpoint rounds to the even cent
        assert_eq!(vat_amount(dec!(0.10), dec!(0.15)), dec!(0.02));
        // 15% of 0.30 = 0.045: midpoint rounds down to the even cent
        assert_eq!(vat_amount(dec!(0.30), dec!(0.15)), dec!(0.04));
    }
}
