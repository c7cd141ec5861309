//! Straight-line depreciation math.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

/// Calendar month difference between two dates, day-of-month ignored.
///
/// `calendar_months_between(2023-01-31, 2024-01-01)` is 12: only the
/// year/month components count. Negative spans clamp to zero.
#[must_use]
pub fn calendar_months_between(from: NaiveDate, to: NaiveDate) -> u32 {
    let months = (i64::from(to.year()) - i64::from(from.year())) * 12
        + (i64::from(to.month()) - i64::from(from.month()));
    u32::try_from(months.max(0)).unwrap_or(0)
}

/// Depreciation charged per month: `cost × annual_rate / 12`.
#[must_use]
pub fn monthly_depreciation(cost_price: Decimal, annual_rate: Decimal) -> Decimal {
    cost_price * annual_rate / Decimal::from(12)
}

/// Total depreciation owed after `months` months, capped at the asset's
/// full cost so the net book value never goes negative.
#[must_use]
pub fn total_depreciation(cost_price: Decimal, annual_rate: Decimal, months: u32) -> Decimal {
    let accrued = monthly_depreciation(cost_price, annual_rate) * Decimal::from(months);
    accrued.min(cost_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_months_between_full_year() {
        assert_eq!(calendar_months_between(date(2023, 1, 1), date(2024, 1, 1)), 12);
    }

    #[test]
    fn test_months_between_ignores_day() {
        assert_eq!(calendar_months_between(date(2023, 1, 31), date(2023, 2, 1)), 1);
        assert_eq!(calendar_months_between(date(2023, 1, 1), date(2023, 1, 28)), 0);
    }

    #[test]
    fn test_months_between_clamps_negative() {
        assert_eq!(calendar_months_between(date(2024, 6, 1), date(2023, 6, 1)), 0);
    }

    #[test]
    fn test_monthly_depreciation() {
        assert_eq!(monthly_depreciation(dec!(12000), dec!(0.20)), dec!(200));
    }

    #[test]
    fn test_total_depreciation_twelve_months() {
        assert_eq!(total_depreciation(dec!(12000), dec!(0.20), 12), dec!(2400));
    }

    #[test]
    fn test_total_depreciation_caps_at_cost() {
        // 20% a year fully depreciates in 60 months; 100 months still caps
        assert_eq!(total_depreciation(dec!(12000), dec!(0.20), 100), dec!(12000));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Depreciation never exceeds cost, for any rate and holding period.
        #[test]
        fn prop_depreciation_cap(
            cost_cents in 1i64..100_000_000i64,
            rate_bps in 0i64..10_000i64,
            months in 0u32..1200u32,
        ) {
            let cost = Decimal::new(cost_cents, 2);
            let rate = Decimal::new(rate_bps, 4);
            let total = total_depreciation(cost, rate, months);
            prop_assert!(total <= cost);
            prop_assert!(total >= Decimal::ZERO);
        }

        /// Depreciation is monotone in the holding period.
        #[test]
        fn prop_depreciation_monotone(
            cost_cents in 1i64..100_000_000i64,
            rate_bps in 1i64..10_000i64,
            months in 0u32..600u32,
        ) {
            let cost = Decimal::new(cost_cents, 2);
            let rate = Decimal::new(rate_bps, 4);
            prop_assert!(
                total_depreciation(cost, rate, months)
                    <= total_depreciation(cost, rate, months + 1)
            );
        }
    }
}
