//! Disposal planning.
//!
//! A disposal is a fixed sequence of conditional postings where later
//! amounts depend on earlier ones: depreciation catch-up, cost removal,
//! proceeds recognition, and gain/loss recognition. The planner derives
//! the full sequence up front so the executor can run it as one unit.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::depreciation::{calendar_months_between, total_depreciation};
use super::error::DisposalError;
use crate::mapping::TransactionKind;

/// How the buyer settles the disposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisposalMethod {
    /// Proceeds received into the bank.
    Cash,
    /// Proceeds owed by the buyer.
    Credit,
}

impl DisposalMethod {
    /// Returns the canonical string form used in the database and the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Credit => "credit",
        }
    }

    /// The proceeds mapping kind for this method.
    #[must_use]
    pub const fn proceeds_kind(self) -> TransactionKind {
        match self {
            Self::Cash => TransactionKind::DisposalSaleCash,
            Self::Credit => TransactionKind::DisposalSaleCredit,
        }
    }
}

impl std::str::FromStr for DisposalMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(Self::Cash),
            "credit" => Ok(Self::Credit),
            _ => Err(format!("Unknown disposal method: {s}")),
        }
    }
}

/// The facts about an asset the planner needs.
#[derive(Debug, Clone, Copy)]
pub struct AssetFacts {
    /// Gross cost at acquisition.
    pub cost_price: Decimal,
    /// Annual straight-line rate as a fraction (0.20 = 20%).
    pub depreciation_rate: Decimal,
    /// Acquisition date.
    pub purchase_date: NaiveDate,
    /// Depreciation already posted against this asset.
    pub accum_depreciation: Decimal,
}

/// One posting the disposal workflow must make, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPosting {
    /// The mapping kind resolving the debit/credit pair.
    pub kind: TransactionKind,
    /// Posting amount, always positive.
    pub amount: Decimal,
    /// Memo carried onto the journal entry.
    pub memo: String,
}

/// The derived disposal sequence plus its summary figures.
#[derive(Debug, Clone)]
pub struct DisposalPlan {
    /// Ordered postings; zero-amount steps are never included.
    pub postings: Vec<PlannedPosting>,
    /// Months between purchase and disposal (calendar difference).
    pub months_owned: u32,
    /// Total depreciation owed up to the disposal date, capped at cost.
    pub total_depreciation: Decimal,
    /// Cost minus capped depreciation, never negative.
    pub net_book_value: Decimal,
    /// Signed result: positive gain, negative loss, zero break-even.
    pub profit_loss: Decimal,
}

impl DisposalPlan {
    /// True if the plan ends with a gain-or-loss posting.
    #[must_use]
    pub fn has_gain_loss_posting(&self) -> bool {
        self.profit_loss != Decimal::ZERO
    }
}

/// Derives the ordered postings for disposing an asset.
///
/// # Errors
///
/// Returns an error if the selling price is negative or the asset's
/// recorded cost is not positive.
pub fn plan_disposal(
    asset: &AssetFacts,
    disposal_date: NaiveDate,
    selling_price: Decimal,
    method: DisposalMethod,
) -> Result<DisposalPlan, DisposalError> {
    if selling_price < Decimal::ZERO {
        return Err(DisposalError::NegativeSellingPrice(selling_price));
    }
    if asset.cost_price <= Decimal::ZERO {
        return Err(DisposalError::InvalidCostPrice(asset.cost_price));
    }

    let months_owned = calendar_months_between(asset.purchase_date, disposal_date);
    let total_dep = total_depreciation(asset.cost_price, asset.depreciation_rate, months_owned);

    let mut postings = Vec::with_capacity(4);

    // Step 1: depreciation catch-up, only for the portion not yet posted.
    let catch_up = (total_dep - asset.accum_depreciation).max(Decimal::ZERO);
    if catch_up > Decimal::ZERO {
        postings.push(PlannedPosting {
            kind: TransactionKind::MonthlyDepreciation,
            amount: catch_up,
            memo: format!("Depreciation catch-up to {disposal_date}"),
        });
    }

    // Step 2: remove the gross cost from the books.
    postings.push(PlannedPosting {
        kind: TransactionKind::DisposalCostRemove,
        amount: asset.cost_price,
        memo: "Remove asset cost on disposal".to_string(),
    });

    // Step 3: recognize proceeds. A scrapped asset has none.
    if selling_price > Decimal::ZERO {
        postings.push(PlannedPosting {
            kind: method.proceeds_kind(),
            amount: selling_price,
            memo: format!("Disposal proceeds ({})", method.as_str()),
        });
    }

    // Step 4: recognize the gain or loss against net book value.
    let net_book_value = (asset.cost_price - total_dep).max(Decimal::ZERO);
    let profit_loss = selling_price - net_book_value;
    if profit_loss != Decimal::ZERO {
        let kind = if profit_loss > Decimal::ZERO {
            TransactionKind::DisposalGain
        } else {
            TransactionKind::DisposalLoss
        };
        postings.push(PlannedPosting {
            kind,
            amount: profit_loss.abs(),
            memo: "Gain/loss on asset disposal".to_string(),
        });
    }

    Ok(DisposalPlan {
        postings,
        months_owned,
        total_depreciation: total_dep,
        net_book_value,
        profit_loss,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn scenario_asset() -> AssetFacts {
        AssetFacts {
            cost_price: dec!(12000),
            depreciation_rate: dec!(0.20),
            purchase_date: date(2023, 1, 1),
            accum_depreciation: dec!(0),
        }
    }

    #[test]
    fn test_disposal_with_gain() {
        // 12 months at 20%/yr on 12000: monthly 200, total 2400, NBV 9600
        let plan = plan_disposal(
            &scenario_asset(),
            date(2024, 1, 1),
            dec!(10000),
            DisposalMethod::Cash,
        )
        .unwrap();

        assert_eq!(plan.months_owned, 12);
        assert_eq!(plan.total_depreciation, dec!(2400));
        assert_eq!(plan.net_book_value, dec!(9600));
        assert_eq!(plan.profit_loss, dec!(400));

        let kinds: Vec<_> = plan.postings.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::MonthlyDepreciation,
                TransactionKind::DisposalCostRemove,
                TransactionKind::DisposalSaleCash,
                TransactionKind::DisposalGain,
            ]
        );
        assert_eq!(plan.postings[0].amount, dec!(2400));
        assert_eq!(plan.postings[1].amount, dec!(12000));
        assert_eq!(plan.postings[2].amount, dec!(10000));
        assert_eq!(plan.postings[3].amount, dec!(400));
    }

    #[test]
    fn test_disposal_at_net_book_value_has_no_gain_loss() {
        let plan = plan_disposal(
            &scenario_asset(),
            date(2024, 1, 1),
            dec!(9600),
            DisposalMethod::Cash,
        )
        .unwrap();

        assert_eq!(plan.profit_loss, dec!(0));
        assert!(!plan.has_gain_loss_posting());
        assert!(
            plan.postings
                .iter()
                .all(|p| !matches!(
                    p.kind,
                    TransactionKind::DisposalGain | TransactionKind::DisposalLoss
                ))
        );
    }

    #[test]
    fn test_disposal_with_loss_on_credit() {
        let plan = plan_disposal(
            &scenario_asset(),
            date(2024, 1, 1),
            dec!(9000),
            DisposalMethod::Credit,
        )
        .unwrap();

        assert_eq!(plan.profit_loss, dec!(-600));
        let last = plan.postings.last().unwrap();
        assert_eq!(last.kind, TransactionKind::DisposalLoss);
        assert_eq!(last.amount, dec!(600));
        assert!(
            plan.postings
                .iter()
                .any(|p| p.kind == TransactionKind::DisposalSaleCredit)
        );
    }

    #[test]
    fn test_catch_up_skipped_when_depreciation_current() {
        let asset = AssetFacts {
            accum_depreciation: dec!(2400),
            ..scenario_asset()
        };
        let plan =
            plan_disposal(&asset, date(2024, 1, 1), dec!(9600), DisposalMethod::Cash).unwrap();

        assert!(
            plan.postings
                .iter()
                .all(|p| p.kind != TransactionKind::MonthlyDepreciation)
        );
        assert_eq!(plan.postings[0].kind, TransactionKind::DisposalCostRemove);
    }

    #[test]
    fn test_over_depreciated_asset_never_reverses() {
        // Books already carry more depreciation than owed: no negative catch-up
        let asset = AssetFacts {
            accum_depreciation: dec!(5000),
            ..scenario_asset()
        };
        let plan =
            plan_disposal(&asset, date(2024, 1, 1), dec!(9600), DisposalMethod::Cash).unwrap();

        assert!(
            plan.postings
                .iter()
                .all(|p| p.kind != TransactionKind::MonthlyDepreciation)
        );
    }

    #[test]
    fn test_fully_depreciated_asset() {
        // 20%/yr fully depreciates after 60 months; NBV 0, all proceeds are gain
        let plan = plan_disposal(
            &scenario_asset(),
            date(2030, 1, 1),
            dec!(1500),
            DisposalMethod::Cash,
        )
        .unwrap();

        assert_eq!(plan.total_depreciation, dec!(12000));
        assert_eq!(plan.net_book_value, dec!(0));
        assert_eq!(plan.profit_loss, dec!(1500));
    }

    #[test]
    fn test_scrapped_asset_skips_proceeds_posting() {
        let plan = plan_disposal(
            &scenario_asset(),
            date(2024, 1, 1),
            dec!(0),
            DisposalMethod::Cash,
        )
        .unwrap();

        assert!(
            plan.postings
                .iter()
                .all(|p| p.kind != TransactionKind::DisposalSaleCash)
        );
        // Whole NBV is a loss
        assert_eq!(plan.profit_loss, dec!(-9600));
        assert_eq!(plan.postings.last().unwrap().kind, TransactionKind::DisposalLoss);
    }

    #[test]
    fn test_disposal_before_purchase_clamps_months() {
        let plan = plan_disposal(
            &scenario_asset(),
            date(2022, 6, 1),
            dec!(12000),
            DisposalMethod::Cash,
        )
        .unwrap();

        assert_eq!(plan.months_owned, 0);
        assert_eq!(plan.total_depreciation, dec!(0));
        assert_eq!(plan.net_book_value, dec!(12000));
        assert_eq!(plan.profit_loss, dec!(0));
    }

    #[test]
    fn test_negative_selling_price_rejected() {
        assert!(matches!(
            plan_disposal(
                &scenario_asset(),
                date(2024, 1, 1),
                dec!(-1),
                DisposalMethod::Cash
            ),
            Err(DisposalError::NegativeSellingPrice(_))
        ));
    }

    #[test]
    fn test_no_zero_amount_postings_ever() {
        let plan = plan_disposal(
            &scenario_asset(),
            date(2024, 1, 1),
            dec!(9600),
            DisposalMethod::Cash,
        )
        .unwrap();
        assert!(plan.postings.iter().all(|p| p.amount > Decimal::ZERO));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// For any inputs: profit_loss == selling_price - net_book_value,
        /// net book value is never negative, and no planned posting has a
        /// non-positive amount.
        #[test]
        fn prop_plan_invariants(
            cost_cents in 1i64..50_000_000i64,
            rate_bps in 0i64..10_000i64,
            accum_cents in 0i64..60_000_000i64,
            price_cents in 0i64..60_000_000i64,
            months in 0u32..240u32,
        ) {
            let purchase = date(2020, 1, 1);
            let disposal = purchase
                .checked_add_months(chrono::Months::new(months))
                .unwrap();
            let asset = AssetFacts {
                cost_price: Decimal::new(cost_cents, 2),
                depreciation_rate: Decimal::new(rate_bps, 4),
                purchase_date: purchase,
                accum_depreciation: Decimal::new(accum_cents, 2),
            };
            let price = Decimal::new(price_cents, 2);

            let plan = plan_disposal(&asset, disposal, price, DisposalMethod::Cash).unwrap();

            prop_assert!(plan.net_book_value >= Decimal::ZERO);
            prop_assert!(plan.total_depreciation <= asset.cost_price);
            prop_assert_eq!(plan.profit_loss, price - plan.net_book_value);
            prop_assert!(plan.postings.iter().all(|p| p.amount > Decimal::ZERO));
            // Cost removal is always present
            prop_assert!(
                plan.postings
                    .iter()
                    .any(|p| p.kind == TransactionKind::DisposalCostRemove)
            );
        }
    }
}
