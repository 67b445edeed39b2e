//! Stay price computation
//!
//! Pure function over a resolved rate plan, the seasons touching the stay
//! and the fee catalog. All amounts are integer cents.

use crate::domain::fee::Fee;
use crate::domain::rate_plan::RatePlan;
use crate::domain::season::{best_season, Season};
use crate::domain::stay::StayRange;
use crate::domain::DomainResult;
use crate::shared::errors::DomainError;

pub const WEEK_NIGHTS: i64 = 7;
pub const MONTH_NIGHTS: i64 = 30;
pub const FOUR_MONTH_NIGHTS: i64 = 120;

/// Which bracket produced the subtotal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateTier {
    Nightly,
    Weekly,
    Monthly,
    FourMonth,
}

impl RateTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nightly => "nightly",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::FourMonth => "four_month",
        }
    }
}

impl std::fmt::Display for RateTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One fee line of a quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeLine {
    pub name: String,
    pub amount: i64,
}

/// Full quote for a stay
#[derive(Debug, Clone)]
pub struct PriceBreakdown {
    pub nights: i64,
    pub tier: RateTier,
    pub subtotal: i64,
    pub price_per_night: i64,
    pub discount_percentage: i32,
    pub seasonal_discount: i64,
    pub season_name: Option<String>,
    pub fees: Vec<FeeLine>,
    pub fees_total: i64,
    pub total: i64,
    pub currency: String,
}

fn out_of_range() -> DomainError {
    DomainError::Validation("Price exceeds the supported range".to_string())
}

fn mul(a: i64, b: i64) -> DomainResult<i64> {
    a.checked_mul(b).ok_or_else(out_of_range)
}

fn add(a: i64, b: i64) -> DomainResult<i64> {
    a.checked_add(b).ok_or_else(out_of_range)
}

/// `value * num / den` rounded half away from zero. Inputs are non-negative.
fn mul_div_round(value: i64, num: i64, den: i64) -> DomainResult<i64> {
    let doubled = mul(mul(value, num)?, 2)?;
    Ok(add(doubled, den)? / mul(den, 2)?)
}

/// Subtotal for `nights` under the plan's best applicable tier.
///
/// Long tiers only apply when the plan defines them. Leftover nights after
/// whole periods are charged at the next tier down, pro-rated per night.
pub fn tiered_subtotal(plan: &RatePlan, nights: i64) -> DomainResult<(RateTier, i64)> {
    let nightly = plan
        .nightly
        .ok_or_else(|| DomainError::Validation("No rate plan found for this unit".to_string()))?;

    if nights >= FOUR_MONTH_NIGHTS {
        if let Some(four_month) = plan.four_month {
            let periods = nights / FOUR_MONTH_NIGHTS;
            let rest = nights % FOUR_MONTH_NIGHTS;
            let rest_cost = match plan.monthly {
                Some(monthly) => mul_div_round(rest, monthly, MONTH_NIGHTS)?,
                None => mul(rest, nightly)?,
            };
            return Ok((RateTier::FourMonth, add(mul(periods, four_month)?, rest_cost)?));
        }
    }

    if nights >= MONTH_NIGHTS {
        if let Some(monthly) = plan.monthly {
            let periods = nights / MONTH_NIGHTS;
            let rest = nights % MONTH_NIGHTS;
            let rest_cost = match plan.weekly {
                Some(weekly) => mul_div_round(rest, weekly, WEEK_NIGHTS)?,
                None => mul(rest, nightly)?,
            };
            return Ok((RateTier::Monthly, add(mul(periods, monthly)?, rest_cost)?));
        }
    }

    if nights >= WEEK_NIGHTS {
        if let Some(weekly) = plan.weekly {
            let periods = nights / WEEK_NIGHTS;
            let rest = nights % WEEK_NIGHTS;
            return Ok((RateTier::Weekly, add(mul(periods, weekly)?, mul(rest, nightly)?)?));
        }
    }

    Ok((RateTier::Nightly, mul(nights, nightly)?))
}

/// Price a stay.
///
/// `seasons` may contain seasons that do not touch the stay; they are ignored.
pub fn price_stay(
    plan: &RatePlan,
    stay: &StayRange,
    seasons: &[Season],
    fees: &[Fee],
) -> DomainResult<PriceBreakdown> {
    let nights = stay.nights();
    let (tier, subtotal) = tiered_subtotal(plan, nights)?;

    let season = best_season(seasons, stay);
    let discount_percentage = season.map(|s| s.discount_pct).unwrap_or(0);
    let seasonal_discount = mul_div_round(subtotal, discount_percentage as i64, 100)?;

    let fee_lines = fees
        .iter()
        .map(|f| {
            Ok(FeeLine {
                name: f.name.clone(),
                amount: f.amount_for(nights)?,
            })
        })
        .collect::<DomainResult<Vec<FeeLine>>>()?;
    let fees_total = fee_lines
        .iter()
        .try_fold(0i64, |acc, f| add(acc, f.amount))?;
    let total = add(
        subtotal.checked_sub(seasonal_discount).ok_or_else(out_of_range)?,
        fees_total,
    )?;

    Ok(PriceBreakdown {
        nights,
        tier,
        subtotal,
        price_per_night: mul_div_round(subtotal, 1, nights)?,
        discount_percentage,
        seasonal_discount,
        season_name: season.map(|s| s.name.clone()),
        fees: fee_lines,
        fees_total,
        total,
        currency: plan.currency.clone(),
    })
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rate_plan::RatePlanScope;
    use crate::domain::unit::UnitType;
    use chrono::{Duration, NaiveDate};

    fn trailer_plan() -> RatePlan {
        RatePlan::new(RatePlanScope::Category(UnitType::Trailer), 4500).with_tiers(
            Some(27000),
            Some(100000),
            Some(360000),
        )
    }

    fn stay_of(nights: i64) -> StayRange {
        let check_in = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        StayRange::new(check_in, check_in + Duration::days(nights)).unwrap()
    }

    #[test]
    fn short_stay_uses_nightly() {
        let p = price_stay(&trailer_plan(), &stay_of(3), &[], &[]).unwrap();
        assert_eq!(p.tier, RateTier::Nightly);
        assert_eq!(p.subtotal, 13500);
        assert_eq!(p.price_per_night, 4500);
        assert_eq!(p.total, 13500);
    }

    #[test]
    fn ten_nights_is_one_week_plus_three_nightly() {
        let p = price_stay(&trailer_plan(), &stay_of(10), &[], &[]).unwrap();
        assert_eq!(p.tier, RateTier::Weekly);
        assert_eq!(p.subtotal, 27000 + 3 * 4500);
        assert_eq!(p.price_per_night, 4050);
    }

    #[test]
    fn month_remainder_is_pro_rated_from_weekly() {
        // 35 nights = 1 month + 5 * (27000 / 7)
        let (tier, subtotal) = tiered_subtotal(&trailer_plan(), 35).unwrap();
        assert_eq!(tier, RateTier::Monthly);
        assert_eq!(subtotal, 100000 + 19286);
    }

    #[test]
    fn four_month_remainder_is_pro_rated_from_monthly() {
        // 130 nights = 1 block + 10 * (100000 / 30)
        let (tier, subtotal) = tiered_subtotal(&trailer_plan(), 130).unwrap();
        assert_eq!(tier, RateTier::FourMonth);
        assert_eq!(subtotal, 360000 + 33333);
    }

    #[test]
    fn missing_long_tiers_fall_back() {
        let plan = RatePlan::new(RatePlanScope::Unit("u".into()), 5000);
        let (tier, subtotal) = tiered_subtotal(&plan, 130).unwrap();
        assert_eq!(tier, RateTier::Nightly);
        assert_eq!(subtotal, 130 * 5000);

        let weekly_only = plan.with_tiers(Some(30000), None, None);
        let (tier, subtotal) = tiered_subtotal(&weekly_only, 45).unwrap();
        assert_eq!(tier, RateTier::Weekly);
        assert_eq!(subtotal, 6 * 30000 + 3 * 5000);
    }

    #[test]
    fn monthly_without_weekly_uses_nightly_remainder() {
        let plan = RatePlan::new(RatePlanScope::Unit("u".into()), 5000)
            .with_tiers(None, Some(120000), None);
        let (_, subtotal) = tiered_subtotal(&plan, 32).unwrap();
        assert_eq!(subtotal, 120000 + 2 * 5000);
    }

    #[test]
    fn plan_without_nightly_is_rejected() {
        let mut plan = trailer_plan();
        plan.nightly = None;
        let err = price_stay(&plan, &stay_of(2), &[], &[]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(m) if m == "No rate plan found for this unit"));
    }

    #[test]
    fn best_season_discount_is_applied_and_rounded() {
        let stay = stay_of(3);
        let seasons = vec![
            Season::new("Low", stay.check_in, stay.check_out, 5),
            Season::new("Deep", stay.check_in - Duration::days(10), stay.check_in, 15),
        ];
        let p = price_stay(&trailer_plan(), &stay, &seasons, &[]).unwrap();
        assert_eq!(p.discount_percentage, 15);
        // 13500 * 0.15 = 2025
        assert_eq!(p.seasonal_discount, 2025);
        assert_eq!(p.season_name.as_deref(), Some("Deep"));
        assert_eq!(p.total, 13500 - 2025);
    }

    #[test]
    fn fees_are_added_per_stay_and_per_night() {
        let fees = vec![Fee::new("Cleaning", 5000, true), Fee::new("Utilities", 250, false)];
        let p = price_stay(&trailer_plan(), &stay_of(4), &[], &fees).unwrap();
        assert_eq!(
            p.fees,
            vec![
                FeeLine { name: "Cleaning".into(), amount: 5000 },
                FeeLine { name: "Utilities".into(), amount: 1000 },
            ]
        );
        assert_eq!(p.fees_total, 6000);
        assert_eq!(p.total, 18000 + 6000);
    }

    #[test]
    fn discount_applies_to_subtotal_not_fees() {
        let stay = stay_of(2);
        let seasons = vec![Season::new("Half", stay.check_in, stay.check_out, 50)];
        let fees = vec![Fee::new("Cleaning", 1000, true)];
        let p = price_stay(&trailer_plan(), &stay, &seasons, &fees).unwrap();
        assert_eq!(p.seasonal_discount, 4500);
        assert_eq!(p.total, 9000 - 4500 + 1000);
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(mul_div_round(1, 1, 2).unwrap(), 1);
        assert_eq!(mul_div_round(5, 27000, 7).unwrap(), 19286);
        assert_eq!(mul_div_round(10, 100000, 30).unwrap(), 33333);
    }

    #[test]
    fn oversized_fee_is_rejected_instead_of_overflowing() {
        let fees = vec![Fee::new("Huge", i64::MAX / 2, false)];
        let err = price_stay(&trailer_plan(), &stay_of(3), &[], &fees).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn oversized_rates_are_rejected_instead_of_overflowing() {
        let plan = RatePlan::new(RatePlanScope::Unit("u".into()), i64::MAX / 4);
        let err = tiered_subtotal(&plan, 5).unwrap_err();
        assert!(matches!(err, DomainError::Validation(m) if m == "Price exceeds the supported range"));
    }

    #[test]
    fn longest_stay_prices_within_range() {
        let p = price_stay(
            &trailer_plan(),
            &stay_of(crate::domain::stay::MAX_STAY_NIGHTS),
            &[],
            &[Fee::new("Cap", crate::domain::fee::MAX_FEE_CENTS, false)],
        )
        .unwrap();
        assert_eq!(p.tier, RateTier::FourMonth);
        assert!(p.total > 0);
    }
}
