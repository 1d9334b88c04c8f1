//! Leg valuation and the CDS pricer.
//!
//! Both legs integrate over a merged knot set (coupon period boundaries
//! union discount-curve knots union survival-curve knots) under the
//! assumption that, between adjacent knots, the discount factor and the
//! survival probability are each log-linear — equivalently, that the
//! instantaneous forward rate and hazard rate are locally constant. This
//! gives closed-form contributions on every subinterval instead of a
//! numerical quadrature.

use super::cds::{CdsContract, CdsError};
use crate::schedules::{Period, ScheduleError};
use num_traits::Float;
use pricer_core::market_data::curves::{Curve, CreditCurve, YieldCurve};
use pricer_core::market_data::MarketDataError;
use pricer_core::types::time::{Date, InterpolationMethod};
use thiserror::Error;

/// Errors raised while pricing a [`CdsContract`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    /// The contract's accrual schedule could not be built.
    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// The contract itself failed validation.
    #[error(transparent)]
    Contract(#[from] CdsError),

    /// A curve lookup failed.
    #[error("market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// The premium leg's per-unit-coupon PV is ~0, so a par spread cannot
    /// be solved for (division by a near-zero annuity).
    #[error("premium leg PV per unit coupon is ~0; par spread is undefined")]
    DegenerateParSpread,
}

/// Result of pricing a CDS contract against a discount curve and a
/// survival curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CdsPriceResult<T: Float> {
    /// Mark-to-market, signed for the contract's protection direction,
    /// discounted from `value_date` to `settlement_date`.
    pub mark_to_market: T,
    /// The coupon that would make `mark_to_market` zero at inception.
    pub par_spread: T,
    /// Premium leg PV (base coupon payments only, excluding AOD).
    pub premium_leg_pv: T,
    /// Protection leg PV.
    pub protection_leg_pv: T,
    /// Accrued-on-default PV (zero if `include_accrued_premium` is false).
    pub accrued_premium_pv: T,
    /// Inception upfront cash amount reconciling the contractual coupon
    /// to the market-implied par spread.
    pub upfront_charge: T,
}

/// Prices a single [`CdsContract`] against a discount curve and a
/// survival curve, both represented as [`Curve<T>`].
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::{Date, DayCountConvention, CompoundingBasis, BusinessDayConvention, InterpolationMethod};
/// use pricer_core::market_data::curves::Curve;
/// use pricer_models::schedules::Frequency;
/// use pricer_models::instruments::credit::{CdsContract, CdsPricer};
///
/// let base = Date::from_ymd(2025, 5, 5).unwrap();
/// let discount = Curve::new(
///     base,
///     vec![(Date::from_ymd(2030, 5, 5).unwrap(), 0.03)],
///     DayCountConvention::Act365F,
///     CompoundingBasis::Continuous,
/// ).unwrap();
/// let survival = Curve::new(
///     base,
///     vec![(Date::from_ymd(2030, 5, 5).unwrap(), 0.02)],
///     DayCountConvention::Act365F,
///     CompoundingBasis::Continuous,
/// ).unwrap();
///
/// let contract = CdsContract::new(
///     base, base, Date::from_ymd(2030, 5, 5).unwrap(), base, base,
///     base, Frequency::Quarterly, DayCountConvention::Act360,
///     BusinessDayConvention::ModifiedFollowing, 0.01, 1.0e7, 0.4, true, true,
/// ).unwrap();
///
/// let pricer = CdsPricer::new(&contract, &discount, &survival, InterpolationMethod::FlatForward);
/// let result = pricer.price().unwrap();
/// assert!(result.protection_leg_pv > 0.0);
/// ```
pub struct CdsPricer<'a, T: Float> {
    contract: &'a CdsContract<T>,
    discount_curve: &'a Curve<T>,
    survival_curve: &'a Curve<T>,
    interp: InterpolationMethod,
}

impl<'a, T: Float> CdsPricer<'a, T> {
    /// Creates a pricer for `contract` against `discount_curve` and
    /// `survival_curve`, both queried with `interp`.
    pub fn new(
        contract: &'a CdsContract<T>,
        discount_curve: &'a Curve<T>,
        survival_curve: &'a Curve<T>,
        interp: InterpolationMethod,
    ) -> Self {
        Self {
            contract,
            discount_curve,
            survival_curve,
            interp,
        }
    }

    /// Discount factor from `value_date` to `date`, re-anchored so that
    /// `value_date` maps to `1` regardless of the curve's own `base_date`.
    fn df_anchored(&self, date: Date) -> Result<T, MarketDataError> {
        let df_date = self.discount_curve.discount_factor(date, self.interp)?;
        let df_value = self
            .discount_curve
            .discount_factor(self.contract.value_date(), self.interp)?;
        Ok(df_date / df_value)
    }

    /// Survival probability from `value_date` to `date`, re-anchored the
    /// same way as [`Self::df_anchored`].
    fn surv_anchored(&self, date: Date) -> Result<T, MarketDataError> {
        let s_date = self
            .survival_curve
            .survival_probability(date, self.interp)?;
        let s_value = self
            .survival_curve
            .survival_probability(self.contract.value_date(), self.interp)?;
        Ok(s_date / s_value)
    }

    /// The instantaneous rate implied by a log-linear move from
    /// `start_val` to `end_val` over year fraction `delta`.
    fn local_rate(start_val: T, end_val: T, delta: T) -> T {
        -((end_val / start_val).ln()) / delta
    }

    /// Knots strictly between `lo` and `hi`, from both curves, sorted and
    /// deduplicated, bracketed by `lo` and `hi` themselves.
    fn merged_knots(&self, lo: Date, hi: Date) -> Vec<Date> {
        let mut knots: Vec<Date> = self
            .discount_curve
            .dates()
            .iter()
            .chain(self.survival_curve.dates().iter())
            .copied()
            .filter(|d| *d > lo && *d < hi)
            .collect();
        knots.sort();
        knots.dedup();

        let mut result = Vec::with_capacity(knots.len() + 2);
        result.push(lo);
        result.extend(knots);
        result.push(hi);
        result
    }

    /// Premium leg PV per unit coupon (i.e. excluding `coupon_rate` and
    /// `notional`), summed over periods ending after `step_in_date`.
    fn premium_base_per_unit_coupon(&self) -> Result<T, PricingError> {
        let schedule = self.contract.generate_schedule()?;
        let mut total = T::zero();
        for period in schedule.periods() {
            if period.end() <= self.contract.step_in_date() {
                continue;
            }
            let alpha = T::from(period.year_fraction()).unwrap_or_else(T::zero);
            let df = self.df_anchored(period.payment())?;
            let surv = self.surv_anchored(period.end())?;
            total = total + alpha * df * surv;
        }
        Ok(total)
    }

    /// Accrued-on-default contribution for a single accrual period, in
    /// units of per-unit-coupon PV.
    ///
    /// Integrates `alpha(u) * DF(u) * h(u) * S(u)` over
    /// `[max(step_in_date, period.start), period.end)`, under the
    /// accrual-period's own day-count convention for both the time
    /// variable and the accrual offset `alpha(u)`. On each subinterval
    /// `[u_a, u_b]` of length `delta`, with locally constant forward `f`
    /// and hazard `h` (so `k = f + h`) and accrued offset `alpha_offset`
    /// at `u_a`:
    ///
    /// ```text
    /// integral = alpha_offset * (1 - exp(-k*delta)) / k
    ///          + (1 - exp(-k*delta) * (1 + k*delta)) / k^2
    /// ```
    ///
    /// which degenerates to `alpha_offset*delta + delta^2/2` as `k -> 0`.
    /// The period's contribution is `h * DF(u_a) * S(u_a) * integral`.
    fn aod_period(&self, period: &Period) -> Result<T, PricingError> {
        let lo = period.start().max(self.contract.step_in_date());
        let hi = period.end();
        if lo >= hi {
            return Ok(T::zero());
        }

        let dc = period.day_count();
        let knots = self.merged_knots(lo, hi);
        let eps = T::from(1e-14).unwrap();
        let two = T::from(2.0).unwrap();

        let mut total = T::zero();
        for window in knots.windows(2) {
            let (u_a, u_b) = (window[0], window[1]);
            let delta = T::from(dc.year_fraction_dates(u_a, u_b)).unwrap_or_else(T::zero);
            if delta <= T::zero() {
                continue;
            }

            let df_a = self.df_anchored(u_a)?;
            let surv_a = self.surv_anchored(u_a)?;
            let df_b = self.df_anchored(u_b)?;
            let surv_b = self.surv_anchored(u_b)?;

            let f = Self::local_rate(df_a, df_b, delta);
            let h = Self::local_rate(surv_a, surv_b, delta);
            let k = f + h;
            let alpha_offset = T::from(dc.year_fraction_dates(period.start(), u_a)).unwrap_or_else(T::zero);

            let integral = if k.abs() < eps {
                alpha_offset * delta + delta * delta / two
            } else {
                let e = (-k * delta).exp();
                let term1 = alpha_offset * (T::one() - e) / k;
                let term2 = (T::one() - e * (T::one() + k * delta)) / (k * k);
                term1 + term2
            };

            total = total + h * df_a * surv_a * integral;
        }

        Ok(total)
    }

    /// Accrued-on-default PV per unit coupon, summed over all periods;
    /// zero if `include_accrued_premium` is false.
    fn aod_per_unit_coupon(&self) -> Result<T, PricingError> {
        if !self.contract.include_accrued_premium() {
            return Ok(T::zero());
        }
        let schedule = self.contract.generate_schedule()?;
        let mut total = T::zero();
        for period in schedule.periods() {
            total = total + self.aod_period(period)?;
        }
        Ok(total)
    }

    /// Premium leg PV: base coupon cashflows only (no AOD).
    ///
    /// `PV_prem = coupon_rate * notional * sum_i alpha_i * DF(pay_i) * S(accr_end_i)`
    /// over periods ending after `step_in_date`.
    pub fn premium_leg_pv(&self) -> Result<T, PricingError> {
        let base = self.premium_base_per_unit_coupon()?;
        Ok(base * self.contract.coupon_rate() * self.contract.notional())
    }

    /// Accrued-on-default PV.
    pub fn accrued_premium_pv(&self) -> Result<T, PricingError> {
        let aod = self.aod_per_unit_coupon()?;
        Ok(aod * self.contract.coupon_rate() * self.contract.notional())
    }

    /// Protection leg PV.
    ///
    /// `PV_prot = (1 - R) * N * integral_{value_date}^{maturity_date} DF(u) * (-dS(u))`,
    /// integrated piecewise over the merged knot set. On each
    /// subinterval `[u_a, u_b]` of length `delta`, with locally constant
    /// forward `f` and hazard `h` (`k = f + h`):
    ///
    /// ```text
    /// contribution = (h / k) * DF(u_a) * S(u_a) * (1 - exp(-k*delta))
    /// ```
    ///
    /// degenerating to `DF(u_a) * S(u_a) * delta * h` as `k -> 0`.
    pub fn protection_leg_pv(&self) -> Result<T, PricingError> {
        let lo = self.contract.value_date();
        let hi = self.contract.maturity_date();
        if lo >= hi {
            return Ok(T::zero());
        }

        let dc = self.discount_curve.day_count_convention();
        let knots = self.merged_knots(lo, hi);
        let eps = T::from(1e-14).unwrap();

        let mut total = T::zero();
        for window in knots.windows(2) {
            let (u_a, u_b) = (window[0], window[1]);
            let delta = T::from(dc.year_fraction_dates(u_a, u_b)).unwrap_or_else(T::zero);
            if delta <= T::zero() {
                continue;
            }

            let df_a = self.df_anchored(u_a)?;
            let surv_a = self.surv_anchored(u_a)?;
            let df_b = self.df_anchored(u_b)?;
            let surv_b = self.surv_anchored(u_b)?;

            let f = Self::local_rate(df_a, df_b, delta);
            let h = Self::local_rate(surv_a, surv_b, delta);
            let k = f + h;

            let contribution = if k.abs() < eps {
                df_a * surv_a * delta * h
            } else {
                (h / k) * df_a * surv_a * (T::one() - (-k * delta).exp())
            };

            total = total + contribution;
        }

        let one_minus_r = T::one() - self.contract.recovery_rate();
        Ok(one_minus_r * self.contract.notional() * total)
    }

    /// Mark-to-market from the perspective of `contract.is_buy_protection()`,
    /// discounted from `value_date` to `settlement_date`.
    pub fn mtm(&self) -> Result<T, PricingError> {
        let protection = self.protection_leg_pv()?;
        let premium = self.premium_leg_pv()?;
        let accrued = self.accrued_premium_pv()?;
        let raw = protection - premium - accrued;
        let signed = if self.contract.is_buy_protection() {
            raw
        } else {
            -raw
        };
        let df_settlement = self.df_anchored(self.contract.settlement_date())?;
        Ok(signed / df_settlement)
    }

    /// The coupon that would make `mtm()` zero, using the linearity of
    /// the premium leg (including AOD) in the coupon rate.
    pub fn par_spread(&self) -> Result<T, PricingError> {
        let protection = self.protection_leg_pv()?;
        let base = self.premium_base_per_unit_coupon()?;
        let aod = self.aod_per_unit_coupon()?;
        let denom = (base + aod) * self.contract.notional();
        if denom.abs() < T::from(1e-14).unwrap() {
            return Err(PricingError::DegenerateParSpread);
        }
        Ok(protection / denom)
    }

    /// Prices the contract, producing the full [`CdsPriceResult`].
    pub fn price(&self) -> Result<CdsPriceResult<T>, PricingError> {
        let protection_leg_pv = self.protection_leg_pv()?;
        let premium_leg_pv = self.premium_leg_pv()?;
        let accrued_premium_pv = self.accrued_premium_pv()?;
        let par_spread = self.par_spread()?;
        let mark_to_market = self.mtm()?;

        Ok(CdsPriceResult {
            mark_to_market,
            par_spread,
            premium_leg_pv,
            protection_leg_pv,
            accrued_premium_pv,
            upfront_charge: mark_to_market,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedules::Frequency;
    use approx::assert_relative_eq;
    use pricer_core::types::time::{BusinessDayConvention, CompoundingBasis, DayCountConvention};

    fn flat_discount_curve(base: Date) -> Curve<f64> {
        Curve::new(
            base,
            vec![(Date::from_ymd(2035, 5, 5).unwrap(), 0.03)],
            DayCountConvention::Act365F,
            CompoundingBasis::Continuous,
        )
        .unwrap()
    }

    fn flat_survival_curve(base: Date, hazard: f64) -> Curve<f64> {
        Curve::new(
            base,
            vec![(Date::from_ymd(2035, 5, 5).unwrap(), hazard)],
            DayCountConvention::Act365F,
            CompoundingBasis::Continuous,
        )
        .unwrap()
    }

    fn contract_5y(base: Date, coupon: f64, include_aod: bool) -> CdsContract<f64> {
        CdsContract::new(
            base,
            base,
            Date::from_ymd(2030, 5, 5).unwrap(),
            base,
            base.add_days(3),
            base,
            Frequency::Quarterly,
            DayCountConvention::Act360,
            BusinessDayConvention::ModifiedFollowing,
            coupon,
            1.0e7,
            0.4,
            include_aod,
            true,
        )
        .unwrap()
    }

    #[test]
    fn test_protection_leg_positive() {
        let base = Date::from_ymd(2025, 5, 5).unwrap();
        let discount = flat_discount_curve(base);
        let survival = flat_survival_curve(base, 0.02);
        let contract = contract_5y(base, 0.01, true);

        let pricer = CdsPricer::new(&contract, &discount, &survival, InterpolationMethod::FlatForward);
        let pv = pricer.protection_leg_pv().unwrap();
        assert!(pv > 0.0);
    }

    #[test]
    fn test_premium_leg_linear_in_coupon() {
        let base = Date::from_ymd(2025, 5, 5).unwrap();
        let discount = flat_discount_curve(base);
        let survival = flat_survival_curve(base, 0.02);

        let contract_a = contract_5y(base, 0.01, true);
        let contract_b = contract_5y(base, 0.02, true);

        let pricer_a = CdsPricer::new(&contract_a, &discount, &survival, InterpolationMethod::FlatForward);
        let pricer_b = CdsPricer::new(&contract_b, &discount, &survival, InterpolationMethod::FlatForward);

        let premium_a = pricer_a.premium_leg_pv().unwrap() + pricer_a.accrued_premium_pv().unwrap();
        let premium_b = pricer_b.premium_leg_pv().unwrap() + pricer_b.accrued_premium_pv().unwrap();

        assert_relative_eq!(premium_b / premium_a, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_par_spread_reprices_to_zero_mtm() {
        let base = Date::from_ymd(2025, 5, 5).unwrap();
        let discount = flat_discount_curve(base);
        let survival = flat_survival_curve(base, 0.02);
        let contract = contract_5y(base, 0.01, true);

        let pricer = CdsPricer::new(&contract, &discount, &survival, InterpolationMethod::FlatForward);
        let par_spread = pricer.par_spread().unwrap();

        let at_par = contract_5y(base, par_spread, true);
        let pricer_par = CdsPricer::new(&at_par, &discount, &survival, InterpolationMethod::FlatForward);
        let mtm = pricer_par.mtm().unwrap();

        assert_relative_eq!(mtm / contract.notional(), 0.0, epsilon = 1e-8);
    }

    #[test]
    fn test_buy_sell_symmetry() {
        let base = Date::from_ymd(2025, 5, 5).unwrap();
        let discount = flat_discount_curve(base);
        let survival = flat_survival_curve(base, 0.02);

        let buy = contract_5y(base, 0.01, true);
        let sell = CdsContract::new(
            buy.trade_date(),
            buy.effective_date(),
            buy.maturity_date(),
            buy.value_date(),
            buy.settlement_date(),
            buy.step_in_date(),
            buy.payment_frequency(),
            buy.day_count_convention(),
            buy.business_day_convention(),
            buy.coupon_rate(),
            buy.notional(),
            buy.recovery_rate(),
            buy.include_accrued_premium(),
            false,
        )
        .unwrap();

        let pricer_buy = CdsPricer::new(&buy, &discount, &survival, InterpolationMethod::FlatForward);
        let pricer_sell = CdsPricer::new(&sell, &discount, &survival, InterpolationMethod::FlatForward);

        assert_relative_eq!(
            pricer_buy.mtm().unwrap(),
            -pricer_sell.mtm().unwrap(),
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_single_knot_curve_flat() {
        let base = Date::from_ymd(2025, 5, 5).unwrap();
        let discount = flat_discount_curve(base);
        let survival = flat_survival_curve(base, 0.02);
        let contract = contract_5y(base, 0.01, true);

        for method in [
            InterpolationMethod::Linear,
            InterpolationMethod::FlatForward,
            InterpolationMethod::LinearForward,
        ] {
            let pricer = CdsPricer::new(&contract, &discount, &survival, method);
            let result = pricer.price().unwrap();
            assert!(result.protection_leg_pv > 0.0);
        }
    }
}
