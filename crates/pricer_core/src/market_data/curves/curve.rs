//! Unified term-structure curve used for both discount and survival curves.
//!
//! A [`Curve`] is a set of `(Date, rate)` pillars anchored to a `base_date`,
//! together with the day-count convention and compounding basis used to turn
//! a pillar rate into a discount factor, and the [`InterpolationMethod`]
//! used to fill in rates between pillars. The same struct serves as a
//! discount curve (via [`YieldCurve`]) or a survival curve (via
//! [`CreditCurve`]) — the two traits differ only in vocabulary, not in the
//! underlying arithmetic.

use crate::market_data::error::MarketDataError;
use crate::types::time::{CompoundingBasis, Date, DayCountConvention, InterpolationMethod};
use num_traits::Float;

/// A term-structure curve: pillar rates anchored to a base date.
///
/// # Invariants
///
/// - At least one pillar.
/// - Pillar dates are strictly increasing and each is `>= base_date`.
/// - Pillar rates are finite.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::Curve;
/// use pricer_core::{CompoundingBasis, Date, DayCountConvention, InterpolationMethod};
///
/// let base = Date::from_ymd(2024, 1, 1).unwrap();
/// let curve = Curve::new(
///     base,
///     vec![
///         (Date::from_ymd(2025, 1, 1).unwrap(), 0.03_f64),
///         (Date::from_ymd(2029, 1, 1).unwrap(), 0.04_f64),
///     ],
///     DayCountConvention::Act365F,
///     CompoundingBasis::Continuous,
/// )
/// .unwrap();
///
/// let df = curve
///     .discount_factor(Date::from_ymd(2025, 1, 1).unwrap(), InterpolationMethod::Linear)
///     .unwrap();
/// assert!((df - (-0.03_f64).exp()).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Curve<T: Float> {
    base_date: Date,
    dates: Vec<Date>,
    rates: Vec<T>,
    day_count_convention: DayCountConvention,
    compounding_basis: CompoundingBasis,
}

impl<T: Float> Curve<T> {
    /// Build a curve from pillar `(date, rate)` pairs.
    ///
    /// Pillars need not be pre-sorted by date; they are sorted here, but
    /// duplicate or out-of-order dates that remain non-increasing after
    /// sorting are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`MarketDataError::EmptyCurve`] if `points` is empty,
    /// [`MarketDataError::DateBeforeBase`] if any pillar precedes
    /// `base_date`, [`MarketDataError::NonIncreasingDates`] if two pillars
    /// share a date, or [`MarketDataError::NonFiniteRate`] if any rate is
    /// NaN or infinite.
    pub fn new(
        base_date: Date,
        mut points: Vec<(Date, T)>,
        day_count_convention: DayCountConvention,
        compounding_basis: CompoundingBasis,
    ) -> Result<Self, MarketDataError> {
        if points.is_empty() {
            return Err(MarketDataError::EmptyCurve);
        }
        points.sort_by_key(|(d, _)| *d);

        for (date, rate) in &points {
            if *date < base_date {
                return Err(MarketDataError::DateBeforeBase {
                    date: *date,
                    base_date,
                });
            }
            if !rate.is_finite() {
                return Err(MarketDataError::NonFiniteRate {
                    date: *date,
                    rate: rate.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        for window in points.windows(2) {
            let (prev, next) = (window[0].0, window[1].0);
            if prev >= next {
                return Err(MarketDataError::NonIncreasingDates { prev, next });
            }
        }

        let (dates, rates): (Vec<Date>, Vec<T>) = points.into_iter().unzip();
        Ok(Self {
            base_date,
            dates,
            rates,
            day_count_convention,
            compounding_basis,
        })
    }

    /// The curve's anchor date (`t = 0`).
    pub fn base_date(&self) -> Date {
        self.base_date
    }

    /// Pillar dates, in increasing order.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Pillar rates, parallel to [`Curve::dates`].
    pub fn rates(&self) -> &[T] {
        &self.rates
    }

    /// The day-count convention used to convert dates to year fractions.
    pub fn day_count_convention(&self) -> DayCountConvention {
        self.day_count_convention
    }

    /// The compounding basis used to convert rates to discount factors.
    pub fn compounding_basis(&self) -> CompoundingBasis {
        self.compounding_basis
    }

    fn year_fraction(&self, date: Date) -> T {
        let yf = self
            .day_count_convention
            .year_fraction_dates(self.base_date, date);
        T::from(yf).unwrap_or_else(T::zero)
    }

    fn pillar_year_fractions(&self) -> Vec<T> {
        self.dates.iter().map(|d| self.year_fraction(*d)).collect()
    }

    /// Locate the bracketing pillar index pair `(k, k+1)` such that
    /// `t_k <= t < t_{k+1}`, or signal flat extrapolation before the first
    /// pillar / at-or-after the last pillar.
    fn bracket(&self, t: T, times: &[T]) -> Bracket {
        if t <= times[0] {
            return Bracket::BeforeFirst;
        }
        if t >= times[times.len() - 1] {
            return Bracket::AfterLast;
        }
        let mut lo = 0usize;
        let mut hi = times.len() - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if times[mid] <= t {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Bracket::Between(lo, hi)
    }

    /// The discount factor to `target_date`, using `interp` to fill in
    /// between pillars.
    ///
    /// Returns `1` for any `target_date <= base_date` (by definition, the
    /// discount factor at `t = 0` is 1; this also covers dates strictly
    /// before the base date, which are outside this model's scope but are
    /// not rejected since callers may legitimately query `value_date`
    /// against a curve anchored slightly earlier).
    pub fn discount_factor(
        &self,
        target_date: Date,
        interp: InterpolationMethod,
    ) -> Result<T, MarketDataError> {
        let t = self.year_fraction(target_date);
        if t <= T::zero() {
            return Ok(T::one());
        }

        let times = self.pillar_year_fractions();
        match self.bracket(t, &times) {
            Bracket::BeforeFirst => self.flat_discount_factor(0, &times, t),
            Bracket::AfterLast => self.flat_discount_factor(times.len() - 1, &times, t),
            Bracket::Between(k, k1) => match interp {
                InterpolationMethod::Linear => self.linear_zero_discount_factor(k, k1, &times, t),
                InterpolationMethod::FlatForward => {
                    self.flat_forward_discount_factor(k, k1, &times, t)
                }
                InterpolationMethod::LinearForward => {
                    self.linear_forward_discount_factor(k, k1, &times, t)
                }
            },
        }
    }

    /// Flat extrapolation: hold the nearest pillar's zero rate constant.
    fn flat_discount_factor(
        &self,
        pillar: usize,
        _times: &[T],
        t: T,
    ) -> Result<T, MarketDataError> {
        let r = self.rates[pillar];
        Self::validated(self.compounding_basis.rate_to_discount_factor(r, t))
    }

    /// `Linear`: interpolate the zero rate linearly in `t`, then convert the
    /// interpolated rate to a discount factor via `compounding_basis`.
    fn linear_zero_discount_factor(
        &self,
        k: usize,
        k1: usize,
        times: &[T],
        t: T,
    ) -> Result<T, MarketDataError> {
        let (t_k, t_k1) = (times[k], times[k1]);
        let (r_k, r_k1) = (self.rates[k], self.rates[k1]);
        let w = (t - t_k) / (t_k1 - t_k);
        let r = r_k + (r_k1 - r_k) * w;
        Self::validated(self.compounding_basis.rate_to_discount_factor(r, t))
    }

    fn pillar_discount_factor(&self, pillar: usize, times: &[T]) -> T {
        self.compounding_basis
            .rate_to_discount_factor(self.rates[pillar], times[pillar])
    }

    /// Instantaneous forward implied by a flat segment: the constant
    /// forward rate that reproduces both endpoint discount factors.
    fn segment_forward(&self, k: usize, k1: usize, times: &[T]) -> T {
        let df_k = self.pillar_discount_factor(k, times);
        let df_k1 = self.pillar_discount_factor(k1, times);
        let dt = times[k1] - times[k];
        -(df_k1 / df_k).ln() / dt
    }

    /// `FlatForward`: piecewise-constant instantaneous forward between
    /// pillars, equal to the segment's own implied forward.
    fn flat_forward_discount_factor(
        &self,
        k: usize,
        k1: usize,
        times: &[T],
        t: T,
    ) -> Result<T, MarketDataError> {
        let df_k = self.pillar_discount_factor(k, times);
        let f = self.segment_forward(k, k1, times);
        let df = df_k * (-f * (t - times[k])).exp();
        Self::validated(df)
    }

    /// `LinearForward`: the instantaneous forward varies linearly across
    /// the segment, from this segment's own flat forward (at `t_k`) to the
    /// next segment's flat forward (at `t_{k+1}`); the last segment has no
    /// "next" forward and falls back to its own (equivalent to
    /// `FlatForward` on that segment). The discount factor follows by
    /// analytically integrating the linear forward over `[t_k, t]`.
    fn linear_forward_discount_factor(
        &self,
        k: usize,
        k1: usize,
        times: &[T],
        t: T,
    ) -> Result<T, MarketDataError> {
        let df_k = self.pillar_discount_factor(k, times);
        let f_start = self.segment_forward(k, k1, times);
        let f_end = if k1 + 1 < times.len() {
            self.segment_forward(k1, k1 + 1, times)
        } else {
            f_start
        };

        let two = T::from(2.0).unwrap();
        let dt = times[k1] - times[k];
        let u = t - times[k];
        let integral = f_start * u + (f_end - f_start) / (two * dt) * u * u;
        let df = df_k * (-integral).exp();
        Self::validated(df)
    }

    fn validated(df: T) -> Result<T, MarketDataError> {
        if !df.is_finite() || df <= T::zero() {
            Err(MarketDataError::InvalidDiscountFactor {
                value: df.to_f64().unwrap_or(f64::NAN),
            })
        } else {
            Ok(df)
        }
    }

    /// The zero rate to `target_date`, under this curve's compounding
    /// basis, implied by [`Curve::discount_factor`].
    ///
    /// # Errors
    ///
    /// Returns [`MarketDataError::NonPositiveYearFraction`] if
    /// `target_date <= base_date`, since a zero rate over a zero (or
    /// negative) horizon is not meaningful.
    pub fn zero_rate(
        &self,
        target_date: Date,
        interp: InterpolationMethod,
    ) -> Result<T, MarketDataError> {
        let t = self.year_fraction(target_date);
        if t <= T::zero() {
            return Err(MarketDataError::NonPositiveYearFraction {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        let df = self.discount_factor(target_date, interp)?;
        Ok(self.compounding_basis.discount_factor_to_rate(df, t))
    }

    /// The simple forward rate between two dates implied by the ratio of
    /// their discount factors, under this curve's compounding basis.
    pub fn forward_rate(
        &self,
        start_date: Date,
        end_date: Date,
        interp: InterpolationMethod,
    ) -> Result<T, MarketDataError> {
        let t = self
            .day_count_convention
            .year_fraction_dates(start_date, end_date);
        if t <= 0.0 {
            return Err(MarketDataError::NonPositiveYearFraction { t });
        }
        let df_start = self.discount_factor(start_date, interp)?;
        let df_end = self.discount_factor(end_date, interp)?;
        let fwd_df = df_end / df_start;
        let t = T::from(t).unwrap();
        Ok(self.compounding_basis.discount_factor_to_rate(fwd_df, t))
    }
}

enum Bracket {
    BeforeFirst,
    AfterLast,
    Between(usize, usize),
}

/// Discount-curve view of a [`Curve`]: discount factors, zero rates and
/// forward rates.
pub trait YieldCurve<T: Float> {
    /// Discount factor to `target_date`.
    fn discount_factor(
        &self,
        target_date: Date,
        interp: InterpolationMethod,
    ) -> Result<T, MarketDataError>;

    /// Zero rate to `target_date`.
    fn zero_rate(
        &self,
        target_date: Date,
        interp: InterpolationMethod,
    ) -> Result<T, MarketDataError>;

    /// Simple forward rate between `start_date` and `end_date`.
    fn forward_rate(
        &self,
        start_date: Date,
        end_date: Date,
        interp: InterpolationMethod,
    ) -> Result<T, MarketDataError>;
}

impl<T: Float> YieldCurve<T> for Curve<T> {
    fn discount_factor(
        &self,
        target_date: Date,
        interp: InterpolationMethod,
    ) -> Result<T, MarketDataError> {
        Curve::discount_factor(self, target_date, interp)
    }

    fn zero_rate(
        &self,
        target_date: Date,
        interp: InterpolationMethod,
    ) -> Result<T, MarketDataError> {
        Curve::zero_rate(self, target_date, interp)
    }

    fn forward_rate(
        &self,
        start_date: Date,
        end_date: Date,
        interp: InterpolationMethod,
    ) -> Result<T, MarketDataError> {
        Curve::forward_rate(self, start_date, end_date, interp)
    }
}

/// Survival-curve view of a [`Curve`]: survival probabilities, hazard
/// rates and cumulative default probabilities.
///
/// Structurally identical to [`YieldCurve`] — a survival probability is a
/// discount factor with the hazard rate standing in for the zero rate —
/// but kept as a distinct trait so call sites read in credit vocabulary.
pub trait CreditCurve<T: Float> {
    /// Survival probability to `target_date`.
    fn survival_probability(
        &self,
        target_date: Date,
        interp: InterpolationMethod,
    ) -> Result<T, MarketDataError>;

    /// Piecewise-constant (or interpolated) hazard rate to `target_date`.
    fn hazard_rate(
        &self,
        target_date: Date,
        interp: InterpolationMethod,
    ) -> Result<T, MarketDataError>;

    /// Cumulative default probability to `target_date`, `1 - survival`.
    fn default_probability(
        &self,
        target_date: Date,
        interp: InterpolationMethod,
    ) -> Result<T, MarketDataError>;
}

impl<T: Float> CreditCurve<T> for Curve<T> {
    fn survival_probability(
        &self,
        target_date: Date,
        interp: InterpolationMethod,
    ) -> Result<T, MarketDataError> {
        Curve::discount_factor(self, target_date, interp)
    }

    fn hazard_rate(
        &self,
        target_date: Date,
        interp: InterpolationMethod,
    ) -> Result<T, MarketDataError> {
        Curve::zero_rate(self, target_date, interp)
    }

    fn default_probability(
        &self,
        target_date: Date,
        interp: InterpolationMethod,
    ) -> Result<T, MarketDataError> {
        Ok(T::one() - self.survival_probability(target_date, interp)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Date {
        Date::from_ymd(2024, 1, 1).unwrap()
    }

    fn flat_curve() -> Curve<f64> {
        Curve::new(
            base(),
            vec![
                (Date::from_ymd(2025, 1, 1).unwrap(), 0.03),
                (Date::from_ymd(2029, 1, 1).unwrap(), 0.03),
            ],
            DayCountConvention::Act365F,
            CompoundingBasis::Continuous,
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_curve() {
        let err = Curve::<f64>::new(
            base(),
            vec![],
            DayCountConvention::Act365F,
            CompoundingBasis::Continuous,
        )
        .unwrap_err();
        assert_eq!(err, MarketDataError::EmptyCurve);
    }

    #[test]
    fn rejects_date_before_base() {
        let err = Curve::new(
            base(),
            vec![(Date::from_ymd(2023, 1, 1).unwrap(), 0.03_f64)],
            DayCountConvention::Act365F,
            CompoundingBasis::Continuous,
        )
        .unwrap_err();
        assert!(matches!(err, MarketDataError::DateBeforeBase { .. }));
    }

    #[test]
    fn rejects_duplicate_dates() {
        let d = Date::from_ymd(2025, 1, 1).unwrap();
        let err = Curve::new(
            base(),
            vec![(d, 0.03_f64), (d, 0.04_f64)],
            DayCountConvention::Act365F,
            CompoundingBasis::Continuous,
        )
        .unwrap_err();
        assert!(matches!(err, MarketDataError::NonIncreasingDates { .. }));
    }

    #[test]
    fn rejects_non_finite_rate() {
        let err = Curve::new(
            base(),
            vec![(Date::from_ymd(2025, 1, 1).unwrap(), f64::NAN)],
            DayCountConvention::Act365F,
            CompoundingBasis::Continuous,
        )
        .unwrap_err();
        assert!(matches!(err, MarketDataError::NonFiniteRate { .. }));
    }

    #[test]
    fn discount_factor_at_base_date_is_one() {
        let curve = flat_curve();
        let df = curve.discount_factor(base(), InterpolationMethod::Linear).unwrap();
        assert!((df - 1.0).abs() < 1e-12);
    }

    #[test]
    fn flat_curve_matches_continuous_compounding_at_pillar() {
        let curve = flat_curve();
        let target = Date::from_ymd(2025, 1, 1).unwrap();
        let t = DayCountConvention::Act365F.year_fraction_dates(base(), target);
        let expected = (-0.03 * t).exp();
        for interp in [
            InterpolationMethod::Linear,
            InterpolationMethod::FlatForward,
            InterpolationMethod::LinearForward,
        ] {
            let df = curve.discount_factor(target, interp).unwrap();
            assert!((df - expected).abs() < 1e-8, "{interp:?}: {df} vs {expected}");
        }
    }

    #[test]
    fn flat_curve_agrees_across_methods_between_pillars() {
        let curve = flat_curve();
        let target = Date::from_ymd(2027, 1, 1).unwrap();
        let linear = curve
            .discount_factor(target, InterpolationMethod::Linear)
            .unwrap();
        let flat_fwd = curve
            .discount_factor(target, InterpolationMethod::FlatForward)
            .unwrap();
        let linear_fwd = curve
            .discount_factor(target, InterpolationMethod::LinearForward)
            .unwrap();
        assert!((linear - flat_fwd).abs() < 1e-8);
        assert!((flat_fwd - linear_fwd).abs() < 1e-8);
    }

    #[test]
    fn flat_extrapolation_before_first_pillar() {
        let curve = flat_curve();
        let target = Date::from_ymd(2024, 6, 1).unwrap();
        let df = curve
            .discount_factor(target, InterpolationMethod::FlatForward)
            .unwrap();
        let t = DayCountConvention::Act365F.year_fraction_dates(base(), target);
        let expected = (-0.03 * t).exp();
        assert!((df - expected).abs() < 1e-8);
    }

    #[test]
    fn flat_extrapolation_after_last_pillar() {
        let curve = flat_curve();
        let target = Date::from_ymd(2035, 1, 1).unwrap();
        let df = curve
            .discount_factor(target, InterpolationMethod::Linear)
            .unwrap();
        let t = DayCountConvention::Act365F.year_fraction_dates(base(), target);
        let expected = (-0.03 * t).exp();
        assert!((df - expected).abs() < 1e-8);
    }

    #[test]
    fn single_pillar_is_flat_everywhere() {
        let curve = Curve::new(
            base(),
            vec![(Date::from_ymd(2026, 1, 1).unwrap(), 0.05_f64)],
            DayCountConvention::Act365F,
            CompoundingBasis::Continuous,
        )
        .unwrap();
        for target in [
            Date::from_ymd(2024, 6, 1).unwrap(),
            Date::from_ymd(2026, 1, 1).unwrap(),
            Date::from_ymd(2030, 1, 1).unwrap(),
        ] {
            let t = DayCountConvention::Act365F.year_fraction_dates(base(), target);
            let expected = (-0.05 * t).exp();
            let df = curve
                .discount_factor(target, InterpolationMethod::LinearForward)
                .unwrap();
            assert!((df - expected).abs() < 1e-8);
        }
    }

    #[test]
    fn discount_factor_decreasing_in_time_for_upward_curve() {
        let curve = Curve::new(
            base(),
            vec![
                (Date::from_ymd(2025, 1, 1).unwrap(), 0.02),
                (Date::from_ymd(2027, 1, 1).unwrap(), 0.03),
                (Date::from_ymd(2031, 1, 1).unwrap(), 0.04),
            ],
            DayCountConvention::Act365F,
            CompoundingBasis::Continuous,
        )
        .unwrap();
        let mut prev = 1.0;
        for year in [2025, 2026, 2027, 2028, 2029, 2030, 2031, 2032] {
            let target = Date::from_ymd(year, 1, 1).unwrap();
            let df = curve
                .discount_factor(target, InterpolationMethod::FlatForward)
                .unwrap();
            assert!(df < prev, "discount factor should decrease with time");
            prev = df;
        }
    }

    #[test]
    fn zero_rate_round_trips_through_discount_factor() {
        let curve = Curve::new(
            base(),
            vec![
                (Date::from_ymd(2025, 1, 1).unwrap(), 0.02_f64),
                (Date::from_ymd(2029, 1, 1).unwrap(), 0.045),
            ],
            DayCountConvention::Act365F,
            CompoundingBasis::SemiAnnual,
        )
        .unwrap();
        let target = Date::from_ymd(2027, 6, 1).unwrap();
        let df = curve
            .discount_factor(target, InterpolationMethod::Linear)
            .unwrap();
        let r = curve
            .zero_rate(target, InterpolationMethod::Linear)
            .unwrap();
        let t = DayCountConvention::Act365F.year_fraction_dates(base(), target);
        let df_back = CompoundingBasis::SemiAnnual.rate_to_discount_factor(r, t);
        assert!((df - df_back).abs() < 1e-10);
    }

    #[test]
    fn zero_rate_rejects_non_positive_horizon() {
        let curve = flat_curve();
        let err = curve
            .zero_rate(base(), InterpolationMethod::Linear)
            .unwrap_err();
        assert!(matches!(err, MarketDataError::NonPositiveYearFraction { .. }));
    }

    #[test]
    fn forward_rate_between_two_future_dates() {
        let curve = Curve::new(
            base(),
            vec![
                (Date::from_ymd(2025, 1, 1).unwrap(), 0.02_f64),
                (Date::from_ymd(2030, 1, 1).unwrap(), 0.04),
            ],
            DayCountConvention::Act365F,
            CompoundingBasis::Continuous,
        )
        .unwrap();
        let start = Date::from_ymd(2026, 1, 1).unwrap();
        let end = Date::from_ymd(2027, 1, 1).unwrap();
        let df_start = curve
            .discount_factor(start, InterpolationMethod::FlatForward)
            .unwrap();
        let df_end = curve
            .discount_factor(end, InterpolationMethod::FlatForward)
            .unwrap();
        let fwd = curve
            .forward_rate(start, end, InterpolationMethod::FlatForward)
            .unwrap();
        let t = DayCountConvention::Act365F.year_fraction_dates(start, end);
        let implied = CompoundingBasis::Continuous.rate_to_discount_factor(fwd, t);
        assert!((implied - df_end / df_start).abs() < 1e-10);
    }

    #[test]
    fn credit_curve_survival_and_default_probability_sum_to_one() {
        let curve = Curve::new(
            base(),
            vec![
                (Date::from_ymd(2025, 1, 1).unwrap(), 0.015_f64),
                (Date::from_ymd(2030, 1, 1).unwrap(), 0.02),
            ],
            DayCountConvention::Act365F,
            CompoundingBasis::Continuous,
        )
        .unwrap();
        let target = Date::from_ymd(2027, 1, 1).unwrap();
        let survival = CreditCurve::survival_probability(&curve, target, InterpolationMethod::Linear)
            .unwrap();
        let default_prob =
            CreditCurve::default_probability(&curve, target, InterpolationMethod::Linear).unwrap();
        assert!((survival + default_prob - 1.0).abs() < 1e-12);
    }

    #[test]
    fn credit_curve_hazard_rate_matches_zero_rate() {
        let curve = flat_curve();
        let target = Date::from_ymd(2027, 1, 1).unwrap();
        let hazard = CreditCurve::hazard_rate(&curve, target, InterpolationMethod::Linear).unwrap();
        let zero = YieldCurve::zero_rate(&curve, target, InterpolationMethod::Linear).unwrap();
        assert!((hazard - zero).abs() < 1e-12);
    }

    #[test]
    fn generic_over_f32() {
        let curve: Curve<f32> = Curve::new(
            base(),
            vec![(Date::from_ymd(2025, 1, 1).unwrap(), 0.03)],
            DayCountConvention::Act365F,
            CompoundingBasis::Continuous,
        )
        .unwrap();
        let df = curve
            .discount_factor(Date::from_ymd(2025, 1, 1).unwrap(), InterpolationMethod::Linear)
            .unwrap();
        assert!(df > 0.9 && df < 1.0);
    }
}
