//! Benchmark instrument definitions for credit-curve bootstrapping.
//!
//! The only instrument the bootstrapper consumes is a benchmark CDS quoted
//! by tenor and par spread; the synthetic [`CdsContract`] built from each
//! benchmark shares the conventions supplied in [`CdsBootstrapInput`].

use num_traits::Float;
use pricer_core::types::time::{BusinessDayConvention, DayCountConvention};
use pricer_models::schedules::Frequency;

/// A single benchmark CDS tenor/spread quote.
///
/// # Examples
///
/// ```
/// use pricer_optimiser::bootstrapping::CdsBenchmark;
///
/// let benchmark: CdsBenchmark<f64> = CdsBenchmark::new(5.0, 0.02);
/// assert!((benchmark.tenor_years() - 5.0).abs() < 1e-10);
/// assert!((benchmark.par_spread() - 0.02).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CdsBenchmark<T: Float> {
    tenor_years: T,
    par_spread: T,
}

impl<T: Float> CdsBenchmark<T> {
    /// Creates a benchmark quote for `tenor_years` at `par_spread`.
    pub fn new(tenor_years: T, par_spread: T) -> Self {
        Self {
            tenor_years,
            par_spread,
        }
    }

    /// Tenor, in years from the valuation date.
    #[inline]
    pub fn tenor_years(&self) -> T {
        self.tenor_years
    }

    /// Quoted par spread (decimal, e.g. `0.01` for 100bp).
    #[inline]
    pub fn par_spread(&self) -> T {
        self.par_spread
    }
}

/// Shared conventions applied to every synthetic benchmark contract built
/// during bootstrapping.
///
/// Dates other than `valuation_date` follow the standard ISDA CDS
/// convention documented in [`CdsBootstrapInput::standard_dates`]: the
/// contract becomes effective (and protection steps in) the day after
/// valuation, and cash settles T+3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CdsBootstrapInput<T: Float> {
    /// Payment frequency shared by every benchmark.
    pub payment_frequency: Frequency,
    /// Day-count convention shared by every benchmark.
    pub day_count_convention: DayCountConvention,
    /// Business-day convention shared by every benchmark.
    pub business_day_convention: BusinessDayConvention,
    /// Assumed recovery rate, shared by every benchmark.
    pub recovery_rate: T,
    /// Notional used for the synthetic contracts (cancels out of the par
    /// condition, but is needed by [`CdsContract`](pricer_models::instruments::credit::CdsContract)).
    pub notional: T,
    /// Whether accrued premium on default is included in the premium leg.
    pub include_accrued_premium: bool,
}

impl<T: Float> CdsBootstrapInput<T> {
    /// Creates bootstrap-wide conventions.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        payment_frequency: Frequency,
        day_count_convention: DayCountConvention,
        business_day_convention: BusinessDayConvention,
        recovery_rate: T,
        notional: T,
        include_accrued_premium: bool,
    ) -> Self {
        Self {
            payment_frequency,
            day_count_convention,
            business_day_convention,
            recovery_rate,
            notional,
            include_accrued_premium,
        }
    }

    /// The standard ISDA offsets from `valuation_date`: effective date and
    /// step-in date are `valuation_date + 1` calendar day, settlement date
    /// is `valuation_date + 3` calendar days. This is a documented constant
    /// of this implementation, not a configurable parameter.
    pub const EFFECTIVE_OFFSET_DAYS: i64 = 1;
    /// See [`Self::EFFECTIVE_OFFSET_DAYS`].
    pub const STEP_IN_OFFSET_DAYS: i64 = 1;
    /// See [`Self::EFFECTIVE_OFFSET_DAYS`].
    pub const SETTLEMENT_OFFSET_DAYS: i64 = 3;
}
