//! Sequential hazard-rate bootstrapping engine.
//!
//! Builds a survival curve knot-by-knot: for each benchmark tenor, in
//! increasing maturity order, solve for the single piecewise-constant
//! hazard rate over `[T_{j-1}, T_j]` that reprices the benchmark CDS to
//! par (`MTM ≈ 0`), holding every earlier knot fixed. Each solve only
//! ever depends on knots already committed, so the bootstrap is a single
//! forward pass with no re-entrant or simultaneous solving across tenors.

use super::config::GenericBootstrapConfig;
use super::error::BootstrapError;
use super::instrument::{CdsBenchmark, CdsBootstrapInput};
use num_traits::Float;
use pricer_core::market_data::curves::Curve;
use pricer_core::math::solvers::{BrentSolver, NewtonRaphsonSolver, SolverConfig};
use pricer_core::types::time::{CompoundingBasis, Date, DayCountConvention};
use pricer_core::types::SolverError;
use pricer_models::instruments::credit::{CdsContract, CdsPricer};

/// Day-count convention used to turn a committed hazard knot into the
/// cumulative curve rate `Curve` stores internally.
const CURVE_DAY_COUNT: DayCountConvention = DayCountConvention::Act365F;

/// Outcome of bootstrapping a single benchmark tenor, retained for
/// diagnostics alongside the final [`Curve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenericBootstrapResult<T: Float> {
    /// Maturity date of the benchmark.
    pub maturity: Date,
    /// Solved piecewise-constant hazard rate over this tenor's segment.
    pub hazard_rate: T,
    /// MTM residual (as a fraction of notional) at the solved hazard.
    pub residual: T,
}

/// Sequentially bootstraps a survival curve from benchmark CDS tenors and
/// spreads.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::curves::Curve;
/// use pricer_core::types::time::{BusinessDayConvention, CompoundingBasis, Date, DayCountConvention};
/// use pricer_models::schedules::Frequency;
/// use pricer_optimiser::bootstrapping::{CdsBenchmark, CdsBootstrapInput, SequentialBootstrapper};
///
/// let valuation_date = Date::from_ymd(2025, 5, 5).unwrap();
/// let discount = Curve::new(
///     valuation_date,
///     vec![(Date::from_ymd(2035, 5, 5).unwrap(), 0.03)],
///     DayCountConvention::Act365F,
///     CompoundingBasis::Continuous,
/// )
/// .unwrap();
///
/// let input = CdsBootstrapInput::new(
///     Frequency::Quarterly,
///     DayCountConvention::Act360,
///     BusinessDayConvention::ModifiedFollowing,
///     0.4,
///     1.0e7,
///     true,
/// );
/// let benchmarks = vec![
///     CdsBenchmark::new(1.0, 0.01),
///     CdsBenchmark::new(5.0, 0.02),
/// ];
///
/// let bootstrapper = SequentialBootstrapper::with_defaults();
/// let (curve, _results) = bootstrapper
///     .bootstrap(valuation_date, &discount, &benchmarks, &input)
///     .unwrap();
/// assert_eq!(curve.dates().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SequentialBootstrapper<T: Float> {
    config: GenericBootstrapConfig<T>,
}

impl<T: Float> SequentialBootstrapper<T> {
    /// Creates a bootstrapper with the given configuration.
    pub fn new(config: GenericBootstrapConfig<T>) -> Self {
        Self { config }
    }

    /// Creates a bootstrapper with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: GenericBootstrapConfig::default(),
        }
    }

    /// Returns a reference to the bootstrapper's configuration.
    pub fn config(&self) -> &GenericBootstrapConfig<T> {
        &self.config
    }

    /// Bootstraps a survival curve from `benchmarks`, in increasing tenor
    /// order, against `discount_curve`.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::InsufficientData`] if `benchmarks` is
    /// empty, [`BootstrapError::NonIncreasingTenor`] if tenors are not
    /// strictly increasing, [`BootstrapError::NegativeSpread`] if a spread
    /// is negative, and [`BootstrapError::NonConvergent`] if the solver
    /// cannot bracket a root for some tenor.
    pub fn bootstrap(
        &self,
        valuation_date: Date,
        discount_curve: &Curve<T>,
        benchmarks: &[CdsBenchmark<T>],
        input: &CdsBootstrapInput<T>,
    ) -> Result<(Curve<T>, Vec<GenericBootstrapResult<T>>), BootstrapError> {
        if benchmarks.is_empty() {
            return Err(BootstrapError::insufficient_data(1, 0));
        }
        for (idx, window) in benchmarks.windows(2).enumerate() {
            if window[1].tenor_years() <= window[0].tenor_years() {
                return Err(BootstrapError::non_increasing_tenor(
                    idx + 1,
                    window[1].tenor_years().to_f64().unwrap_or(f64::NAN),
                ));
            }
        }
        for benchmark in benchmarks {
            if benchmark.par_spread() < T::zero() {
                return Err(BootstrapError::negative_spread(
                    benchmark.tenor_years().to_f64().unwrap_or(f64::NAN),
                    benchmark.par_spread().to_f64().unwrap_or(f64::NAN),
                ));
            }
        }

        let effective_date =
            valuation_date.add_days(CdsBootstrapInput::<T>::EFFECTIVE_OFFSET_DAYS);
        let step_in_date = valuation_date.add_days(CdsBootstrapInput::<T>::STEP_IN_OFFSET_DAYS);
        let settlement_date =
            valuation_date.add_days(CdsBootstrapInput::<T>::SETTLEMENT_OFFSET_DAYS);

        let mut knots: Vec<(Date, T)> = Vec::with_capacity(benchmarks.len());
        let mut results = Vec::with_capacity(benchmarks.len());

        for (tenor_index, benchmark) in benchmarks.iter().enumerate() {
            let months = (benchmark.tenor_years().to_f64().unwrap_or(0.0) * 12.0).round() as i32;
            let maturity = valuation_date.add_months(months);

            let contract = CdsContract::new(
                valuation_date,
                effective_date,
                maturity,
                valuation_date,
                settlement_date,
                step_in_date,
                input.payment_frequency,
                input.day_count_convention,
                input.business_day_convention,
                benchmark.par_spread(),
                input.notional,
                input.recovery_rate,
                input.include_accrued_premium,
                true,
            )?;

            let prior_knots = knots.clone();
            let prior_last = prior_knots.last().copied();
            let t_new = Self::year_fraction(valuation_date, maturity);
            let dt = match prior_last {
                Some((prev_date, _)) => t_new - Self::year_fraction(valuation_date, prev_date),
                None => t_new,
            };

            let mtm_of = |h: T| -> Result<T, BootstrapError> {
                let survival = Self::candidate_curve(
                    valuation_date,
                    &prior_knots,
                    maturity,
                    t_new,
                    dt,
                    prior_last,
                    h,
                )?;
                let pricer = CdsPricer::new(
                    &contract,
                    discount_curve,
                    &survival,
                    self.config.interpolation,
                );
                let mtm = pricer.mtm()?;
                Ok(mtm / input.notional)
            };

            let initial_guess = benchmark.par_spread() / (T::one() - input.recovery_rate);
            let (hazard, residual) = self.solve_hazard(tenor_index, maturity, initial_guess, &mtm_of)?;

            let committed_rate = Self::committed_rate(t_new, dt, prior_last, hazard);
            knots.push((maturity, committed_rate));
            results.push(GenericBootstrapResult {
                maturity,
                hazard_rate: hazard,
                residual,
            });
        }

        let curve = Curve::new(
            valuation_date,
            knots,
            CURVE_DAY_COUNT,
            CompoundingBasis::Continuous,
        )?;
        Ok((curve, results))
    }

    fn year_fraction(base: Date, date: Date) -> T {
        let yf = CURVE_DAY_COUNT.year_fraction_dates(base, date);
        T::from(yf).unwrap_or_else(T::zero)
    }

    /// The cumulative rate to store at the new pillar: the hazard-rate
    /// analogue of a zero rate, blending the previously-committed
    /// cumulative rate with the new segment's own piecewise-constant
    /// hazard.
    fn committed_rate(t_new: T, dt: T, prior_last: Option<(Date, T)>, hazard: T) -> T {
        let prior_cum_t = prior_last
            .map(|(_, r)| r * (t_new - dt))
            .unwrap_or_else(T::zero);
        (prior_cum_t + hazard * dt) / t_new
    }

    /// Builds the candidate survival curve extending `prior_knots` with a
    /// trial hazard `h` over the final segment.
    fn candidate_curve(
        base_date: Date,
        prior_knots: &[(Date, T)],
        maturity: Date,
        t_new: T,
        dt: T,
        prior_last: Option<(Date, T)>,
        h: T,
    ) -> Result<Curve<T>, BootstrapError> {
        let mut points = prior_knots.to_vec();
        points.push((maturity, Self::committed_rate(t_new, dt, prior_last, h)));
        Ok(Curve::new(
            base_date,
            points,
            CURVE_DAY_COUNT,
            CompoundingBasis::Continuous,
        )?)
    }

    /// Solves `mtm_of(h) = 0` for a single tenor: Newton-Raphson with a
    /// central-difference derivative first, falling back to Brent with an
    /// expanding bracket if Newton fails to converge.
    fn solve_hazard<F>(
        &self,
        tenor_index: usize,
        maturity: Date,
        initial_guess: T,
        mtm_of: &F,
    ) -> Result<(T, T), BootstrapError>
    where
        F: Fn(T) -> Result<T, BootstrapError>,
    {
        let solver_config = SolverConfig {
            tolerance: self.config.mtm_tolerance,
            max_iterations: self.config.max_iterations,
        };

        let bump = T::from(1e-6).unwrap();
        let f = |h: T| -> T { mtm_of(h).unwrap_or_else(|_| T::nan()) };
        let f_prime = |h: T| -> T {
            let up = f(h + bump);
            let down = f(h - bump);
            (up - down) / (bump + bump)
        };

        let newton = NewtonRaphsonSolver::new(solver_config);
        if let Ok(h) = newton.find_root(f, f_prime, initial_guess) {
            let residual = mtm_of(h)?;
            if residual.abs() < self.config.mtm_tolerance {
                return Ok((h, residual));
            }
        }

        let brent = BrentSolver::new(solver_config);
        let mut lo = T::zero();
        let mut hi = initial_guess.max(T::from(0.01).unwrap());
        let mut bracketed = false;
        let max_expansions = 60usize;
        for _ in 0..max_expansions {
            let f_lo = mtm_of(lo)?;
            let f_hi = mtm_of(hi)?;
            if f_lo * f_hi <= T::zero() {
                bracketed = true;
                break;
            }
            hi = hi * T::from(2.0).unwrap() + T::from(1e-4).unwrap();
        }

        if !bracketed {
            return Err(BootstrapError::non_convergent(
                tenor_index,
                maturity,
                SolverError::NoBracket {
                    a: lo.to_f64().unwrap_or(f64::NAN),
                    b: hi.to_f64().unwrap_or(f64::NAN),
                },
            ));
        }

        let root = brent
            .find_root(f, lo, hi)
            .map_err(|e| BootstrapError::non_convergent(tenor_index, maturity, e))?;
        let residual = mtm_of(root)?;
        Ok((root, residual))
    }
}
