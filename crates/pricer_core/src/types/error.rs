//! Error types for structured error handling.
//!
//! This module provides:
//! - `CoreError`: the top-level taxonomy (`InvalidInput`/`OutOfRange`/
//!   `NumericalError`/`Inconsistent`) surfaced by curve construction and
//!   pricing.
//! - `DateError`: errors from date construction and parsing.
//! - `SolverError`: root-finder failures, surfaced by `math::solvers`.
//! - `InterpolationError`: interpolator input/domain failures, surfaced by
//!   `market_data::curves`.

use thiserror::Error;

/// Date-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("date parse error: {0}")]
    ParseError(String),
}

/// Root-finder failures.
///
/// Surfaced by [`crate::math::solvers::NewtonRaphsonSolver`] and
/// [`crate::math::solvers::BrentSolver`], and propagated by the hazard-rate
/// bootstrapper as a `NumericalError`.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SolverError {
    /// Brent's method requires `f(a)` and `f(b)` to have opposite signs.
    #[error("no sign change on bracket [{a}, {b}]")]
    NoBracket {
        /// Lower bracket endpoint.
        a: f64,
        /// Upper bracket endpoint.
        b: f64,
    },

    /// Newton-Raphson's derivative evaluated too close to zero to divide by.
    #[error("derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// Point at which the derivative vanished.
        x: f64,
    },

    /// Iteration budget exhausted without reaching the configured tolerance.
    #[error("solver did not converge within {iterations} iterations")]
    MaxIterationsExceeded {
        /// Iterations actually run.
        iterations: usize,
    },

    /// An intermediate value became non-finite (NaN or infinite).
    #[error("numerical instability: {0}")]
    NumericalInstability(String),
}

/// Interpolator input and domain failures.
///
/// Surfaced by the unified [`crate::market_data::curves::Curve`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Fewer knot points were supplied than the method requires.
    #[error("insufficient data: got {got} point(s), need at least {need}")]
    InsufficientData {
        /// Points actually supplied.
        got: usize,
        /// Minimum points required.
        need: usize,
    },

    /// Malformed input, e.g. mismatched array lengths or non-finite values.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Target fell outside the represented domain and extrapolation was
    /// disallowed by the caller.
    #[error("x = {x} is out of bounds [{min}, {max}]")]
    OutOfBounds {
        /// Requested point.
        x: f64,
        /// Domain lower bound.
        min: f64,
        /// Domain upper bound.
        max: f64,
    },
}

/// Top-level error taxonomy for curve construction and CDS pricing.
///
/// # Variants
/// - `InvalidInput`: malformed construction parameters (non-increasing
///   curve dates, non-finite rates, recovery rate out of `[0, 1)`, notional
///   `<= 0`, unrecognized enumeration value, maturity before effective
///   date).
/// - `OutOfRange`: a requested date falls outside the representable
///   calendar.
/// - `NumericalError`: a solver failed to bracket or converge, or an
///   integration step produced a non-finite value.
/// - `Inconsistent`: curves' base dates are incompatible with a contract's
///   value date beyond a tolerable range, or a survival curve is not
///   monotone non-increasing in implied survival probability.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Malformed construction input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Requested date outside the representable calendar.
    #[error("date out of range: {0}")]
    OutOfRange(String),

    /// A root finder or integration step failed numerically.
    #[error("numerical error: {0}")]
    NumericalError(String),

    /// Curves/contract inputs are mutually incompatible.
    #[error("inconsistent inputs: {0}")]
    Inconsistent(String),
}

impl From<DateError> for CoreError {
    fn from(err: DateError) -> Self {
        CoreError::InvalidInput(err.to_string())
    }
}

impl From<SolverError> for CoreError {
    fn from(err: SolverError) -> Self {
        CoreError::NumericalError(err.to_string())
    }
}

impl From<InterpolationError> for CoreError {
    fn from(err: InterpolationError) -> Self {
        match err {
            InterpolationError::OutOfBounds { .. } => CoreError::OutOfRange(err.to_string()),
            _ => CoreError::InvalidInput(err.to_string()),
        }
    }
}
