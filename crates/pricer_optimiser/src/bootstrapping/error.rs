//! Bootstrap-specific error types.
//!
//! Structured error handling for the sequential hazard-rate bootstrap,
//! with diagnostic information identifying which benchmark tenor failed.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::time::Date;
use pricer_core::types::SolverError;
use pricer_models::instruments::credit::{CdsError, PricingError};
use thiserror::Error;

/// Errors that can occur during credit-curve bootstrapping.
///
/// # Examples
///
/// ```
/// use pricer_optimiser::bootstrapping::BootstrapError;
/// use pricer_core::types::time::Date;
/// use pricer_core::types::SolverError;
///
/// let err = BootstrapError::non_convergent(
///     2,
///     Date::from_ymd(2030, 5, 5).unwrap(),
///     SolverError::MaxIterationsExceeded { iterations: 100 },
/// );
/// assert!(format!("{}", err).contains("tenor 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BootstrapError {
    /// The solver failed to bracket or converge on a hazard rate for a
    /// given tenor.
    #[error("non-convergent at tenor {tenor_index} (maturity {maturity}): {source}")]
    NonConvergent {
        /// Zero-based index of the benchmark in the input list.
        tenor_index: usize,
        /// Maturity date of the benchmark that failed to converge.
        maturity: Date,
        /// The underlying solver failure.
        #[source]
        source: SolverError,
    },

    /// Benchmark tenors must be strictly increasing.
    #[error("tenor at index {index} ({tenor_years}y) is not strictly increasing")]
    NonIncreasingTenor {
        /// Index of the offending benchmark.
        index: usize,
        /// The offending tenor, in years.
        tenor_years: f64,
    },

    /// Not enough benchmarks were supplied to bootstrap a curve.
    #[error("insufficient benchmarks: need at least {required}, got {provided}")]
    InsufficientData {
        /// Minimum number of benchmarks required.
        required: usize,
        /// Number of benchmarks provided.
        provided: usize,
    },

    /// A quoted par spread was negative.
    #[error("negative par spread at tenor {tenor_years}y: {spread}")]
    NegativeSpread {
        /// The tenor, in years.
        tenor_years: f64,
        /// The offending spread.
        spread: f64,
    },

    /// The synthetic benchmark contract itself failed validation.
    #[error("benchmark contract error: {0}")]
    Contract(#[from] CdsError),

    /// The CDS pricer failed while evaluating the MTM residual.
    #[error("pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Curve construction failed while committing a new knot.
    #[error("market data error: {0}")]
    MarketData(#[from] MarketDataError),
}

impl BootstrapError {
    /// Creates a non-convergence error for a given tenor.
    pub fn non_convergent(tenor_index: usize, maturity: Date, source: SolverError) -> Self {
        Self::NonConvergent {
            tenor_index,
            maturity,
            source,
        }
    }

    /// Creates a non-increasing tenor error.
    pub fn non_increasing_tenor(index: usize, tenor_years: f64) -> Self {
        Self::NonIncreasingTenor { index, tenor_years }
    }

    /// Creates an insufficient-data error.
    pub fn insufficient_data(required: usize, provided: usize) -> Self {
        Self::InsufficientData { required, provided }
    }

    /// Creates a negative-spread error.
    pub fn negative_spread(tenor_years: f64, spread: f64) -> Self {
        Self::NegativeSpread {
            tenor_years,
            spread,
        }
    }

    /// `true` if this is a non-convergence failure at some tenor.
    pub fn is_non_convergent(&self) -> bool {
        matches!(self, Self::NonConvergent { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_convergent_display() {
        let err = BootstrapError::non_convergent(
            2,
            Date::from_ymd(2030, 5, 5).unwrap(),
            SolverError::NoBracket { a: 0.0, b: 1.0 },
        );
        let display = format!("{}", err);
        assert!(display.contains("tenor 2"));
        assert!(err.is_non_convergent());
    }

    #[test]
    fn test_non_increasing_tenor_display() {
        let err = BootstrapError::non_increasing_tenor(1, 1.0);
        let display = format!("{}", err);
        assert!(display.contains("index 1"));
        assert!(!err.is_non_convergent());
    }

    #[test]
    fn test_insufficient_data_display() {
        let err = BootstrapError::insufficient_data(1, 0);
        assert!(format!("{}", err).contains("insufficient"));
    }

    #[test]
    fn test_negative_spread_display() {
        let err = BootstrapError::negative_spread(5.0, -0.01);
        assert!(format!("{}", err).contains("negative"));
    }

    #[test]
    fn test_clone_and_equality() {
        let err = BootstrapError::insufficient_data(2, 1);
        assert_eq!(err.clone(), err);
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = BootstrapError::insufficient_data(2, 1);
        let _: &dyn std::error::Error = &err;
    }
}
