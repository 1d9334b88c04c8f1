//! Market data error types.
//!
//! Structured error handling for [`crate::market_data::curves::Curve`]
//! construction and lookup.

use crate::types::error::CoreError;
use crate::types::time::Date;
use thiserror::Error;

/// Market data operation errors.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::EmptyCurve;
/// assert!(format!("{}", err).contains("at least one"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// A curve was constructed with no pillars.
    #[error("curve must have at least one point")]
    EmptyCurve,

    /// Two pillars shared a date, or were non-increasing after sorting.
    #[error("curve dates must be strictly increasing: {prev} >= {next}")]
    NonIncreasingDates {
        /// The earlier (or duplicate) date.
        prev: Date,
        /// The later (or duplicate) date.
        next: Date,
    },

    /// A pillar date preceded the curve's base date.
    #[error("curve date {date} precedes base date {base_date}")]
    DateBeforeBase {
        /// The offending pillar date.
        date: Date,
        /// The curve's base date.
        base_date: Date,
    },

    /// A pillar rate was NaN or infinite.
    #[error("non-finite rate {rate} at {date}")]
    NonFiniteRate {
        /// The pillar date.
        date: Date,
        /// The non-finite rate value.
        rate: f64,
    },

    /// `zero_rate`/`forward_rate` was queried over a zero or negative
    /// horizon, where a rate is not meaningful.
    #[error("target year fraction {t} is not positive")]
    NonPositiveYearFraction {
        /// The computed (non-positive) year fraction.
        t: f64,
    },

    /// An interpolation step produced a non-finite or non-positive
    /// discount factor.
    #[error("invalid discount factor: {value}")]
    InvalidDiscountFactor {
        /// The offending value.
        value: f64,
    },
}

impl From<MarketDataError> for CoreError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::InvalidDiscountFactor { .. } => {
                CoreError::NumericalError(err.to_string())
            }
            _ => CoreError::InvalidInput(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_curve_display() {
        let err = MarketDataError::EmptyCurve;
        assert_eq!(format!("{}", err), "curve must have at least one point");
    }

    #[test]
    fn test_non_positive_year_fraction_display() {
        let err = MarketDataError::NonPositiveYearFraction { t: -0.5 };
        assert!(format!("{}", err).contains("-0.5"));
    }

    #[test]
    fn test_into_core_error_invalid_input() {
        let err = MarketDataError::EmptyCurve;
        let core_err: CoreError = err.into();
        assert!(matches!(core_err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn test_into_core_error_numerical() {
        let err = MarketDataError::InvalidDiscountFactor { value: f64::NAN };
        let core_err: CoreError = err.into();
        assert!(matches!(core_err, CoreError::NumericalError(_)));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = MarketDataError::EmptyCurve;
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = MarketDataError::EmptyCurve;
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
