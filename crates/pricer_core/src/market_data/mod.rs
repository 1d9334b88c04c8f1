//! Market data structures for the CDS standard model.
//!
//! # Components
//!
//! - [`curves`]: the unified term-structure [`curves::Curve`], serving as
//!   both discount curve and survival/hazard curve.
//! - [`error`]: market data error types ([`MarketDataError`]).
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::{Curve, YieldCurve};
//! use pricer_core::{CompoundingBasis, Date, DayCountConvention, InterpolationMethod};
//!
//! let base = Date::from_ymd(2024, 1, 1).unwrap();
//! let curve = Curve::new(
//!     base,
//!     vec![(Date::from_ymd(2029, 1, 1).unwrap(), 0.05_f64)],
//!     DayCountConvention::Act365F,
//!     CompoundingBasis::Continuous,
//! )
//! .unwrap();
//! let df = curve
//!     .discount_factor(Date::from_ymd(2025, 1, 1).unwrap(), InterpolationMethod::Linear)
//!     .unwrap();
//! assert!(df > 0.0 && df < 1.0);
//! ```

pub mod curves;
pub mod error;

pub use curves::{CreditCurve, Curve, YieldCurve};
pub use error::MarketDataError;
