//! # Pricer Core (L1: Foundation)
//!
//! Date/day-count arithmetic, term-structure curves, and the root-finding
//! primitives the rest of the workspace builds on.
//!
//! This crate provides:
//! - `types::time`: civil dates, day-count conventions, compounding bases,
//!   business-day adjustment.
//! - `types::error`: structured error taxonomy shared by the higher layers.
//! - `market_data::curves`: a single generic term-structure curve used for
//!   both discount curves and survival/hazard curves.
//! - `math::solvers`: generic Newton-Raphson and Brent root finders.
//!
//! Everything here is a pure function over immutable value types: no I/O,
//! no shared mutable state, no AD tape.

#![warn(missing_docs)]

pub mod market_data;
pub mod math;
pub mod types;

pub use market_data::curves::{CreditCurve, Curve, YieldCurve};
pub use types::time::{
    BusinessDayConvention, CompoundingBasis, Date, DayCountConvention, InterpolationMethod,
};
