//! Core time and error types.
//!
//! This module provides:
//! - `time`: civil dates, day-count conventions, compounding bases, and
//!   business-day adjustment.
//! - `error`: the structured error taxonomy (`CoreError`, `DateError`,
//!   `SolverError`, `InterpolationError`) shared by the rest of the
//!   workspace.
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module
//! level:
//! - [`Date`], [`DayCountConvention`], [`CompoundingBasis`],
//!   [`BusinessDayConvention`], [`InterpolationMethod`],
//!   [`time_to_maturity`], [`time_to_maturity_dates`] from `time`.
//! - [`CoreError`], [`DateError`], [`SolverError`], [`InterpolationError`]
//!   from `error`.

pub mod error;
pub mod time;

pub use error::{CoreError, DateError, InterpolationError, SolverError};
pub use time::{
    time_to_maturity, time_to_maturity_dates, BusinessDayConvention, CompoundingBasis, Date,
    DayCountConvention, InterpolationMethod,
};
