//! Term-structure curve abstractions for discounting and survival.
//!
//! This module provides:
//! - [`Curve`]: the single generic term-structure engine used for both
//!   discount curves and survival/hazard curves.
//! - [`YieldCurve`]: discount-curve vocabulary over a [`Curve`].
//! - [`CreditCurve`]: survival-curve vocabulary over a [`Curve`].

mod curve;

pub use curve::{CreditCurve, Curve, YieldCurve};
