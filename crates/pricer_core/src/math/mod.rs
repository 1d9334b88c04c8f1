//! Numerical primitives shared by the curve and pricing layers.
//!
//! Currently just the root-finding [`solvers`] submodule; interpolation
//! lives directly on [`crate::market_data::curves::Curve`] since the three
//! curve interpolation methods are domain-specific rather than generic
//! one-dimensional schemes.

pub mod solvers;
