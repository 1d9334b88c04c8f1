//! Root-finding solvers for numerical computation.
//!
//! This module provides the one-dimensional root finders used by
//! [`crate::market_data::curves::Curve`] construction helpers and, at the
//! `pricer_optimiser` layer, by the hazard-rate bootstrapper to solve each
//! benchmark CDS's par condition.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: Fast quadratic convergence using a supplied
//!   derivative (or central-difference approximation at the call site).
//! - [`BrentSolver`]: Robust bracketing method without derivative
//!   requirement; used as a fallback when Newton-Raphson fails to converge.
//!
//! ## Configuration
//!
//! Both solvers share [`SolverConfig`]:
//! - `tolerance`: Convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let config = SolverConfig::default();
//! let solver = NewtonRaphsonSolver::new(config);
//!
//! let f = |x: f64| x * x - 2.0;
//! let f_prime = |x: f64| 2.0 * x;
//!
//! let root = solver.find_root(f, f_prime, 1.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod brent;
mod config;
mod newton_raphson;

// Re-export public types at module level
pub use brent::BrentSolver;
pub use config::SolverConfig;
pub use newton_raphson::NewtonRaphsonSolver;
