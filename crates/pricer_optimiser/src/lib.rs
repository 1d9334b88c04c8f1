//! # pricer_optimiser
//!
//! Credit-curve bootstrapping for the CDS Standard Model.
//!
//! This crate sits between Models (L2) and the CLI adapter, solving the
//! inverse problem of turning a strip of benchmark CDS quotes into a
//! survival curve.
//!
//! ## Architecture Position
//!
//! Layer 2.5 in the A-I-P-S architecture. Depends on `pricer_core` (L1)
//! and `pricer_models` (L2).
//!
//! ## Modules
//!
//! - `bootstrapping`: sequential hazard-rate stripping from benchmark CDS
//!   tenors and spreads.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pricer_optimiser::bootstrapping::{CdsBenchmark, CdsBootstrapInput, SequentialBootstrapper};
//!
//! let bootstrapper = SequentialBootstrapper::with_defaults();
//! let (survival_curve, _) = bootstrapper.bootstrap(
//!     valuation_date, &discount_curve, &benchmarks, &input,
//! )?;
//! ```

pub mod bootstrapping;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrapping::*;
}
