//! Credit-curve bootstrapping from benchmark CDS tenors and spreads.
//!
//! This module implements the sequential hazard-rate stripping described
//! by the CDS Standard Model: given a discount curve and a strip of
//! benchmark CDS (tenor, par spread) quotes, it constructs a survival
//! curve one knot at a time, each knot's hazard rate solved so that its
//! benchmark reprices to par.
//!
//! ## Architecture
//!
//! - [`CdsBenchmark`]: a single (tenor, par spread) market quote.
//! - [`CdsBootstrapInput`]: the coupon conventions shared by every
//!   benchmark (frequency, day-count, business-day convention, recovery).
//! - [`SequentialBootstrapper`]: the bootstrapping engine.
//! - [`GenericBootstrapConfig`]: convergence tolerances and interpolation.

mod config;
mod engine;
mod error;
mod instrument;

pub use config::{GenericBootstrapConfig, GenericBootstrapConfigBuilder};
pub use engine::{GenericBootstrapResult, SequentialBootstrapper};
pub use error::BootstrapError;
pub use instrument::{CdsBenchmark, CdsBootstrapInput};
