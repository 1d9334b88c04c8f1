//! Credit derivative instruments.
//!
//! This module provides the single-name CDS contract ([`CdsContract`]) and
//! its pricer ([`CdsPricer`], [`CdsPriceResult`]).

mod cds;
mod pricing;

pub use cds::{CdsContract, CdsError};
pub use pricing::{CdsPriceResult, CdsPricer, PricingError};
