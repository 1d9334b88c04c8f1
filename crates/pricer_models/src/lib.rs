//! # Pricer Models (L2: Business Logic)
//!
//! CDS schedule generation and the single-name CDS contract/pricer, built
//! on the term-structure primitives in `pricer_core`.
//!
//! ## Design Principles
//!
//! - **Builder pattern** for schedule construction, matching `pricer_core`.
//! - Generic over `T: num_traits::Float`, not hard-wired to `f64`.

#![warn(missing_docs)]

pub mod instruments;
pub mod schedules;
