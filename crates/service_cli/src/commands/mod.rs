//! CLI command implementations.
//!
//! Each submodule implements a single subcommand: read an input file,
//! invoke the pure core, print or write the result.

pub mod bootstrap;
pub mod price;
