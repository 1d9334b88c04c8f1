//! CLI-level error type.
//!
//! Wraps every failure mode reachable from the command line: bad input
//! files, malformed conventions, and errors surfaced from the core,
//! models, and optimiser crates.

use pricer_core::market_data::MarketDataError;
use pricer_models::instruments::credit::{CdsError, PricingError};
use pricer_optimiser::bootstrapping::BootstrapError;
use thiserror::Error;

/// Errors that can occur while running a CLI command.
#[derive(Error, Debug)]
pub enum CliError {
    /// An input file referenced on the command line does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// An argument or config value was structurally invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A convention string (day-count, business-day rule, ...) did not
    /// parse.
    #[error("invalid convention: {0}")]
    InvalidConvention(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML input file was malformed.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Serialising a result to TOML failed.
    #[error("TOML serialisation error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Serialising a result to JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The synthetic or input CDS contract failed validation.
    #[error("contract error: {0}")]
    Contract(#[from] CdsError),

    /// Pricing the contract failed.
    #[error("pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// A curve lookup or construction failed.
    #[error("market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// The credit-curve bootstrap failed.
    #[error("bootstrap error: {0}")]
    Bootstrap(#[from] BootstrapError),
}

/// Convenience alias for CLI command results.
pub type Result<T> = std::result::Result<T, CliError>;
