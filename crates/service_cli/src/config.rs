//! Convention and curve-input file parsing.
//!
//! The CLI's only I/O: reading a TOML file describing day-count,
//! business-day, and payment conventions, plus the pillar points of one or
//! two `Curve`s. Conventions are read as plain strings and parsed through
//! each type's `FromStr`, the same boundary the teacher's own enums expose.

use std::path::Path;

use pricer_core::market_data::curves::Curve;
use pricer_core::types::time::{
    BusinessDayConvention, CompoundingBasis, Date, DayCountConvention, InterpolationMethod,
};
use pricer_models::schedules::Frequency;
use serde::Deserialize;

use crate::error::{CliError, Result};

/// A single curve pillar as it appears in an input file: an ISO date and
/// a cumulative (zero-style) rate.
#[derive(Debug, Clone, Deserialize)]
pub struct CurvePointInput {
    /// Pillar date, `YYYY-MM-DD`.
    pub date: String,
    /// Cumulative rate anchored at the curve's base date.
    pub rate: f64,
}

impl CurvePointInput {
    fn parsed(&self) -> Result<(Date, f64)> {
        let date = self
            .date
            .parse::<Date>()
            .map_err(|e| CliError::InvalidArgument(format!("bad pillar date {}: {}", self.date, e)))?;
        Ok((date, self.rate))
    }
}

/// Builds a [`Curve<f64>`] from a list of input pillars.
pub fn build_curve(
    base_date: Date,
    points: &[CurvePointInput],
    day_count_convention: DayCountConvention,
) -> Result<Curve<f64>> {
    let parsed = points
        .iter()
        .map(CurvePointInput::parsed)
        .collect::<Result<Vec<_>>>()?;
    Ok(Curve::new(
        base_date,
        parsed,
        day_count_convention,
        CompoundingBasis::Continuous,
    )?)
}

/// Shared conventions for a CDS contract or benchmark strip, as read from
/// the conventions section of an input file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConventions {
    /// Day-count convention name, e.g. `"Act360"`.
    pub day_count_convention: String,
    /// Business-day convention name, e.g. `"ModifiedFollowing"`.
    pub business_day_convention: String,
    /// Payment frequency name, e.g. `"Quarterly"`.
    pub payment_frequency: String,
    /// Interpolation method name, e.g. `"FlatForward"`.
    pub interpolation: String,
    /// Assumed recovery rate.
    pub recovery_rate: f64,
    /// Contract notional.
    pub notional: f64,
    /// Whether accrued premium on default is included.
    pub include_accrued_premium: bool,
}

/// Parsed, strongly-typed conventions.
#[derive(Debug, Clone, Copy)]
pub struct Conventions {
    /// Day-count convention.
    pub day_count_convention: DayCountConvention,
    /// Business-day convention.
    pub business_day_convention: BusinessDayConvention,
    /// Payment frequency.
    pub payment_frequency: Frequency,
    /// Interpolation method.
    pub interpolation: InterpolationMethod,
    /// Assumed recovery rate.
    pub recovery_rate: f64,
    /// Contract notional.
    pub notional: f64,
    /// Whether accrued premium on default is included.
    pub include_accrued_premium: bool,
}

impl RawConventions {
    /// Parses every string field through its `FromStr` implementation.
    pub fn parse(&self) -> Result<Conventions> {
        Ok(Conventions {
            day_count_convention: self
                .day_count_convention
                .parse()
                .map_err(|_| CliError::InvalidConvention(self.day_count_convention.clone()))?,
            business_day_convention: self
                .business_day_convention
                .parse()
                .map_err(|_| CliError::InvalidConvention(self.business_day_convention.clone()))?,
            payment_frequency: self
                .payment_frequency
                .parse()
                .map_err(|_| CliError::InvalidConvention(self.payment_frequency.clone()))?,
            interpolation: self
                .interpolation
                .parse()
                .map_err(|_| CliError::InvalidConvention(self.interpolation.clone()))?,
            recovery_rate: self.recovery_rate,
            notional: self.notional,
            include_accrued_premium: self.include_accrued_premium,
        })
    }
}

/// Reads and parses a TOML file at `path`, failing with
/// [`CliError::FileNotFound`] if it does not exist.
pub fn read_toml<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T> {
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_conventions_parse() {
        let raw = RawConventions {
            day_count_convention: "Act360".to_string(),
            business_day_convention: "ModifiedFollowing".to_string(),
            payment_frequency: "Quarterly".to_string(),
            interpolation: "FlatForward".to_string(),
            recovery_rate: 0.4,
            notional: 1.0e7,
            include_accrued_premium: true,
        };
        let parsed = raw.parse().unwrap();
        assert_eq!(parsed.day_count_convention, DayCountConvention::Act360);
        assert_eq!(parsed.payment_frequency, Frequency::Quarterly);
    }

    #[test]
    fn test_raw_conventions_rejects_unknown() {
        let raw = RawConventions {
            day_count_convention: "Act999".to_string(),
            business_day_convention: "ModifiedFollowing".to_string(),
            payment_frequency: "Quarterly".to_string(),
            interpolation: "FlatForward".to_string(),
            recovery_rate: 0.4,
            notional: 1.0e7,
            include_accrued_premium: true,
        };
        assert!(matches!(raw.parse(), Err(CliError::InvalidConvention(_))));
    }

    #[test]
    fn test_build_curve_from_points() {
        let base = Date::from_ymd(2025, 5, 5).unwrap();
        let points = vec![CurvePointInput {
            date: "2030-05-05".to_string(),
            rate: 0.03,
        }];
        let curve = build_curve(base, &points, DayCountConvention::Act365F).unwrap();
        assert_eq!(curve.dates().len(), 1);
    }

    #[test]
    fn test_read_toml_missing_file() {
        let result: Result<RawConventions> = read_toml("/nonexistent/path/conventions.toml");
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }
}
