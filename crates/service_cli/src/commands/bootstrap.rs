//! `bootstrap` command: benchmark CDS tenors/spreads in, survival curve out.

use serde::{Deserialize, Serialize};
use tracing::info;

use pricer_core::market_data::curves::CreditCurve;
use pricer_core::types::time::Date;
use pricer_optimiser::bootstrapping::{CdsBenchmark, CdsBootstrapInput, SequentialBootstrapper};

use crate::config::{build_curve, read_toml, CurvePointInput, RawConventions};
use crate::error::{CliError, Result};

#[derive(Debug, Deserialize)]
struct BenchmarkInput {
    tenor_years: f64,
    par_spread: f64,
}

#[derive(Debug, Deserialize)]
struct BootstrapInputFile {
    valuation_date: String,
    conventions: RawConventions,
    discount_curve: Vec<CurvePointInput>,
    benchmarks: Vec<BenchmarkInput>,
}

#[derive(Debug, Serialize)]
struct TenorResult {
    maturity: String,
    hazard_rate: f64,
    residual: f64,
}

#[derive(Debug, Serialize)]
struct CurvePillar {
    date: String,
    cumulative_hazard_rate: f64,
}

#[derive(Debug, Serialize)]
struct BootstrapReport {
    valuation_date: String,
    tenors: Vec<TenorResult>,
    survival_curve: Vec<CurvePillar>,
}

/// Runs the `bootstrap` subcommand: reads `input`, bootstraps a survival
/// curve, and writes it to `output` (or stdout) in `format` (`toml` or
/// `json`).
pub fn run(input: &str, output: Option<&str>, format: &str) -> Result<()> {
    info!("Bootstrapping credit curve from {}", input);
    let parsed: BootstrapInputFile = read_toml(input)?;

    let valuation_date: Date = parsed
        .valuation_date
        .parse()
        .map_err(|e| CliError::InvalidArgument(format!("bad valuation_date: {}", e)))?;
    let conventions = parsed.conventions.parse()?;
    let discount_curve = build_curve(
        valuation_date,
        &parsed.discount_curve,
        conventions.day_count_convention,
    )?;

    let benchmarks: Vec<CdsBenchmark<f64>> = parsed
        .benchmarks
        .iter()
        .map(|b| CdsBenchmark::new(b.tenor_years, b.par_spread))
        .collect();
    if benchmarks.is_empty() {
        return Err(CliError::InvalidArgument(
            "at least one benchmark is required".to_string(),
        ));
    }

    let bootstrap_input = CdsBootstrapInput::new(
        conventions.payment_frequency,
        conventions.day_count_convention,
        conventions.business_day_convention,
        conventions.recovery_rate,
        conventions.notional,
        conventions.include_accrued_premium,
    );

    info!("Bootstrapping {} benchmark tenors", benchmarks.len());
    let bootstrapper = SequentialBootstrapper::with_defaults();
    let (survival, results) =
        bootstrapper.bootstrap(valuation_date, &discount_curve, &benchmarks, &bootstrap_input)?;

    let report = BootstrapReport {
        valuation_date: valuation_date.to_string(),
        tenors: results
            .iter()
            .map(|r| TenorResult {
                maturity: r.maturity.to_string(),
                hazard_rate: r.hazard_rate,
                residual: r.residual,
            })
            .collect(),
        survival_curve: survival
            .dates()
            .iter()
            .map(|d| CurvePillar {
                date: d.to_string(),
                cumulative_hazard_rate: survival
                    .hazard_rate(*d, conventions.interpolation)
                    .unwrap_or(f64::NAN),
            })
            .collect(),
    };

    let rendered = render(&report, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!("Wrote bootstrap report to {}", path);
        }
        None => println!("{}", rendered),
    }

    info!("Bootstrap complete");
    Ok(())
}

fn render(report: &BootstrapReport, format: &str) -> Result<String> {
    match format {
        "toml" => Ok(toml::to_string_pretty(report)?),
        "json" => Ok(serde_json::to_string_pretty(report)?),
        other => Err(CliError::InvalidArgument(format!(
            "unknown output format: {}. Supported: toml, json",
            other
        ))),
    }
}
