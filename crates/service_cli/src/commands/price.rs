//! `price` command: a CDS contract and two curves in, `CdsPriceResult` out.

use serde::{Deserialize, Serialize};
use tracing::info;

use pricer_core::types::time::Date;
use pricer_models::instruments::credit::CdsContract;

use crate::config::{build_curve, read_toml, CurvePointInput, RawConventions};
use crate::error::{CliError, Result};

#[derive(Debug, Deserialize)]
struct ContractInput {
    trade_date: String,
    effective_date: String,
    maturity_date: String,
    value_date: String,
    settlement_date: String,
    step_in_date: String,
    coupon_rate: f64,
    is_buy_protection: bool,
}

#[derive(Debug, Deserialize)]
struct PriceInputFile {
    conventions: RawConventions,
    contract: ContractInput,
    discount_curve: Vec<CurvePointInput>,
    survival_curve: Vec<CurvePointInput>,
}

#[derive(Debug, Serialize)]
struct PriceReport {
    mark_to_market: f64,
    par_spread: f64,
    premium_leg_pv: f64,
    protection_leg_pv: f64,
    accrued_premium_pv: f64,
    upfront_charge: f64,
}

fn parse_date(label: &str, value: &str) -> Result<Date> {
    value
        .parse()
        .map_err(|e| CliError::InvalidArgument(format!("bad {}: {}", label, e)))
}

/// Runs the `price` subcommand: reads `input`, prices the contract against
/// the two curves, and prints the result in `format` (`table` or `json`).
pub fn run(input: &str, format: &str) -> Result<()> {
    info!("Pricing CDS contract from {}", input);
    let parsed: PriceInputFile = read_toml(input)?;
    let conventions = parsed.conventions.parse()?;

    let trade_date = parse_date("trade_date", &parsed.contract.trade_date)?;
    let effective_date = parse_date("effective_date", &parsed.contract.effective_date)?;
    let maturity_date = parse_date("maturity_date", &parsed.contract.maturity_date)?;
    let value_date = parse_date("value_date", &parsed.contract.value_date)?;
    let settlement_date = parse_date("settlement_date", &parsed.contract.settlement_date)?;
    let step_in_date = parse_date("step_in_date", &parsed.contract.step_in_date)?;

    let discount_curve = build_curve(
        value_date,
        &parsed.discount_curve,
        conventions.day_count_convention,
    )?;
    let survival_curve = build_curve(
        value_date,
        &parsed.survival_curve,
        conventions.day_count_convention,
    )?;

    let contract = CdsContract::new(
        trade_date,
        effective_date,
        maturity_date,
        value_date,
        settlement_date,
        step_in_date,
        conventions.payment_frequency,
        conventions.day_count_convention,
        conventions.business_day_convention,
        parsed.contract.coupon_rate,
        conventions.notional,
        conventions.recovery_rate,
        conventions.include_accrued_premium,
        parsed.contract.is_buy_protection,
    )?;

    let pricer = pricer_models::instruments::credit::CdsPricer::new(
        &contract,
        &discount_curve,
        &survival_curve,
        conventions.interpolation,
    );
    let result = pricer.price()?;

    let report = PriceReport {
        mark_to_market: result.mark_to_market,
        par_spread: result.par_spread,
        premium_leg_pv: result.premium_leg_pv,
        protection_leg_pv: result.protection_leg_pv,
        accrued_premium_pv: result.accrued_premium_pv,
        upfront_charge: result.upfront_charge,
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "table" => {
            println!("┌────────────────────────┬──────────────────┐");
            println!("│ {:<22} │ {:>16.2} │", "Mark-to-market", report.mark_to_market);
            println!("│ {:<22} │ {:>16.6} │", "Par spread", report.par_spread);
            println!("│ {:<22} │ {:>16.2} │", "Premium leg PV", report.premium_leg_pv);
            println!("│ {:<22} │ {:>16.2} │", "Protection leg PV", report.protection_leg_pv);
            println!("│ {:<22} │ {:>16.2} │", "Accrued-on-default PV", report.accrued_premium_pv);
            println!("│ {:<22} │ {:>16.2} │", "Upfront charge", report.upfront_charge);
            println!("└────────────────────────┴──────────────────┘");
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "unknown output format: {}. Supported: table, json",
                other
            )))
        }
    }

    info!("Pricing complete");
    Ok(())
}
