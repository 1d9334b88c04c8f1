//! Integration tests exercising `pricer_core`'s public API surface as a
//! downstream crate would see it.

use pricer_core::market_data::curves::{CreditCurve, Curve, YieldCurve};
use pricer_core::math::solvers::{BrentSolver, NewtonRaphsonSolver, SolverConfig};
use pricer_core::types::error::{CoreError, DateError, InterpolationError, SolverError};
use pricer_core::{
    BusinessDayConvention, CompoundingBasis, Date, DayCountConvention, InterpolationMethod,
};

#[test]
fn date_construction_and_arithmetic() {
    let d = Date::from_ymd(2024, 3, 15).unwrap();
    assert_eq!(d.add_days(1), Date::from_ymd(2024, 3, 16).unwrap());
    assert_eq!(d.add_months(1), Date::from_ymd(2024, 4, 15).unwrap());
    assert!(Date::from_ymd(2024, 2, 30).is_err());
}

#[test]
fn day_count_conventions_are_reexported() {
    let start = Date::from_ymd(2024, 1, 1).unwrap();
    let end = Date::from_ymd(2025, 1, 1).unwrap();
    for dcc in [
        DayCountConvention::Act365F,
        DayCountConvention::Act360,
        DayCountConvention::Thirty360,
        DayCountConvention::ActActIsda,
    ] {
        let yf = dcc.year_fraction_dates(start, end);
        assert!(yf > 0.9 && yf < 1.1, "{dcc:?}: {yf}");
    }
}

#[test]
fn business_day_convention_weekend_roll() {
    // 2024-06-15 is a Saturday.
    let sat = Date::from_ymd(2024, 6, 15).unwrap();
    assert_eq!(
        BusinessDayConvention::Following.adjust(sat),
        Date::from_ymd(2024, 6, 17).unwrap()
    );
    assert_eq!(
        BusinessDayConvention::Preceding.adjust(sat),
        Date::from_ymd(2024, 6, 14).unwrap()
    );
    assert_eq!(BusinessDayConvention::Unadjusted.adjust(sat), sat);
}

#[test]
fn compounding_basis_round_trips() {
    let r = 0.042_f64;
    let t = 3.25_f64;
    for basis in [
        CompoundingBasis::Continuous,
        CompoundingBasis::Annual,
        CompoundingBasis::SemiAnnual,
        CompoundingBasis::Quarterly,
        CompoundingBasis::Monthly,
    ] {
        let df = basis.rate_to_discount_factor(r, t);
        let r_back = basis.discount_factor_to_rate(df, t);
        assert!((r - r_back).abs() < 1e-10, "{basis:?}: {r} vs {r_back}");
    }
}

#[test]
fn curve_as_yield_curve() {
    let base = Date::from_ymd(2024, 1, 1).unwrap();
    let curve = Curve::new(
        base,
        vec![
            (Date::from_ymd(2025, 1, 1).unwrap(), 0.03_f64),
            (Date::from_ymd(2029, 1, 1).unwrap(), 0.045),
        ],
        DayCountConvention::Act365F,
        CompoundingBasis::Continuous,
    )
    .unwrap();

    let target = Date::from_ymd(2027, 1, 1).unwrap();
    let df = curve
        .discount_factor(target, InterpolationMethod::FlatForward)
        .unwrap();
    assert!(df > 0.0 && df < 1.0);

    let zero = curve
        .zero_rate(target, InterpolationMethod::FlatForward)
        .unwrap();
    assert!(zero > 0.03 && zero < 0.045);
}

#[test]
fn curve_as_credit_curve() {
    let base = Date::from_ymd(2024, 1, 1).unwrap();
    let curve = Curve::new(
        base,
        vec![(Date::from_ymd(2029, 1, 1).unwrap(), 0.02_f64)],
        DayCountConvention::Act365F,
        CompoundingBasis::Continuous,
    )
    .unwrap();

    let target = Date::from_ymd(2026, 1, 1).unwrap();
    let survival = curve
        .survival_probability(target, InterpolationMethod::Linear)
        .unwrap();
    let default_prob = curve
        .default_probability(target, InterpolationMethod::Linear)
        .unwrap();
    assert!((survival + default_prob - 1.0).abs() < 1e-12);
}

#[test]
fn solvers_are_reexported_and_agree() {
    let newton = NewtonRaphsonSolver::new(SolverConfig::default());
    let brent = BrentSolver::new(SolverConfig::default());

    let f = |x: f64| x * x - 2.0;
    let f_prime = |x: f64| 2.0 * x;

    let root_newton = newton.find_root(f, f_prime, 1.0).unwrap();
    let root_brent = brent.find_root(f, 0.0, 2.0).unwrap();
    assert!((root_newton - root_brent).abs() < 1e-8);
}

#[test]
fn error_taxonomy_composes_via_from() {
    let date_err = DateError::InvalidDate {
        year: 2024,
        month: 13,
        day: 1,
    };
    let core_err: CoreError = date_err.into();
    assert!(matches!(core_err, CoreError::InvalidInput(_)));

    let solver_err = SolverError::MaxIterationsExceeded { iterations: 10 };
    let core_err: CoreError = solver_err.into();
    assert!(matches!(core_err, CoreError::NumericalError(_)));

    let interp_err = InterpolationError::OutOfBounds {
        x: 1.0,
        min: 0.0,
        max: 0.5,
    };
    let core_err: CoreError = interp_err.into();
    assert!(matches!(core_err, CoreError::OutOfRange(_)));
}
