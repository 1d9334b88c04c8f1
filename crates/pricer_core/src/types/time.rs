//! Civil dates, day-count conventions, compounding bases, and business-day
//! adjustment for the CDS standard model.
//!
//! This module provides:
//! - `Date`: type-safe wrapper around `chrono::NaiveDate` with month/day
//!   arithmetic.
//! - `DayCountConvention`: `ACT_365F`, `ACT_360`, `THIRTY_360`, `ACT_ACT_ISDA`.
//! - `CompoundingBasis`: rate ↔ discount-factor conversion under continuous
//!   or periodic compounding.
//! - `BusinessDayConvention`: weekend-only date rolling.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{Date, DayCountConvention};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 7, 1).unwrap();
//!
//! let yf = DayCountConvention::Act365F.year_fraction_dates(start, end);
//! assert!((yf - 0.4986).abs() < 0.001);
//! ```

use chrono::{Datelike, Local, NaiveDate};
use num_traits::Float;
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around `chrono::NaiveDate`.
///
/// Provides ISO 8601 parsing/formatting and the month/day arithmetic the
/// schedule generator and curve bootstrapper need, without exposing chrono's
/// full surface.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns true if this date falls on a Saturday or Sunday.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 6, 15).unwrap().is_weekend()); // Saturday
    /// assert!(!Date::from_ymd(2024, 6, 17).unwrap().is_weekend()); // Monday
    /// ```
    pub fn is_weekend(&self) -> bool {
        matches!(
            self.0.weekday(),
            chrono::Weekday::Sat | chrono::Weekday::Sun
        )
    }

    /// Returns the date offset by the given number of calendar days.
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Returns the date obtained by stepping `n` months, clamping the
    /// day-of-month to the last valid day of the target month.
    ///
    /// `n` may be negative to step backward. This is the clamping variant
    /// of month arithmetic the schedule generator relies on (e.g. Jan 31 + 1
    /// month clamps to Feb 29/28, not an error).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let d = Date::from_ymd(2024, 1, 31).unwrap();
    /// assert_eq!(d.add_months(1), Date::from_ymd(2024, 2, 29).unwrap());
    /// assert_eq!(d.add_months(-1), Date::from_ymd(2023, 12, 31).unwrap());
    /// ```
    pub fn add_months(&self, n: i32) -> Self {
        let total_months = self.year() * 12 + (self.month() as i32 - 1) + n;
        let target_year = total_months.div_euclid(12);
        let target_month = (total_months.rem_euclid(12) + 1) as u32;
        let last_day = days_in_month(target_year, target_month);
        let target_day = self.day().min(last_day);
        Date(NaiveDate::from_ymd_opt(target_year, target_month, target_day).expect(
            "computed (year, month, day) is always a valid calendar date by construction",
        ))
    }
}

/// Returns the number of days in the given (proleptic Gregorian) month.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("next month of a valid month is always valid");
    let first_of_this =
        NaiveDate::from_ymd_opt(year, month, 1).expect("month 1-12 of any year is valid");
    (first_of_next - first_of_this).num_days() as u32
}

/// Returns true if `year` is a leap year in the proleptic Gregorian calendar.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates (positive if `self` is
    /// after `other`).
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day-count convention: maps a pair of dates to a year fraction.
///
/// # Variants
/// - `Act365F`: actual days / 365.
/// - `Act360`: actual days / 360.
/// - `Thirty360`: US/bond basis 30/360, with the `d1 == 31 -> 30` rule.
/// - `ActActIsda`: actual days, split at each calendar-year boundary, with
///   denominator 366 in a leap year and 365 otherwise.
///
/// All four satisfy `yf(d,d) = 0` and `yf(d1,d2) = -yf(d2,d1)`.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::{Date, DayCountConvention};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 7, 1).unwrap();
/// let yf = DayCountConvention::Act365F.year_fraction_dates(start, end);
/// assert!((yf - 182.0 / 365.0).abs() < 1e-10);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0.
    Act365F,
    /// Actual/360: actual_days / 360.0.
    Act360,
    /// 30/360 US Bond Basis, with end-of-month rules.
    Thirty360,
    /// Actual/Actual ISDA: split by calendar-year boundary, 366/365 per year.
    ActActIsda,
}

impl DayCountConvention {
    /// Returns the normative spec name (`ACT_365F`, `ACT_360`, `THIRTY_360`,
    /// `ACT_ACT_ISDA`).
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act365F => "ACT_365F",
            DayCountConvention::Act360 => "ACT_360",
            DayCountConvention::Thirty360 => "THIRTY_360",
            DayCountConvention::ActActIsda => "ACT_ACT_ISDA",
        }
    }

    /// Calculates the year fraction between two dates.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`. Use [`year_fraction_dates`](Self::year_fraction_dates)
    /// for a non-panicking, signed variant.
    pub fn year_fraction(&self, start: NaiveDate, end: NaiveDate) -> f64 {
        assert!(
            start <= end,
            "start date must be less than or equal to end date"
        );
        self.year_fraction_unsigned(start, end)
    }

    fn year_fraction_unsigned(&self, start: NaiveDate, end: NaiveDate) -> f64 {
        match self {
            DayCountConvention::Act365F => (end - start).num_days() as f64 / 365.0,
            DayCountConvention::Act360 => (end - start).num_days() as f64 / 360.0,
            DayCountConvention::Thirty360 => thirty_360_days(start, end) as f64 / 360.0,
            DayCountConvention::ActActIsda => act_act_isda(start, end),
        }
    }

    /// Calculates the year fraction using [`Date`], signed (negative if
    /// `start > end`, rather than panicking).
    pub fn year_fraction_dates(&self, start: Date, end: Date) -> f64 {
        if start <= end {
            self.year_fraction_unsigned(start.into_inner(), end.into_inner())
        } else {
            -self.year_fraction_unsigned(end.into_inner(), start.into_inner())
        }
    }
}

fn thirty_360_days(start: NaiveDate, end: NaiveDate) -> i32 {
    let (y1, m1, d1) = (start.year(), start.month() as i32, start.day());
    let (y2, m2, d2) = (end.year(), end.month() as i32, end.day());

    let d1_adj = if d1 == 31 { 30 } else { d1 };
    let d2_adj = if d2 == 31 && d1_adj == 30 { 30 } else { d2 };

    360 * (y2 - y1) + 30 * (m2 - m1) + (d2_adj as i32 - d1_adj as i32)
}

/// ACT/ACT ISDA: sum actual days in each calendar-year slice over its own
/// (leap-aware) denominator.
fn act_act_isda(start: NaiveDate, end: NaiveDate) -> f64 {
    if start == end {
        return 0.0;
    }
    let mut total = 0.0;
    let mut cursor = start;
    while cursor.year() < end.year() {
        let year_end = NaiveDate::from_ymd_opt(cursor.year() + 1, 1, 1)
            .expect("Jan 1 of any year is a valid date");
        let denom = if is_leap_year(cursor.year()) { 366.0 } else { 365.0 };
        total += (year_end - cursor).num_days() as f64 / denom;
        cursor = year_end;
    }
    let denom = if is_leap_year(cursor.year()) { 366.0 } else { 365.0 };
    total += (end - cursor).num_days() as f64 / denom;
    total
}

impl FromStr for DayCountConvention {
    type Err = String;

    /// Parses a day-count convention from string (case-insensitive), with a
    /// few common aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' ', '-'], "_").as_str() {
            "ACT_365F" | "ACTUAL_365" | "A365" => Ok(DayCountConvention::Act365F),
            "ACT_360" | "ACTUAL_360" | "A360" => Ok(DayCountConvention::Act360),
            "THIRTY_360" | "30_360" | "30360" => Ok(DayCountConvention::Thirty360),
            "ACT_ACT_ISDA" | "ACTACT" | "ACT_ACT" => Ok(DayCountConvention::ActActIsda),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DayCountConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCountConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCountConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCountConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}

/// Compounding basis: the mapping between a rate and a discount factor over
/// a given year fraction.
///
/// - `Continuous`: `DF = exp(-r*t)`; `r = -ln(DF)/t`.
/// - Periodic `m` (`Annual`=1, `SemiAnnual`=2, `Quarterly`=4, `Monthly`=12):
///   `DF = (1 + r/m)^(-m*t)`; `r = m*(DF^(-1/(m*t)) - 1)`.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::CompoundingBasis;
///
/// let df = CompoundingBasis::Continuous.rate_to_discount_factor(0.05_f64, 2.0);
/// assert!((df - (-0.10_f64).exp()).abs() < 1e-12);
///
/// let df = CompoundingBasis::Annual.rate_to_discount_factor(0.05_f64, 2.0);
/// assert!((df - 1.05_f64.powf(-2.0)).abs() < 1e-12);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompoundingBasis {
    /// Continuously compounded: `DF = exp(-r*t)`.
    Continuous,
    /// Compounded once per year.
    Annual,
    /// Compounded twice per year.
    SemiAnnual,
    /// Compounded four times per year.
    Quarterly,
    /// Compounded twelve times per year.
    Monthly,
}

impl CompoundingBasis {
    /// Returns the compounding frequency per year, or `None` for
    /// `Continuous`.
    pub fn periods_per_year(&self) -> Option<u32> {
        match self {
            CompoundingBasis::Continuous => None,
            CompoundingBasis::Annual => Some(1),
            CompoundingBasis::SemiAnnual => Some(2),
            CompoundingBasis::Quarterly => Some(4),
            CompoundingBasis::Monthly => Some(12),
        }
    }

    /// Converts a rate `r` at year fraction `t` to a discount factor.
    ///
    /// `t <= 0` returns `1` (present-value anchor), matching the curve
    /// contract's `discount_factor(base_date) = 1` invariant.
    pub fn rate_to_discount_factor<T: Float>(&self, r: T, t: T) -> T {
        if t <= T::zero() {
            return T::one();
        }
        match self.periods_per_year() {
            None => (-r * t).exp(),
            Some(m) => {
                let m = T::from(m).expect("compounding frequency fits in T");
                (T::one() + r / m).powf(-(m * t))
            }
        }
    }

    /// Converts a discount factor at year fraction `t` to a rate.
    ///
    /// Callers must ensure `t > 0` and `df > 0`; this is the inverse of
    /// [`rate_to_discount_factor`](Self::rate_to_discount_factor).
    pub fn discount_factor_to_rate<T: Float>(&self, df: T, t: T) -> T {
        match self.periods_per_year() {
            None => -df.ln() / t,
            Some(m) => {
                let m = T::from(m).expect("compounding frequency fits in T");
                m * (df.powf(-T::one() / (m * t)) - T::one())
            }
        }
    }
}

impl FromStr for CompoundingBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "continuous" => Ok(CompoundingBasis::Continuous),
            "annual" => Ok(CompoundingBasis::Annual),
            "semiannual" => Ok(CompoundingBasis::SemiAnnual),
            "quarterly" => Ok(CompoundingBasis::Quarterly),
            "monthly" => Ok(CompoundingBasis::Monthly),
            _ => Err(format!("Unknown compounding basis: {}", s)),
        }
    }
}

impl fmt::Display for CompoundingBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompoundingBasis::Continuous => "Continuous",
            CompoundingBasis::Annual => "Annual",
            CompoundingBasis::SemiAnnual => "SemiAnnual",
            CompoundingBasis::Quarterly => "Quarterly",
            CompoundingBasis::Monthly => "Monthly",
        };
        write!(f, "{}", name)
    }
}

/// Business-day convention: rolls a date onto a business day.
///
/// Weekend-only: there is no holiday calendar (see the original spec's
/// Non-goals).
///
/// # Variants
/// - `Unadjusted`: no adjustment (the spec's `None`).
/// - `Following`: roll forward to the next business day.
/// - `ModifiedFollowing`: roll forward unless that crosses a month
///   boundary, in which case roll backward instead.
/// - `Preceding`: roll backward to the previous business day.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::{Date, BusinessDayConvention};
///
/// // 2024-06-15 is a Saturday.
/// let sat = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(
///     BusinessDayConvention::Following.adjust(sat),
///     Date::from_ymd(2024, 6, 17).unwrap(),
/// );
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessDayConvention {
    /// No adjustment (the spec's `None`).
    Unadjusted,
    /// Roll forward to the next business day.
    Following,
    /// Roll forward unless that crosses a month boundary, then roll back.
    ModifiedFollowing,
    /// Roll backward to the previous business day.
    Preceding,
}

impl BusinessDayConvention {
    /// Returns the standard name for this convention.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            BusinessDayConvention::Unadjusted => "NONE",
            BusinessDayConvention::Following => "FOLLOW",
            BusinessDayConvention::ModifiedFollowing => "MODIFIED_FOLLOW",
            BusinessDayConvention::Preceding => "PRECEDING",
        }
    }

    /// Returns a short code for this convention.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            BusinessDayConvention::Unadjusted => "U",
            BusinessDayConvention::Following => "F",
            BusinessDayConvention::ModifiedFollowing => "MF",
            BusinessDayConvention::Preceding => "P",
        }
    }

    /// Rolls `date` onto a business day per this convention.
    ///
    /// Weekends only; Saturday/Sunday are the only non-business days.
    pub fn adjust(&self, date: Date) -> Date {
        match self {
            BusinessDayConvention::Unadjusted => date,
            BusinessDayConvention::Following => roll_forward(date),
            BusinessDayConvention::Preceding => roll_backward(date),
            BusinessDayConvention::ModifiedFollowing => {
                let forward = roll_forward(date);
                if forward.month() != date.month() || forward.year() != date.year() {
                    roll_backward(date)
                } else {
                    forward
                }
            }
        }
    }
}

fn roll_forward(date: Date) -> Date {
    let mut d = date;
    while d.is_weekend() {
        d = d.add_days(1);
    }
    d
}

fn roll_backward(date: Date) -> Date {
    let mut d = date;
    while d.is_weekend() {
        d = d.add_days(-1);
    }
    d
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BusinessDayConvention {
    type Err = String;

    /// Parses a business-day convention from string (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "NONE" | "UNADJUSTED" | "U" => Ok(BusinessDayConvention::Unadjusted),
            "FOLLOW" | "FOLLOWING" | "F" => Ok(BusinessDayConvention::Following),
            "MODIFIEDFOLLOW" | "MODIFIEDFOLLOWING" | "MF" => {
                Ok(BusinessDayConvention::ModifiedFollowing)
            }
            "PRECEDING" | "P" => Ok(BusinessDayConvention::Preceding),
            _ => Err(format!("Unknown business day convention: {}", s)),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_bdc_impl {
    use super::BusinessDayConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for BusinessDayConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for BusinessDayConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            BusinessDayConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}

/// Interpolation method for term-structure curves.
///
/// - `Linear`: linear on zero rates between knots.
/// - `FlatForward`: piecewise-constant instantaneous forward between knots.
/// - `LinearForward`: instantaneous forward linear between knots.
///
/// All three extrapolate flat beyond the first/last knot.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationMethod {
    /// Linear interpolation on zero rates.
    Linear,
    /// Piecewise-constant instantaneous forward between knots.
    FlatForward,
    /// Instantaneous forward linear between knots.
    LinearForward,
}

impl InterpolationMethod {
    /// Returns the normative spec name.
    pub fn name(&self) -> &'static str {
        match self {
            InterpolationMethod::Linear => "Linear",
            InterpolationMethod::FlatForward => "FlatForward",
            InterpolationMethod::LinearForward => "LinearForward",
        }
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for InterpolationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "linear" => Ok(InterpolationMethod::Linear),
            "flatforward" => Ok(InterpolationMethod::FlatForward),
            "linearforward" => Ok(InterpolationMethod::LinearForward),
            _ => Err(format!("Unknown interpolation method: {}", s)),
        }
    }
}

/// Calculates time to maturity using the default convention (Act/365F).
///
/// # Panics
///
/// Panics if `start > end`.
pub fn time_to_maturity(start: NaiveDate, end: NaiveDate) -> f64 {
    DayCountConvention::Act365F.year_fraction(start, end)
}

/// Calculates time to maturity ([`Date`], Act/365F), signed (negative if
/// `start > end`).
pub fn time_to_maturity_dates(start: Date, end: Date) -> f64 {
    DayCountConvention::Act365F.year_fraction_dates(start, end)
}
