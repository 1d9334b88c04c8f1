//! Schedule and ScheduleBuilder implementation.

use super::error::ScheduleError;
use super::frequency::Frequency;
use super::period::Period;
use pricer_core::types::time::{BusinessDayConvention, Date, DayCountConvention};

/// A collection of accrual periods for a CDS premium leg.
///
/// Periods are generated backward from the schedule's `end` (the CDS
/// `maturity_date`) at `12/frequency` month steps; the first period absorbs
/// any front stub. A schedule built from `effective_date >= maturity_date`
/// is empty (see [`ScheduleBuilder::build`]).
///
/// # Examples
///
/// ```
/// use pricer_models::schedules::{Schedule, ScheduleBuilder, Frequency};
/// use pricer_core::types::time::{Date, DayCountConvention, BusinessDayConvention};
///
/// let schedule = ScheduleBuilder::new()
///     .start(Date::from_ymd(2024, 1, 15).unwrap())
///     .end(Date::from_ymd(2026, 1, 15).unwrap())
///     .frequency(Frequency::SemiAnnual)
///     .day_count(DayCountConvention::Act360)
///     .business_day_convention(BusinessDayConvention::ModifiedFollowing)
///     .build()
///     .unwrap();
///
/// assert_eq!(schedule.periods().len(), 4); // 4 semi-annual periods over 2 years
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    /// All periods in the schedule, in chronological order.
    periods: Vec<Period>,
    /// Payment dates (derived from periods).
    payment_dates: Vec<Date>,
    /// Accrual start dates for each period.
    accrual_start: Vec<Date>,
    /// Accrual end dates for each period.
    accrual_end: Vec<Date>,
}

impl Schedule {
    /// Creates a schedule from an already-generated list of periods.
    ///
    /// An empty `periods` vector is accepted: it represents a zero-length
    /// or negative-length contract with zero legs.
    pub fn new(periods: Vec<Period>) -> Self {
        let payment_dates: Vec<Date> = periods.iter().map(|p| p.payment()).collect();
        let accrual_start: Vec<Date> = periods.iter().map(|p| p.start()).collect();
        let accrual_end: Vec<Date> = periods.iter().map(|p| p.end()).collect();

        Self {
            periods,
            payment_dates,
            accrual_start,
            accrual_end,
        }
    }

    /// Returns the periods in the schedule.
    #[inline]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Returns the payment dates.
    #[inline]
    pub fn payment_dates(&self) -> &[Date] {
        &self.payment_dates
    }

    /// Returns the accrual start dates.
    #[inline]
    pub fn accrual_start_dates(&self) -> &[Date] {
        &self.accrual_start
    }

    /// Returns the accrual end dates.
    #[inline]
    pub fn accrual_end_dates(&self) -> &[Date] {
        &self.accrual_end
    }

    /// Returns the number of periods.
    #[inline]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns whether the schedule has no periods.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Returns the start date of the schedule, if any periods exist.
    #[inline]
    pub fn start_date(&self) -> Option<Date> {
        self.periods.first().map(|p| p.start())
    }

    /// Returns the end date of the schedule, if any periods exist.
    #[inline]
    pub fn end_date(&self) -> Option<Date> {
        self.periods.last().map(|p| p.end())
    }

    /// Returns the first payment date, if any periods exist.
    #[inline]
    pub fn first_payment_date(&self) -> Option<Date> {
        self.payment_dates.first().copied()
    }

    /// Returns the last payment date, if any periods exist.
    #[inline]
    pub fn last_payment_date(&self) -> Option<Date> {
        self.payment_dates.last().copied()
    }

    /// Returns an iterator over the periods.
    pub fn iter(&self) -> impl Iterator<Item = &Period> {
        self.periods.iter()
    }

    /// Calculates the total year fraction of all periods.
    pub fn total_year_fraction(&self) -> f64 {
        self.periods.iter().map(|p| p.year_fraction()).sum()
    }

    /// Returns the period containing the given date, if any.
    pub fn period_containing(&self, date: Date) -> Option<&Period> {
        self.periods.iter().find(|p| p.contains(date))
    }

    /// Returns the index of the period containing the given date, if any.
    pub fn period_index_containing(&self, date: Date) -> Option<usize> {
        self.periods.iter().position(|p| p.contains(date))
    }
}

/// Builder for constructing a CDS premium accrual schedule.
///
/// # Examples
///
/// ```
/// use pricer_models::schedules::{ScheduleBuilder, Frequency};
/// use pricer_core::types::time::Date;
///
/// let schedule = ScheduleBuilder::new()
///     .start(Date::from_ymd(2024, 1, 15).unwrap())
///     .end(Date::from_ymd(2026, 1, 15).unwrap())
///     .frequency(Frequency::Quarterly)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    effective_date: Option<Date>,
    maturity_date: Option<Date>,
    frequency: Option<Frequency>,
    day_count: DayCountConvention,
    business_day_convention: BusinessDayConvention,
}

impl Default for ScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleBuilder {
    /// Creates a new schedule builder with default settings.
    ///
    /// Default day count convention is `Act365F`; default business-day
    /// convention is `ModifiedFollowing`.
    pub fn new() -> Self {
        Self {
            effective_date: None,
            maturity_date: None,
            frequency: None,
            day_count: DayCountConvention::Act365F,
            business_day_convention: BusinessDayConvention::ModifiedFollowing,
        }
    }

    /// Sets the effective date (accrual start of the first period).
    pub fn start(mut self, date: Date) -> Self {
        self.effective_date = Some(date);
        self
    }

    /// Sets the maturity date (accrual end of the last period).
    pub fn end(mut self, date: Date) -> Self {
        self.maturity_date = Some(date);
        self
    }

    /// Sets the payment frequency.
    pub fn frequency(mut self, freq: Frequency) -> Self {
        self.frequency = Some(freq);
        self
    }

    /// Sets the day count convention used for accrual.
    pub fn day_count(mut self, dc: DayCountConvention) -> Self {
        self.day_count = dc;
        self
    }

    /// Sets the business-day convention used to adjust pay dates.
    pub fn business_day_convention(mut self, bdc: BusinessDayConvention) -> Self {
        self.business_day_convention = bdc;
        self
    }

    /// Builds the schedule.
    ///
    /// Returns an empty schedule if `effective_date >= maturity_date`,
    /// rather than an error, per the zero/negative-length-contract edge
    /// case.
    ///
    /// # Errors
    ///
    /// Returns an error if the effective date, maturity date, or frequency
    /// is missing, or if a date overflows during generation.
    pub fn build(self) -> Result<Schedule, ScheduleError> {
        let effective = self
            .effective_date
            .ok_or(ScheduleError::MissingField { field: "start" })?;
        let maturity = self
            .maturity_date
            .ok_or(ScheduleError::MissingField { field: "end" })?;
        let frequency = self
            .frequency
            .ok_or(ScheduleError::MissingField { field: "frequency" })?;

        let periods = self.generate_periods(effective, maturity, frequency)?;
        Ok(Schedule::new(periods))
    }

    /// Generates accrual periods backward from `maturity` at
    /// `12/frequency` month steps, stopping once the previous period end
    /// would fall at or before `effective`. The first period absorbs the
    /// front stub by starting exactly at `effective`.
    fn generate_periods(
        &self,
        effective: Date,
        maturity: Date,
        frequency: Frequency,
    ) -> Result<Vec<Period>, ScheduleError> {
        if effective >= maturity {
            return Ok(Vec::new());
        }

        let step = frequency.months_between_payments() as i32;
        let mut ends: Vec<Date> = vec![maturity];
        loop {
            let prev = ends[0].add_months(-step);
            if prev <= effective {
                break;
            }
            ends.insert(0, prev);
        }

        let mut periods = Vec::with_capacity(ends.len());
        let mut start = effective;
        for end in ends {
            let payment = self.business_day_convention.adjust(end);
            periods.push(Period::new(start, end, payment, self.day_count));
            start = end;
        }

        Ok(periods)
    }
}
