//! Single-name CDS contract definition.

use crate::schedules::{Frequency, Schedule, ScheduleBuilder, ScheduleError};
use num_traits::Float;
use pricer_core::types::time::{BusinessDayConvention, Date, DayCountConvention};
use thiserror::Error;

/// Errors raised when constructing or validating a [`CdsContract`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CdsError {
    /// `effective_date` must not be after `maturity_date`.
    #[error("effective date {effective} is after maturity date {maturity}")]
    EffectiveAfterMaturity {
        /// The effective date.
        effective: Date,
        /// The maturity date.
        maturity: Date,
    },

    /// `recovery_rate` must lie in `[0, 1)`.
    #[error("recovery rate {recovery} is outside [0, 1)")]
    InvalidRecoveryRate {
        /// The offending recovery rate.
        recovery: f64,
    },

    /// `notional` must be strictly positive.
    #[error("notional {notional} must be positive")]
    InvalidNotional {
        /// The offending notional.
        notional: f64,
    },

    /// The accrual/premium schedule could not be generated.
    #[error("schedule generation failed: {0}")]
    Schedule(#[from] ScheduleError),
}

/// A single-name CDS contract, per the standard ISDA data model.
///
/// Dates, coupon conventions, notional and recovery are all immutable
/// inputs; nothing on this type is mutated after construction.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::credit::CdsContract;
/// use pricer_models::schedules::Frequency;
/// use pricer_core::types::time::{Date, DayCountConvention, BusinessDayConvention};
///
/// let contract = CdsContract::new(
///     Date::from_ymd(2025, 5, 4).unwrap(),
///     Date::from_ymd(2025, 5, 5).unwrap(),
///     Date::from_ymd(2030, 5, 5).unwrap(),
///     Date::from_ymd(2025, 5, 5).unwrap(),
///     Date::from_ymd(2025, 5, 8).unwrap(),
///     Date::from_ymd(2025, 5, 5).unwrap(),
///     Frequency::Quarterly,
///     DayCountConvention::Act360,
///     BusinessDayConvention::ModifiedFollowing,
///     0.01,
///     1.0e7,
///     0.4,
///     true,
///     true,
/// )
/// .unwrap();
///
/// assert!(contract.effective_date() <= contract.maturity_date());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CdsContract<T: Float> {
    trade_date: Date,
    effective_date: Date,
    maturity_date: Date,
    value_date: Date,
    settlement_date: Date,
    step_in_date: Date,
    payment_frequency: Frequency,
    day_count_convention: DayCountConvention,
    business_day_convention: BusinessDayConvention,
    coupon_rate: T,
    notional: T,
    recovery_rate: T,
    include_accrued_premium: bool,
    is_buy_protection: bool,
}

impl<T: Float> CdsContract<T> {
    /// Constructs and validates a new CDS contract.
    ///
    /// # Errors
    ///
    /// Returns [`CdsError::EffectiveAfterMaturity`] if `effective_date >
    /// maturity_date`, [`CdsError::InvalidRecoveryRate`] if
    /// `recovery_rate` is not in `[0, 1)`, or [`CdsError::InvalidNotional`]
    /// if `notional <= 0`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        trade_date: Date,
        effective_date: Date,
        maturity_date: Date,
        value_date: Date,
        settlement_date: Date,
        step_in_date: Date,
        payment_frequency: Frequency,
        day_count_convention: DayCountConvention,
        business_day_convention: BusinessDayConvention,
        coupon_rate: T,
        notional: T,
        recovery_rate: T,
        include_accrued_premium: bool,
        is_buy_protection: bool,
    ) -> Result<Self, CdsError> {
        if effective_date > maturity_date {
            return Err(CdsError::EffectiveAfterMaturity {
                effective: effective_date,
                maturity: maturity_date,
            });
        }
        if recovery_rate < T::zero() || recovery_rate >= T::one() {
            return Err(CdsError::InvalidRecoveryRate {
                recovery: recovery_rate.to_f64().unwrap_or(f64::NAN),
            });
        }
        if notional <= T::zero() {
            return Err(CdsError::InvalidNotional {
                notional: notional.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            trade_date,
            effective_date,
            maturity_date,
            value_date,
            settlement_date,
            step_in_date,
            payment_frequency,
            day_count_convention,
            business_day_convention,
            coupon_rate,
            notional,
            recovery_rate,
            include_accrued_premium,
            is_buy_protection,
        })
    }

    /// Generates the contract's premium accrual schedule, walking
    /// backward from `maturity_date`.
    pub fn generate_schedule(&self) -> Result<Schedule, CdsError> {
        let schedule = ScheduleBuilder::new()
            .start(self.effective_date)
            .end(self.maturity_date)
            .frequency(self.payment_frequency)
            .day_count(self.day_count_convention)
            .business_day_convention(self.business_day_convention)
            .build()?;
        Ok(schedule)
    }

    /// Trade date.
    #[inline]
    pub fn trade_date(&self) -> Date {
        self.trade_date
    }

    /// Effective (protection start) date.
    #[inline]
    pub fn effective_date(&self) -> Date {
        self.effective_date
    }

    /// Maturity date.
    #[inline]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Valuation anchor date.
    #[inline]
    pub fn value_date(&self) -> Date {
        self.value_date
    }

    /// Cash settlement date.
    #[inline]
    pub fn settlement_date(&self) -> Date {
        self.settlement_date
    }

    /// Step-in (protection effective) date.
    #[inline]
    pub fn step_in_date(&self) -> Date {
        self.step_in_date
    }

    /// Coupon payment frequency.
    #[inline]
    pub fn payment_frequency(&self) -> Frequency {
        self.payment_frequency
    }

    /// Day-count convention used for accrual.
    #[inline]
    pub fn day_count_convention(&self) -> DayCountConvention {
        self.day_count_convention
    }

    /// Business-day convention used to adjust pay dates.
    #[inline]
    pub fn business_day_convention(&self) -> BusinessDayConvention {
        self.business_day_convention
    }

    /// Annualised coupon rate (decimal).
    #[inline]
    pub fn coupon_rate(&self) -> T {
        self.coupon_rate
    }

    /// Contract notional.
    #[inline]
    pub fn notional(&self) -> T {
        self.notional
    }

    /// Assumed recovery rate on default.
    #[inline]
    pub fn recovery_rate(&self) -> T {
        self.recovery_rate
    }

    /// Whether accrued premium on default is included in the premium leg.
    #[inline]
    pub fn include_accrued_premium(&self) -> bool {
        self.include_accrued_premium
    }

    /// `true` if this contract buys protection (pays premium, receives
    /// the contingent payment); `false` if it sells protection.
    #[inline]
    pub fn is_buy_protection(&self) -> bool {
        self.is_buy_protection
    }
}
