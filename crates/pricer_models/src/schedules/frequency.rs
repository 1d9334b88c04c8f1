//! Payment frequency enumeration.

use std::fmt;
use std::str::FromStr;

/// Payment frequency for a CDS premium leg.
///
/// The normative set is `m ∈ {1, 2, 4, 12}` payments per year.
///
/// # Examples
///
/// ```
/// use pricer_models::schedules::Frequency;
///
/// let freq = Frequency::Quarterly;
/// assert_eq!(freq.periods_per_year(), 4);
/// assert_eq!(freq.months_between_payments(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Annual payments (once per year).
    Annual,
    /// Semi-annual payments (twice per year).
    SemiAnnual,
    /// Quarterly payments (four times per year), the standard CDS frequency.
    Quarterly,
    /// Monthly payments (twelve times per year).
    Monthly,
}

impl Frequency {
    /// Returns the number of payment periods per year (`m`).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_models::schedules::Frequency;
    ///
    /// assert_eq!(Frequency::Annual.periods_per_year(), 1);
    /// assert_eq!(Frequency::SemiAnnual.periods_per_year(), 2);
    /// assert_eq!(Frequency::Quarterly.periods_per_year(), 4);
    /// assert_eq!(Frequency::Monthly.periods_per_year(), 12);
    /// ```
    #[inline]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the number of months between payment dates (`12/m`).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_models::schedules::Frequency;
    ///
    /// assert_eq!(Frequency::Annual.months_between_payments(), 12);
    /// assert_eq!(Frequency::SemiAnnual.months_between_payments(), 6);
    /// assert_eq!(Frequency::Quarterly.months_between_payments(), 3);
    /// assert_eq!(Frequency::Monthly.months_between_payments(), 1);
    /// ```
    #[inline]
    pub fn months_between_payments(&self) -> u32 {
        12 / self.periods_per_year()
    }

    /// Returns the standard name for this frequency.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_models::schedules::Frequency;
    ///
    /// assert_eq!(Frequency::Annual.name(), "Annual");
    /// assert_eq!(Frequency::SemiAnnual.name(), "Semi-Annual");
    /// ```
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        }
    }

    /// Maps the normative integer encoding (`1`, `2`, `4`, `12`) to a variant.
    pub fn from_periods_per_year(m: u32) -> Option<Self> {
        match m {
            1 => Some(Frequency::Annual),
            2 => Some(Frequency::SemiAnnual),
            4 => Some(Frequency::Quarterly),
            12 => Some(Frequency::Monthly),
            _ => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Frequency {
    type Err = String;

    /// Parses frequency from string (case-insensitive).
    ///
    /// Supported formats:
    /// - Annual: "annual", "1y", "yearly", "12m"
    /// - SemiAnnual: "semi-annual", "semiannual", "6m"
    /// - Quarterly: "quarterly", "3m"
    /// - Monthly: "monthly", "1m"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "annual" | "1y" | "yearly" | "12m" => Ok(Frequency::Annual),
            "semiannual" | "6m" => Ok(Frequency::SemiAnnual),
            "quarterly" | "3m" => Ok(Frequency::Quarterly),
            "monthly" | "1m" => Ok(Frequency::Monthly),
            _ => Err(format!("Unknown frequency: {}", s)),
        }
    }
}
