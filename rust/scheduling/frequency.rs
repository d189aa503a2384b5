use serde::{Deserialize, Serialize};

use crate::scheduling::ScheduleError;

/// A frequency of periodic payments per year.
///
/// The periodic variants each divide a year into a whole number of months and
/// are valid for schedule generation. `Simple` and `Continuous` exist for
/// compounding and day count consumers and do not define periods; a
/// [`Schedule`](crate::scheduling::Schedule) rejects them. `Zero` defines a
/// single period spanning the whole date range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    /// Periods every twelve months.
    Annual,
    /// Periods every six months.
    SemiAnnual,
    /// Periods every four months.
    TriAnnual,
    /// Periods every three months.
    Quarterly,
    /// Periods every two months.
    BiMonthly,
    /// Periods every month.
    Monthly,
    /// Only ever a single period.
    Zero,
    /// Simple interest, no periodic payments.
    Simple,
    /// Continuous compounding, no periodic payments.
    Continuous,
}

impl Frequency {
    /// Return the number of payments per year for a periodic variant.
    pub fn periods_per_year(&self) -> Option<u32> {
        match self {
            Frequency::Annual => Some(1),
            Frequency::SemiAnnual => Some(2),
            Frequency::TriAnnual => Some(3),
            Frequency::Quarterly => Some(4),
            Frequency::BiMonthly => Some(6),
            Frequency::Monthly => Some(12),
            Frequency::Zero | Frequency::Simple | Frequency::Continuous => None,
        }
    }

    /// Return the whole number of months in one period of a periodic variant.
    ///
    /// Errors with [`ScheduleError::UnsupportedFrequency`] for the
    /// non-periodic variants, which cannot step a schedule.
    pub fn try_months_per_period(&self) -> Result<u32, ScheduleError> {
        match self.periods_per_year() {
            Some(n) => Ok(12 / n),
            None => Err(ScheduleError::UnsupportedFrequency(*self)),
        }
    }
}
