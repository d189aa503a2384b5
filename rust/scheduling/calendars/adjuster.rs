use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::scheduling::DateRoll;

/// A list of rules for performing date adjustment.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum Adjuster {
    /// Actual date without adjustment.
    Actual {},
    /// Following adjustment rule.
    Following {},
    /// Modified following adjustment rule.
    ModifiedFollowing {},
    /// Previous adjustment rule.
    Previous {},
    /// Modified previous adjustment rule.
    ModifiedPrevious {},
    /// A set number of business days applied under calendar lag rules.
    ///
    /// Used for payment lags; unlike the rolling rules above this variant is a
    /// date offset and is not idempotent.
    BusDaysLag { number: i32 },
}

/// Perform date adjustment according to calendar definitions, i.e. a known [`DateRoll`].
pub trait Adjustment {
    /// Adjust a date under an adjustment rule.
    fn adjust<T: DateRoll>(&self, udate: &NaiveDateTime, calendar: &T) -> NaiveDateTime;

    /// Adjust a vector of dates under an adjustment rule;
    fn adjusts<T: DateRoll>(&self, udates: &[NaiveDateTime], calendar: &T) -> Vec<NaiveDateTime>;
}

/// Perform date adjustment according to adjustment rules, i.e. a given [`Adjuster`].
pub trait CalendarAdjustment {
    /// Adjust a date under an adjustment rule.
    fn adjust(&self, udate: &NaiveDateTime, adjuster: &Adjuster) -> NaiveDateTime
    where
        Self: Sized + DateRoll,
    {
        adjuster.adjust(udate, self)
    }

    /// Adjust a vector of dates under an adjustment rule;
    fn adjusts(&self, udates: &[NaiveDateTime], adjuster: &Adjuster) -> Vec<NaiveDateTime>
    where
        Self: Sized + DateRoll,
    {
        adjuster.adjusts(udates, self)
    }
}

impl Adjustment for Adjuster {
    fn adjust<T: DateRoll>(&self, udate: &NaiveDateTime, calendar: &T) -> NaiveDateTime {
        match self {
            Adjuster::Actual {} => *udate,
            Adjuster::Following {} => calendar.roll_forward_bus_day(udate),
            Adjuster::Previous {} => calendar.roll_backward_bus_day(udate),
            Adjuster::ModifiedFollowing {} => calendar.roll_mod_forward_bus_day(udate),
            Adjuster::ModifiedPrevious {} => calendar.roll_mod_backward_bus_day(udate),
            Adjuster::BusDaysLag { number: n } => calendar.lag_bus_days(udate, *n),
        }
    }

    fn adjusts<T: DateRoll>(&self, udates: &[NaiveDateTime], calendar: &T) -> Vec<NaiveDateTime> {
        udates
            .iter()
            .map(|udate| self.adjust(udate, calendar))
            .collect()
    }
}
