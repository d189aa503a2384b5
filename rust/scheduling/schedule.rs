use chrono::prelude::*;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::scheduling::{
    dateops::add_months, Adjuster, CalType, CalendarAdjustment, Frequency, ScheduleError,
};

/// The direction in which regular period dates are rolled out.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateGenRule {
    /// Roll out from the effective date; any stub period sits at the back.
    Forward,
    /// Roll out from the termination date; any stub period sits at the front.
    Backward,
}

/// A generated payment schedule.
///
/// Contains the input definition alongside three derived date vectors:
///
/// - `uschedule`: unadjusted period boundary dates,
/// - `aschedule`: accrual dates, i.e. `uschedule` adjusted under the
///   `accrual_adjuster` and `calendar`,
/// - `pschedule`: payment dates, i.e. `aschedule` lagged by `payment_lag`
///   business days.
///
/// Both endpoints always appear in every vector and every date, the
/// termination included, is adjusted under the same rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub ueffective: NaiveDateTime,
    pub utermination: NaiveDateTime,
    pub frequency: Frequency,
    pub calendar: CalType,
    pub accrual_adjuster: Adjuster,
    pub gen_rule: DateGenRule,
    pub payment_lag: i32,

    // derived data objects
    pub uschedule: Vec<NaiveDateTime>,
    pub aschedule: Vec<NaiveDateTime>,
    pub pschedule: Vec<NaiveDateTime>,
}

impl Schedule {
    /// Generate a schedule from a date range and period definition.
    ///
    /// # Errors
    ///
    /// - [`ScheduleError::InvalidDateRange`] if `effective` is after
    ///   `termination`.
    /// - [`ScheduleError::UnsupportedFrequency`] if `frequency` does not
    ///   define periods ([`Frequency::Simple`] or [`Frequency::Continuous`]).
    /// - [`ScheduleError::ScheduleInversion`] if the adjuster re-orders two
    ///   adjacent dates, which a pathological custom rule can produce.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use schedlib::scheduling::*;
    /// let schedule = Schedule::try_new(
    ///     ndt(2024, 3, 15),
    ///     ndt(2024, 9, 15),
    ///     Frequency::Quarterly,
    ///     CalType::WeekendOnly,
    ///     Adjuster::ModifiedFollowing {},
    ///     DateGenRule::Backward,
    ///     0,
    /// )?;
    /// assert_eq!(
    ///     schedule.uschedule,
    ///     vec![ndt(2024, 3, 15), ndt(2024, 6, 15), ndt(2024, 9, 15)],
    /// );
    /// # Ok::<(), ScheduleError>(())
    /// ```
    pub fn try_new(
        effective: NaiveDateTime,
        termination: NaiveDateTime,
        frequency: Frequency,
        calendar: CalType,
        accrual_adjuster: Adjuster,
        gen_rule: DateGenRule,
        payment_lag: i32,
    ) -> Result<Self, ScheduleError> {
        if effective > termination {
            return Err(ScheduleError::InvalidDateRange {
                start: effective,
                end: termination,
            });
        }
        if payment_lag < 0 {
            return Err(ScheduleError::InvalidArgument(format!(
                "`payment_lag` must be non-negative, got {payment_lag}."
            )));
        }

        let uschedule = match frequency {
            Frequency::Zero => vec![effective, termination],
            _ => {
                let step = i32::try_from(frequency.try_months_per_period()?).unwrap();
                match gen_rule {
                    DateGenRule::Forward => {
                        generate_forward(&effective, &termination, step)
                    }
                    DateGenRule::Backward => {
                        generate_backward(&effective, &termination, step)
                    }
                }
            }
        };

        let aschedule = calendar.adjusts(&uschedule, &accrual_adjuster);
        for (left, right) in aschedule.iter().tuple_windows() {
            if left > right {
                return Err(ScheduleError::ScheduleInversion {
                    left: *left,
                    right: *right,
                });
            }
        }
        let pschedule = calendar.adjusts(
            &aschedule,
            &Adjuster::BusDaysLag {
                number: payment_lag,
            },
        );

        Ok(Schedule {
            ueffective: effective,
            utermination: termination,
            frequency,
            calendar,
            accrual_adjuster,
            gen_rule,
            payment_lag,
            uschedule,
            aschedule,
            pschedule,
        })
    }

    /// Return the number of periods in the schedule.
    pub fn n_periods(&self) -> usize {
        self.uschedule.len() - 1
    }

    /// Test whether the schedule contains an irregular period.
    ///
    /// The stub sits at the back under [`DateGenRule::Forward`] and at the
    /// front under [`DateGenRule::Backward`]. A [`Frequency::Zero`] schedule
    /// is its own single period and is never stubbed.
    pub fn is_stubbed(&self) -> bool {
        let step = match self.frequency.try_months_per_period() {
            Ok(months) => i32::try_from(months).unwrap(),
            Err(_) => return false,
        };
        let n = i32::try_from(self.n_periods()).unwrap();
        match self.gen_rule {
            DateGenRule::Forward => add_months(&self.ueffective, n * step) != self.utermination,
            DateGenRule::Backward => add_months(&self.utermination, -n * step) != self.ueffective,
        }
    }
}

/// Roll out period dates from the effective date in whole month multiples.
///
/// Month offsets are always taken from the anchor so that an end-of-month
/// clamp in one period does not shift the day of month of later periods.
fn generate_forward(
    effective: &NaiveDateTime,
    termination: &NaiveDateTime,
    step: i32,
) -> Vec<NaiveDateTime> {
    let mut uschedule = vec![*effective];
    let mut period = 1;
    loop {
        let udate = add_months(effective, period * step);
        if udate >= *termination {
            break;
        }
        uschedule.push(udate);
        period += 1;
    }
    uschedule.push(*termination);
    uschedule
}

/// Roll out period dates backwards from the termination date.
fn generate_backward(
    effective: &NaiveDateTime,
    termination: &NaiveDateTime,
    step: i32,
) -> Vec<NaiveDateTime> {
    let mut uschedule = vec![*termination];
    let mut period = 1;
    loop {
        let udate = add_months(termination, -period * step);
        if udate <= *effective {
            break;
        }
        uschedule.push(udate);
        period += 1;
    }
    uschedule.push(*effective);
    uschedule.reverse();
    uschedule
}
