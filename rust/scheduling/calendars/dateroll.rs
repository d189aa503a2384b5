use chrono::prelude::*;
use chrono::Days;
use std::cmp::Ordering;

use crate::scheduling::{Adjuster, Adjustment, ScheduleError};

/// Simple date adjustment defining business days, holidays and rolling.
///
/// The rolling methods terminate provided the implementor does not mark every
/// day of a year as a non-business day; all calendars shipped with this crate
/// satisfy that by construction.
pub trait DateRoll {
    /// Returns whether the date is part of the general working week.
    fn is_weekday(&self, date: &NaiveDateTime) -> bool;

    /// Returns whether the date is a specific holiday excluded from the regular working week.
    fn is_holiday(&self, date: &NaiveDateTime) -> bool;

    /// Returns whether the date is a business day, i.e. part of the working week and not a holiday.
    fn is_bus_day(&self, date: &NaiveDateTime) -> bool {
        self.is_weekday(date) && !self.is_holiday(date)
    }

    /// Returns whether the date is not a business day, i.e. either not in working week or a specific holiday.
    fn is_non_bus_day(&self, date: &NaiveDateTime) -> bool {
        !self.is_bus_day(date)
    }

    /// Return the `date`, if a business day, or get the next business date after `date`.
    fn roll_forward_bus_day(&self, date: &NaiveDateTime) -> NaiveDateTime {
        let mut new_date = *date;
        while !self.is_bus_day(&new_date) {
            new_date = new_date + Days::new(1);
        }
        new_date
    }

    /// Return the `date`, if a business day, or get the business day preceding `date`.
    fn roll_backward_bus_day(&self, date: &NaiveDateTime) -> NaiveDateTime {
        let mut new_date = *date;
        while !self.is_bus_day(&new_date) {
            new_date = new_date - Days::new(1);
        }
        new_date
    }

    /// Return the `date`, if a business day, or get the proceeding business date, without rolling
    /// into a new month.
    fn roll_mod_forward_bus_day(&self, date: &NaiveDateTime) -> NaiveDateTime {
        let new_date = self.roll_forward_bus_day(date);
        if new_date.month() != date.month() {
            self.roll_backward_bus_day(date)
        } else {
            new_date
        }
    }

    /// Return the `date`, if a business day, or get the preceding business date, without rolling
    /// into a new month.
    fn roll_mod_backward_bus_day(&self, date: &NaiveDateTime) -> NaiveDateTime {
        let new_date = self.roll_backward_bus_day(date);
        if new_date.month() != date.month() {
            self.roll_forward_bus_day(date)
        } else {
            new_date
        }
    }

    /// Adjust a date by a number of business days, under lag rules.
    ///
    /// *Note*: if the number of business days is **zero** a non-business day will be rolled
    /// **forwards**.
    ///
    /// *Note*: if the given `date` is a non-business date adding or subtracting 1 business
    /// day is equivalent to rolling forwards or backwards, respectively.
    fn lag_bus_days(&self, date: &NaiveDateTime, days: i32) -> NaiveDateTime {
        if self.is_bus_day(date) {
            // a business day input makes `add_bus_days` infallible
            return self.add_bus_days(date, days).unwrap();
        }
        match days.cmp(&0_i32) {
            Ordering::Equal => self.roll_forward_bus_day(date),
            Ordering::Less => self
                .add_bus_days(&self.roll_backward_bus_day(date), days + 1)
                .unwrap(),
            Ordering::Greater => self
                .add_bus_days(&self.roll_forward_bus_day(date), days - 1)
                .unwrap(),
        }
    }

    /// Add a given number of calendar days to a `date` with the result adjusted
    /// under the given [`Adjuster`].
    fn add_cal_days(&self, date: &NaiveDateTime, days: i32, adjuster: &Adjuster) -> NaiveDateTime
    where
        Self: Sized,
    {
        let new_date = if days < 0 {
            *date - Days::new(u64::try_from(-days).unwrap())
        } else {
            *date + Days::new(u64::try_from(days).unwrap())
        };
        adjuster.adjust(&new_date, self)
    }

    /// Add a given number of business days to a `date` which must itself be a business day.
    fn add_bus_days(
        &self,
        date: &NaiveDateTime,
        days: i32,
    ) -> Result<NaiveDateTime, ScheduleError> {
        if self.is_non_bus_day(date) {
            return Err(ScheduleError::InvalidArgument(
                "Cannot add business days to an input `date` that is not a business day."
                    .to_string(),
            ));
        }
        let mut new_date = *date;
        let mut counter: i32 = 0;
        if days < 0 {
            // then we subtract business days
            while counter > days {
                new_date = self.roll_backward_bus_day(&(new_date - Days::new(1)));
                counter -= 1;
            }
        } else {
            // add business days
            while counter < days {
                new_date = self.roll_forward_bus_day(&(new_date + Days::new(1)));
                counter += 1;
            }
        }
        Ok(new_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{ndt, Cal};

    fn fixture_hol_cal() -> Cal {
        let hols = vec![ndt(2015, 9, 5), ndt(2015, 9, 7)]; // Saturday and Monday
        Cal::new(hols, vec![5, 6])
    }

    #[test]
    fn test_roll_forward_bus_day() {
        let cal = fixture_hol_cal();
        let next = cal.roll_forward_bus_day(&ndt(2015, 9, 7));
        assert_eq!(next, ndt(2015, 9, 8));

        let next = cal.roll_forward_bus_day(&ndt(2015, 9, 5));
        assert_eq!(next, ndt(2015, 9, 8));

        let next = cal.roll_forward_bus_day(&ndt(2015, 9, 4));
        assert_eq!(next, ndt(2015, 9, 4));
    }

    #[test]
    fn test_roll_backward_bus_day() {
        let cal = fixture_hol_cal();
        let prev = cal.roll_backward_bus_day(&ndt(2015, 9, 7));
        assert_eq!(prev, ndt(2015, 9, 4));

        let prev = cal.roll_backward_bus_day(&ndt(2015, 9, 4));
        assert_eq!(prev, ndt(2015, 9, 4));
    }

    #[test]
    fn test_roll_mod_forward_bus_day() {
        // Saturday 29th April 2017 with Monday 1st May a holiday
        let cal = Cal::new(vec![ndt(2017, 5, 1)], vec![5, 6]);
        assert_eq!(ndt(2017, 5, 2), cal.roll_forward_bus_day(&ndt(2017, 4, 29)));
        assert_eq!(
            ndt(2017, 4, 28),
            cal.roll_mod_forward_bus_day(&ndt(2017, 4, 29))
        );
    }

    #[test]
    fn test_roll_mod_backward_bus_day() {
        // Saturday 1st July 2017: preceding is 30th June, in the prior month
        let cal = Cal::new(vec![], vec![5, 6]);
        assert_eq!(
            ndt(2017, 6, 30),
            cal.roll_backward_bus_day(&ndt(2017, 7, 1))
        );
        assert_eq!(
            ndt(2017, 7, 3),
            cal.roll_mod_backward_bus_day(&ndt(2017, 7, 1))
        );
    }

    #[test]
    fn test_is_business_day() {
        let cal = fixture_hol_cal();
        assert!(!cal.is_bus_day(&ndt(2015, 9, 7))); // Monday in hol list
        assert!(cal.is_bus_day(&ndt(2015, 9, 10))); // Thursday
        assert!(!cal.is_bus_day(&ndt(2024, 1, 6))); // Saturday
    }

    #[test]
    fn test_is_non_business_day() {
        let cal = fixture_hol_cal();
        assert!(cal.is_non_bus_day(&ndt(2015, 9, 7)));
        assert!(!cal.is_non_bus_day(&ndt(2015, 9, 10)));
        assert!(cal.is_non_bus_day(&ndt(2024, 1, 6)));
    }

    #[test]
    fn test_lag_bus_days() {
        let cal = fixture_hol_cal();
        let result = cal.lag_bus_days(&ndt(2015, 9, 7), 1);
        assert_eq!(result, ndt(2015, 9, 8));

        let result = cal.lag_bus_days(&ndt(2025, 2, 15), -1);
        assert_eq!(result, ndt(2025, 2, 14));

        let result = cal.lag_bus_days(&ndt(2015, 9, 7), 0);
        assert_eq!(result, ndt(2015, 9, 8));
    }

    #[test]
    fn test_add_bus_days() {
        let cal = fixture_hol_cal();
        // Friday 4th September over a holiday weekend
        let next = cal.add_bus_days(&ndt(2015, 9, 4), 2).unwrap();
        assert_eq!(next, ndt(2015, 9, 9));

        let prev = cal.add_bus_days(&ndt(2015, 9, 9), -2).unwrap();
        assert_eq!(prev, ndt(2015, 9, 4));
    }

    #[test]
    fn test_add_bus_days_error() {
        let cal = fixture_hol_cal();
        assert!(cal.add_bus_days(&ndt(2015, 9, 7), 3).is_err());
    }

    #[test]
    fn test_add_cal_days() {
        let cal = fixture_hol_cal();
        let next = cal.add_cal_days(&ndt(2015, 9, 3), 2, &Adjuster::Following {});
        assert_eq!(next, ndt(2015, 9, 8));

        let prev = cal.add_cal_days(&ndt(2015, 9, 9), -2, &Adjuster::Previous {});
        assert_eq!(prev, ndt(2015, 9, 4));
    }
}
