use chrono::prelude::*;
use chrono::Days;

/// Create a `NaiveDateTime` with default null time.
///
/// Panics if date values are invalid.
pub fn ndt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("`year`, `month` `day` are invalid.")
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Add a given number of calendar months to a date.
///
/// The day of month is preserved when it exists in the target month, otherwise
/// it is clamped to the last valid day of that month (end-of-month roll).
pub fn add_months(date: &NaiveDateTime, months: i32) -> NaiveDateTime {
    // convert months to a set of years and remainder months
    let mut yr_roll = (months.abs() / 12) * months.signum();
    let rem_months = months - yr_roll * 12;

    // determine the new month
    let mut new_month = i32::try_from(date.month()).unwrap() + rem_months;
    if new_month <= 0 {
        yr_roll -= 1;
        new_month = new_month.rem_euclid(12);
    } else if new_month >= 13 {
        yr_roll += 1;
        new_month = new_month.rem_euclid(12);
    }
    if new_month == 0 {
        new_month = 12;
    }

    get_clamped(date.year() + yr_roll, new_month.try_into().unwrap(), date.day())
}

/// Return a date for given year, month and day, clamping the day to the last
/// valid day of the month where necessary.
fn get_clamped(year: i32, month: u32, day: u32) -> NaiveDateTime {
    let d = NaiveDate::from_ymd_opt(year, month, day);
    match d {
        Some(date) => NaiveDateTime::new(date, NaiveTime::from_hms_opt(0, 0, 0).unwrap()),
        None => {
            if day > 28 {
                get_clamped(year, month, day - 1)
            } else {
                panic!("Unexpected error in `get_clamped`")
            }
        }
    }
}

/// Add a given number of weekdays to a date, skipping Saturdays and Sundays only.
///
/// This stepping is holiday agnostic and is distinct from business day stepping
/// under a [`DateRoll`](crate::scheduling::DateRoll); it exists for settlement
/// and spot lags which count weekdays irrespective of any holiday calendar.
/// Negative `days` step backwards. Call sites requiring a forward-only offset
/// (e.g. an FX spot lag) must validate non-negativity themselves.
pub fn add_weekdays(date: &NaiveDateTime, days: i32) -> NaiveDateTime {
    let mut remaining = days.abs();
    let mut new_date = *date;
    while remaining > 0 {
        new_date = if days < 0 {
            new_date - Days::new(1)
        } else {
            new_date + Days::new(1)
        };
        if !matches!(new_date.weekday(), Weekday::Sat | Weekday::Sun) {
            remaining -= 1;
        }
    }
    new_date
}

/// Return the signed number of calendar days from `start` to `end`.
pub fn days_between(start: &NaiveDateTime, end: &NaiveDateTime) -> i64 {
    (*end - *start).num_days()
}

/// Return an end of month date for given month and year.
pub fn get_eom(year: i32, month: u32) -> NaiveDateTime {
    get_clamped(year, month, 31)
}

/// Test whether a given date is EoM.
pub fn is_eom(date: &NaiveDateTime) -> bool {
    let eom = get_eom(date.year(), date.month());
    *date == eom
}

/// Test whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_months() {
        let options: Vec<(NaiveDateTime, i32, NaiveDateTime)> = vec![
            (ndt(2022, 1, 15), 1, ndt(2022, 2, 15)),
            (ndt(2022, 1, 31), 1, ndt(2022, 2, 28)),
            (ndt(2024, 1, 31), 1, ndt(2024, 2, 29)),
            (ndt(2022, 11, 30), 3, ndt(2023, 2, 28)),
            (ndt(2022, 1, 15), -1, ndt(2021, 12, 15)),
            (ndt(2021, 12, 31), -1, ndt(2021, 11, 30)),
            (ndt(2022, 3, 31), -13, ndt(2021, 2, 28)),
            (ndt(2020, 10, 28), 60, ndt(2025, 10, 28)),
        ];
        for option in options.iter() {
            assert_eq!(option.2, add_months(&option.0, option.1));
        }
    }

    #[test]
    fn test_add_weekdays() {
        // Friday 5th March 2021 plus one weekday is Monday 8th March 2021.
        assert_eq!(ndt(2021, 3, 8), add_weekdays(&ndt(2021, 3, 5), 1));
        // Saturday start still lands on the counted weekday.
        assert_eq!(ndt(2021, 3, 8), add_weekdays(&ndt(2021, 3, 6), 1));
        // Backwards over a weekend.
        assert_eq!(ndt(2021, 3, 5), add_weekdays(&ndt(2021, 3, 8), -1));
        // Zero is the identity.
        assert_eq!(ndt(2021, 3, 6), add_weekdays(&ndt(2021, 3, 6), 0));
        // A full week of weekdays spans nine calendar days.
        assert_eq!(ndt(2021, 3, 12), add_weekdays(&ndt(2021, 3, 5), 5));
    }

    #[test]
    fn test_days_between() {
        assert_eq!(10, days_between(&ndt(2024, 1, 1), &ndt(2024, 1, 11)));
        assert_eq!(-10, days_between(&ndt(2024, 1, 11), &ndt(2024, 1, 1)));
        assert_eq!(366, days_between(&ndt(2024, 1, 1), &ndt(2025, 1, 1)));
    }

    #[test]
    fn test_get_eom() {
        assert_eq!(ndt(2022, 2, 28), get_eom(2022, 2));
        assert_eq!(ndt(2024, 2, 29), get_eom(2024, 2));
        assert_eq!(ndt(2022, 4, 30), get_eom(2022, 4));
        assert_eq!(ndt(2022, 3, 31), get_eom(2022, 3));
    }

    #[test]
    fn test_is_eom() {
        assert_eq!(true, is_eom(&ndt(2025, 3, 31)));
        assert_eq!(false, is_eom(&ndt(2025, 3, 30)));
    }

    #[test]
    fn test_is_leap() {
        assert_eq!(true, is_leap_year(2024));
        assert_eq!(false, is_leap_year(2022));
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn weekday_strategy() -> impl Strategy<Value = NaiveDateTime> {
            (2000i32..2100i32, 1u32..13u32, 1u32..29u32)
                .prop_map(|(y, m, d)| ndt(y, m, d))
                .prop_filter("weekday", |date| {
                    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
                })
        }

        proptest! {
            #[test]
            fn test_add_weekdays_round_trip(date in weekday_strategy(), n in 0i32..200) {
                let forward = add_weekdays(&date, n);
                prop_assert!(!matches!(forward.weekday(), Weekday::Sat | Weekday::Sun));
                prop_assert_eq!(date, add_weekdays(&forward, -n));
            }

            #[test]
            fn test_add_months_preserves_order(
                date in weekday_strategy(),
                n in 1i32..120,
            ) {
                prop_assert!(add_months(&date, n) > date);
                prop_assert!(add_months(&date, -n) < date);
            }
        }
    }
}
