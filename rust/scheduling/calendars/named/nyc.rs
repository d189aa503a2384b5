//! Define the United States public holiday calendar with federal observance shifting.

use chrono::prelude::*;

use super::{last_weekday, nth_weekday, observed};
use crate::scheduling::ndt;

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

pub(crate) fn holidays_for_year(year: i32) -> Vec<NaiveDateTime> {
    let mut hols = vec![
        observed(ndt(year, 1, 1)),                  // New Year's Day
        nth_weekday(year, 1, Weekday::Mon, 3),      // Martin Luther King Day
        nth_weekday(year, 2, Weekday::Mon, 3),      // Washington's Birthday
        last_weekday(year, 5, Weekday::Mon),        // Memorial Day
        observed(ndt(year, 7, 4)),                  // Independence Day
        nth_weekday(year, 9, Weekday::Mon, 1),      // Labor Day
        nth_weekday(year, 10, Weekday::Mon, 2),     // Columbus Day
        observed(ndt(year, 11, 11)),                // Veterans Day
        nth_weekday(year, 11, Weekday::Thu, 4),     // Thanksgiving Day
        observed(ndt(year, 12, 25)),                // Christmas Day
    ];
    if year >= 2021 {
        hols.push(observed(ndt(year, 6, 19))); // Juneteenth
    }
    hols
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holidays_for_year() {
        let hols = holidays_for_year(2023);
        assert!(hols.contains(&ndt(2023, 1, 2))); // New Year observed (1st is Sunday)
        assert!(hols.contains(&ndt(2023, 1, 16))); // MLK
        assert!(hols.contains(&ndt(2023, 5, 29))); // Memorial Day
        assert!(hols.contains(&ndt(2023, 6, 19))); // Juneteenth
        assert!(hols.contains(&ndt(2023, 7, 4)));
        assert!(hols.contains(&ndt(2023, 11, 23))); // Thanksgiving
        assert!(hols.contains(&ndt(2023, 12, 25)));
    }

    #[test]
    fn test_observance_shifts() {
        // 4th July 2020 is a Saturday, observed Friday 3rd
        assert!(holidays_for_year(2020).contains(&ndt(2020, 7, 3)));
        // 25th December 2021 is a Saturday, observed Friday 24th
        assert!(holidays_for_year(2021).contains(&ndt(2021, 12, 24)));
        // no Juneteenth before 2021
        assert!(!holidays_for_year(2020).contains(&ndt(2020, 6, 19)));
    }
}
