//! Define the TARGET (eurozone interbank settlement) holiday calendar.

use chrono::prelude::*;
use chrono::Days;

use super::easter_sunday;
use crate::scheduling::ndt;

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

pub(crate) fn holidays_for_year(year: i32) -> Vec<NaiveDateTime> {
    let easter = easter_sunday(year);
    vec![
        ndt(year, 1, 1),          // New Year's Day
        easter - Days::new(2),    // Good Friday
        easter + Days::new(1),    // Easter Monday
        ndt(year, 5, 1),          // Labour Day
        ndt(year, 12, 25),        // Christmas Day
        ndt(year, 12, 26),        // Boxing Day
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holidays_for_year() {
        let hols = holidays_for_year(2017);
        assert!(hols.contains(&ndt(2017, 4, 14))); // Good Friday
        assert!(hols.contains(&ndt(2017, 4, 17))); // Easter Monday
        assert!(hols.contains(&ndt(2017, 5, 1)));
        assert_eq!(6, hols.len());
    }
}
