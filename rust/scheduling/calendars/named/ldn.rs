//! Define the United Kingdom bank holiday calendar with substitute days.

use chrono::prelude::*;
use chrono::Days;

use super::{easter_sunday, last_weekday, next_monday_if_weekend, nth_weekday};
use crate::scheduling::ndt;

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

pub(crate) fn holidays_for_year(year: i32) -> Vec<NaiveDateTime> {
    let easter = easter_sunday(year);
    let mut hols = vec![
        next_monday_if_weekend(ndt(year, 1, 1)), // New Year's Day
        easter - Days::new(2),                   // Good Friday
        easter + Days::new(1),                   // Easter Monday
        nth_weekday(year, 5, Weekday::Mon, 1),   // early May bank holiday
        last_weekday(year, 5, Weekday::Mon),     // spring bank holiday
        last_weekday(year, 8, Weekday::Mon),     // summer bank holiday
    ];
    // Christmas and Boxing Day occupy the 25th/26th, with substitute days
    // displacing a weekend pair onto the following weekdays.
    match ndt(year, 12, 25).weekday() {
        Weekday::Fri => hols.extend([ndt(year, 12, 25), ndt(year, 12, 28)]),
        Weekday::Sat => hols.extend([ndt(year, 12, 27), ndt(year, 12, 28)]),
        Weekday::Sun => hols.extend([ndt(year, 12, 26), ndt(year, 12, 27)]),
        _ => hols.extend([ndt(year, 12, 25), ndt(year, 12, 26)]),
    }
    hols
}
