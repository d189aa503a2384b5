//! Static data and rule functions for pre-existing named holiday calendars.

pub mod all;
pub mod bus;
pub mod ldn;
pub mod nyc;
pub mod tgt;

use chrono::prelude::*;
use chrono::Days;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::scheduling::{dateops::get_eom, ndt, Cal, CalendarAdjustment, DateRoll};

/// Years for which the named holiday tables are populated.
pub(crate) const FIRST_YEAR: i32 = 1970;
pub(crate) const LAST_YEAR: i32 = 2100;

/// A closed tag selecting a fixed, process-wide named business day calendar.
///
/// Each variant resolves to a [`Cal`] built once behind an initialize-once
/// barrier and shared read-only thereafter; lookups are pure and deterministic
/// with no external state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalType {
    /// Every calendar day is a business day.
    None,
    /// Saturday and Sunday weekends with no specific holidays.
    WeekendOnly,
    /// TARGET (eurozone interbank) holidays.
    Target,
    /// United States public holidays with federal observance shifting.
    UnitedStates,
    /// United Kingdom bank holidays with substitute days.
    UnitedKingdom,
}

// One memory allocation per named calendar, populated on first use.
static ALL_CAL: LazyLock<Cal> = LazyLock::new(|| Cal::new(vec![], all::WEEKMASK.to_vec()));
static BUS_CAL: LazyLock<Cal> = LazyLock::new(|| Cal::new(vec![], bus::WEEKMASK.to_vec()));
static TGT_CAL: LazyLock<Cal> =
    LazyLock::new(|| Cal::new(holidays_over_range(tgt::holidays_for_year), tgt::WEEKMASK.to_vec()));
static NYC_CAL: LazyLock<Cal> =
    LazyLock::new(|| Cal::new(holidays_over_range(nyc::holidays_for_year), nyc::WEEKMASK.to_vec()));
static LDN_CAL: LazyLock<Cal> =
    LazyLock::new(|| Cal::new(holidays_over_range(ldn::holidays_for_year), ldn::WEEKMASK.to_vec()));

impl CalType {
    /// Return the fixed [`Cal`] associated with this tag.
    pub fn calendar(&self) -> &'static Cal {
        match self {
            CalType::None => &ALL_CAL,
            CalType::WeekendOnly => &BUS_CAL,
            CalType::Target => &TGT_CAL,
            CalType::UnitedStates => &NYC_CAL,
            CalType::UnitedKingdom => &LDN_CAL,
        }
    }
}

impl DateRoll for CalType {
    fn is_weekday(&self, date: &NaiveDateTime) -> bool {
        self.calendar().is_weekday(date)
    }

    fn is_holiday(&self, date: &NaiveDateTime) -> bool {
        self.calendar().is_holiday(date)
    }
}

impl CalendarAdjustment for CalType {}

fn holidays_over_range(rule: fn(i32) -> Vec<NaiveDateTime>) -> Vec<NaiveDateTime> {
    (FIRST_YEAR..=LAST_YEAR).flat_map(rule).collect()
}

/// Return Easter Sunday for a given year (Gregorian, anonymous algorithm).
pub(crate) fn easter_sunday(year: i32) -> NaiveDateTime {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    ndt(year, month as u32, day as u32)
}

/// Return the nth given weekday of a month, e.g. the third Monday.
pub(crate) fn nth_weekday(year: i32, month: u32, weekday: Weekday, nth: u32) -> NaiveDateTime {
    let first = ndt(year, month, 1);
    let offset = (7 + weekday.num_days_from_monday() - first.weekday().num_days_from_monday()) % 7;
    ndt(year, month, 1 + offset + (nth - 1) * 7)
}

/// Return the last given weekday of a month.
pub(crate) fn last_weekday(year: i32, month: u32, weekday: Weekday) -> NaiveDateTime {
    let eom = get_eom(year, month);
    let offset =
        (7 + eom.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    eom - Days::new(offset as u64)
}

/// Shift a fixed-date holiday to its federal observed day: Saturday observes
/// on the prior Friday, Sunday on the following Monday.
pub(crate) fn observed(date: NaiveDateTime) -> NaiveDateTime {
    match date.weekday() {
        Weekday::Sat => date - Days::new(1),
        Weekday::Sun => date + Days::new(1),
        _ => date,
    }
}

/// Shift a fixed-date holiday forward to Monday when it falls on a weekend.
pub(crate) fn next_monday_if_weekend(date: NaiveDateTime) -> NaiveDateTime {
    match date.weekday() {
        Weekday::Sat => date + Days::new(2),
        Weekday::Sun => date + Days::new(1),
        _ => date,
    }
}
