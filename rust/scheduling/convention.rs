use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::scheduling::dateops::{days_between, is_leap_year, ndt};

/// A day count convention for measuring year fractions between dates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Convention {
    /// Actual days divided by 360.
    Act360,
    /// Actual days divided by a fixed 365.
    Act365F,
    /// 30/360 US bond basis.
    Thirty360,
    /// 30E/360 Eurobond basis.
    ThirtyE360,
    /// Actual/actual ISDA, splitting the period at year ends.
    ActActISDA,
}

impl Convention {
    /// Return the day count fraction between two dates.
    ///
    /// Negative when `end` precedes `start`, by the symmetry of each rule.
    pub fn dcf(&self, start: &NaiveDateTime, end: &NaiveDateTime) -> f64 {
        match self {
            Convention::Act360 => days_between(start, end) as f64 / 360.0,
            Convention::Act365F => days_between(start, end) as f64 / 365.0,
            Convention::Thirty360 => {
                let d1 = start.day().min(30);
                let d2 = if d1 == 30 { end.day().min(30) } else { end.day() };
                thirty_360(start, d1, end, d2)
            }
            Convention::ThirtyE360 => {
                thirty_360(start, start.day().min(30), end, end.day().min(30))
            }
            Convention::ActActISDA => {
                if end < start {
                    -self.dcf(end, start)
                } else if start.year() == end.year() {
                    days_between(start, end) as f64 / year_basis(start.year())
                } else {
                    let start_year_end = ndt(start.year() + 1, 1, 1);
                    let end_year_start = ndt(end.year(), 1, 1);
                    days_between(start, &start_year_end) as f64 / year_basis(start.year())
                        + (end.year() - start.year() - 1) as f64
                        + days_between(&end_year_start, end) as f64 / year_basis(end.year())
                }
            }
        }
    }
}

fn thirty_360(start: &NaiveDateTime, d1: u32, end: &NaiveDateTime, d2: u32) -> f64 {
    let years = (end.year() - start.year()) as f64;
    let months = (end.month() as i32 - start.month() as i32) as f64;
    let days = (d2 as i32 - d1 as i32) as f64;
    years + months / 12.0 + days / 360.0
}

fn year_basis(year: i32) -> f64 {
    if is_leap_year(year) {
        366.0
    } else {
        365.0
    }
}
