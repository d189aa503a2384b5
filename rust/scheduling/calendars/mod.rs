mod adjuster;
mod cal;
mod dateroll;
mod named;

pub use crate::scheduling::calendars::{
    adjuster::{Adjuster, Adjustment, CalendarAdjustment},
    cal::Cal,
    dateroll::DateRoll,
    named::CalType,
};
