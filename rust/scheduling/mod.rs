//! Generate unadjusted, adjusted and payment date schedules.
//!
//! This module defines calendars, business day adjustment rules, day count
//! conventions and the [`Schedule`] generator built from them.
//!
//! # Calendars and adjustment
//!
//! A [`Cal`] pairs a week mask with a holiday list; the named [`CalType`]
//! variants carry fixed rule generated calendars. An [`Adjuster`] rolls a
//! date that falls on a non-business day onto one.
//!
//! ```rust
//! use schedlib::scheduling::*;
//!
//! // Saturday 29th April 2017, with the early May bank holiday following
//! let date = ndt(2017, 4, 29);
//! assert_eq!(
//!     ndt(2017, 5, 2),
//!     CalType::UnitedKingdom.adjust(&date, &Adjuster::Following {}),
//! );
//! assert_eq!(
//!     ndt(2017, 4, 28),
//!     CalType::UnitedKingdom.adjust(&date, &Adjuster::ModifiedFollowing {}),
//! );
//! ```
//!
//! # Schedules
//!
//! A [`Schedule`] rolls period dates out from one endpoint in whole month
//! steps, places any irregular stub period at the opposite end, and adjusts
//! every date, the termination included, under a single rule.
//!
//! ```rust
//! use schedlib::scheduling::*;
//!
//! let schedule = Schedule::try_new(
//!     ndt(2022, 1, 1),
//!     ndt(2023, 1, 1),
//!     Frequency::SemiAnnual,
//!     CalType::Target,
//!     Adjuster::ModifiedFollowing {},
//!     DateGenRule::Backward,
//!     0,
//! )?;
//! assert_eq!(
//!     schedule.uschedule,
//!     vec![ndt(2022, 1, 1), ndt(2022, 7, 1), ndt(2023, 1, 1)],
//! );
//! // 1st January 2022 is a Saturday and 1st January 2023 a Sunday
//! assert_eq!(
//!     schedule.aschedule,
//!     vec![ndt(2022, 1, 3), ndt(2022, 7, 1), ndt(2023, 1, 2)],
//! );
//! # Ok::<(), ScheduleError>(())
//! ```

mod calendars;
mod convention;
pub mod dateops;
mod error;
mod frequency;
mod schedule;
mod serde;

pub use crate::scheduling::{
    calendars::{Adjuster, Adjustment, Cal, CalType, CalendarAdjustment, DateRoll},
    convention::Convention,
    dateops::{add_months, add_weekdays, days_between, ndt},
    error::ScheduleError,
    frequency::Frequency,
    schedule::{DateGenRule, Schedule},
};
