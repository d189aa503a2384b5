use chrono::NaiveDateTime;
use thiserror::Error;

use crate::scheduling::Frequency;

/// Errors raised when constructing calendars and schedules.
///
/// All validation is eager: a failure is surfaced at construction time and no
/// partially built [`Schedule`](crate::scheduling::Schedule) is ever observable.
/// These are pure computations so no variant is retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// A caller supplied argument violates a documented requirement.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The start date of a schedule is after its end date.
    #[error("start date {start} is after end date {end}")]
    InvalidDateRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// The frequency does not define a whole number of months per period.
    #[error("frequency {0:?} does not define a whole number of months per period")]
    UnsupportedFrequency(Frequency),

    /// Business day adjustment re-ordered two adjacent schedule dates.
    ///
    /// This signals a defective calendar or holiday table rather than bad user
    /// input; it is unreachable for the calendars shipped with the crate.
    #[error("adjustment re-ordered adjacent schedule dates {left} and {right}")]
    ScheduleInversion {
        left: NaiveDateTime,
        right: NaiveDateTime,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::ndt;

    #[test]
    fn test_error_display() {
        let err = ScheduleError::InvalidDateRange {
            start: ndt(2025, 1, 2),
            end: ndt(2025, 1, 1),
        };
        assert!(format!("{}", err).contains("2025-01-02"));
        assert!(format!("{}", err).contains("after"));
    }

    #[test]
    fn test_unsupported_frequency_display() {
        let err = ScheduleError::UnsupportedFrequency(Frequency::Continuous);
        assert!(format!("{}", err).contains("Continuous"));
    }
}
