//! This is the documentation for schedlib
//!
//! *Schedlib* builds business day [`scheduling::Cal`] calendars and contractual
//! cash-flow [`scheduling::Schedule`] objects for financial instruments; bonds,
//! mortgages, swap legs and date-offset products such as FX options all derive
//! their payment dates, accrual periods and day count fractions from this module.

pub mod json;

pub mod scheduling;
