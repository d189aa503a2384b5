//! JSON conversion for scheduling objects.

use crate::json::JSON;
use crate::scheduling::{
    Adjuster, Cal, CalType, Convention, DateGenRule, Frequency, Schedule,
};

impl JSON for Cal {}
impl JSON for CalType {}
impl JSON for Adjuster {}
impl JSON for Frequency {}
impl JSON for DateGenRule {}
impl JSON for Convention {}
impl JSON for Schedule {}
