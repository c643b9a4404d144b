//! Civil calendar ↔ Julian day arithmetic.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions (proleptic Gregorian and Julian)
//! - The [`CalendarKind`] flag shared with the ephemeris backends
//!
//! It deliberately knows nothing about time scales: every Julian day here
//! is on whatever scale the caller feeds in (UT for rise/set and houses,
//! ET for planetary positions).

pub mod julian;

pub use julian::{
    CalendarKind, J2000_JD, calendar_to_jd, calendar_to_jd_in, jd_to_calendar, jd_to_calendar_in,
    split_day_frac,
};
