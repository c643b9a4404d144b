//! Julian Date ↔ calendar conversions.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 7. The Gregorian
//! variant is proleptic: the century correction is applied to every date,
//! including those before the 1582 reform.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Calendar rule used when converting between civil dates and Julian days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarKind {
    /// Julian calendar (no century correction).
    Julian,
    /// Proleptic Gregorian calendar.
    #[default]
    Gregorian,
}

impl CalendarKind {
    /// Calendar flag as understood by the ephemeris library (0 = Julian, 1 = Gregorian).
    pub const fn code(self) -> i32 {
        match self {
            Self::Julian => 0,
            Self::Gregorian => 1,
        }
    }
}

/// Gregorian calendar date (with fractional day) to Julian Date.
///
/// `day_frac` carries the time of day, e.g. 1.5 is noon on the first.
pub fn calendar_to_jd(year: i32, month: i32, day_frac: f64) -> f64 {
    calendar_to_jd_in(year, month, day_frac, CalendarKind::Gregorian)
}

/// Calendar date (with fractional day) to Julian Date under the given rule.
///
/// Month and day are not validated. Values outside their civil range are
/// carried through the arithmetic, so month 13 lands in January of the
/// following year and day 0 is the last day of the previous month.
pub fn calendar_to_jd_in(year: i32, month: i32, day_frac: f64, calendar: CalendarKind) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = f64::from(y);
    let m = f64::from(m);

    let b = match calendar {
        CalendarKind::Gregorian => {
            let a = (y / 100.0).floor();
            2.0 - a + (a / 4.0).floor()
        }
        CalendarKind::Julian => 0.0,
    };

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Date to Gregorian `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, i32, f64) {
    jd_to_calendar_in(jd, CalendarKind::Gregorian)
}

/// Julian Date to `(year, month, day_frac)` under the given rule.
pub fn jd_to_calendar_in(jd: f64, calendar: CalendarKind) -> (i32, i32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = match calendar {
        CalendarKind::Gregorian => {
            let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        }
        CalendarKind::Julian => z,
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as i32, day)
}

/// Split a fractional day into the whole day number and the hour of day.
pub fn split_day_frac(day_frac: f64) -> (i32, f64) {
    let day = day_frac.floor();
    (day as i32, (day_frac - day) * 24.0)
}
