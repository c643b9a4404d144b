//! Civil wall-clock time ⇄ universal Julian day.
//!
//! The forward conversion builds a fractional local hour, shifts it to UTC
//! by the fixed offset, and lets the engine turn the calendar date into a
//! day count. The inverse decomposes the day count, adds the offset to the
//! hour, and moves the date by whole days when the local hour leaves
//! [0, 24), so the reported date is the local date.

use graha_engine::EphemerisEngine;
use graha_time::CalendarKind;

/// Local wall-clock instant with a fixed offset from UTC.
///
/// Fields are not range-checked: out-of-range values flow through the
/// calendar arithmetic unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilMoment {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    /// Hours east of UTC, e.g. 5.5 for India.
    pub utc_offset_hours: f64,
}

impl CivilMoment {
    /// Midnight UTC on the given date.
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            utc_offset_hours: 0.0,
        }
    }

    pub fn at(mut self, hour: i32, minute: i32, second: i32) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }

    pub fn with_offset(mut self, utc_offset_hours: f64) -> Self {
        self.utc_offset_hours = utc_offset_hours;
        self
    }

    /// Local time of day as fractional hours.
    pub fn local_hours(&self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0 + f64::from(self.second) / 3600.0
    }
}

/// Local calendar time decomposed from a Julian day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    /// Rounded to the nearest second; may read 60 when the fraction rounds up.
    pub second: i32,
}

/// Julian day on the UTC civil scale for a local wall-clock instant.
pub fn to_universal_instant<E>(engine: &E, moment: &CivilMoment) -> f64
where
    E: EphemerisEngine + ?Sized,
{
    let hour_utc = moment.local_hours() - moment.utc_offset_hours;
    engine.julday(
        moment.year,
        moment.month,
        moment.day,
        hour_utc,
        CalendarKind::Gregorian,
    )
}

/// Local calendar time for `jd_ut` at a fixed UTC offset.
///
/// Hour and minute are floored with small epsilons; seconds are rounded.
pub fn to_civil_moment<E>(engine: &E, jd_ut: f64, utc_offset_hours: f64) -> LocalTime
where
    E: EphemerisEngine + ?Sized,
{
    let utc = engine.revjul(jd_ut, CalendarKind::Gregorian);
    let mut h = utc.hour + utc_offset_hours;
    let day_shift = (h / 24.0).floor();
    let date = if day_shift == 0.0 {
        utc
    } else {
        h -= day_shift * 24.0;
        // Midnight day counts are exact.
        let midnight = engine.julday(utc.year, utc.month, utc.day, 0.0, CalendarKind::Gregorian);
        engine.revjul(midnight + day_shift, CalendarKind::Gregorian)
    };

    let hour = (h + 1e-9).floor();
    let minutes = (h - hour) * 60.0;
    let minute = (minutes + 1e-6).floor();
    let second = ((minutes - minute) * 60.0 + 0.5).floor();

    LocalTime {
        year: date.year,
        month: date.month,
        day: date.day,
        hour: hour as i32,
        minute: minute as i32,
        second: second as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graha_engine::fixture::FixtureEngine;
    use graha_time::J2000_JD;
    use proptest::prelude::*;

    #[test]
    fn utc_noon_is_j2000() {
        let engine = FixtureEngine::new();
        let jd = to_universal_instant(&engine, &CivilMoment::new(2000, 1, 1).at(12, 0, 0));
        assert_eq!(jd, J2000_JD);
    }

    #[test]
    fn offset_is_subtracted() {
        let engine = FixtureEngine::new();
        let local = CivilMoment::new(2000, 1, 1).at(17, 30, 0).with_offset(5.5);
        let jd = to_universal_instant(&engine, &local);
        assert!((jd - J2000_JD).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn offset_crossing_midnight_rolls_date_back() {
        let engine = FixtureEngine::new();
        let local = CivilMoment::new(2024, 3, 20).with_offset(5.5);
        let jd = to_universal_instant(&engine, &local);
        let utc = to_civil_moment(&engine, jd, 0.0);
        assert_eq!((utc.year, utc.month, utc.day), (2024, 3, 19));
        assert_eq!((utc.hour, utc.minute, utc.second), (18, 30, 0));
    }

    #[test]
    fn inverse_reports_local_date() {
        let engine = FixtureEngine::new();
        // 2024-03-19 20:00 UTC is 2024-03-20 01:30 in India.
        let jd = to_universal_instant(&engine, &CivilMoment::new(2024, 3, 19).at(20, 0, 0));
        let local = to_civil_moment(&engine, jd, 5.5);
        assert_eq!(
            local,
            LocalTime {
                year: 2024,
                month: 3,
                day: 20,
                hour: 1,
                minute: 30,
                second: 0,
            }
        );
    }

    #[test]
    fn just_after_local_midnight_keeps_its_date() {
        let engine = FixtureEngine::new();
        for tz in [-9.5, -3.0, 0.0, 5.5, 5.75, 13.0] {
            let moment = CivilMoment::new(2024, 3, 20).at(0, 0, 30).with_offset(tz);
            let jd = to_universal_instant(&engine, &moment);
            let back = to_civil_moment(&engine, jd, tz);
            assert_eq!(
                (back.year, back.month, back.day, back.hour, back.minute, back.second),
                (2024, 3, 20, 0, 0, 30),
                "tz {tz}"
            );
        }
    }

    #[test]
    fn negative_offset_rolls_date_back() {
        let engine = FixtureEngine::new();
        // 2024-03-01 03:30 UTC is 2024-02-29 19:30 in California.
        let jd = to_universal_instant(&engine, &CivilMoment::new(2024, 3, 1).at(3, 30, 0));
        let local = to_civil_moment(&engine, jd, -8.0);
        assert_eq!((local.year, local.month, local.day), (2024, 2, 29));
        assert_eq!((local.hour, local.minute, local.second), (19, 30, 0));
    }

    #[test]
    fn negative_offset() {
        let engine = FixtureEngine::new();
        let moment = CivilMoment::new(2023, 12, 31).at(22, 15, 9).with_offset(-8.0);
        let jd = to_universal_instant(&engine, &moment);
        let utc = to_civil_moment(&engine, jd, 0.0);
        assert_eq!((utc.year, utc.month, utc.day), (2024, 1, 1));
        assert_eq!((utc.hour, utc.minute, utc.second), (6, 15, 9));
    }

    #[test]
    fn seconds_round_to_nearest() {
        let engine = FixtureEngine::new();
        // 10:20:30.6 UTC
        let jd = J2000_JD - 0.5 + (10.0 + 20.0 / 60.0 + 30.6 / 3600.0) / 24.0;
        let t = to_civil_moment(&engine, jd, 0.0);
        assert_eq!((t.hour, t.minute, t.second), (10, 20, 31));
    }

    #[test]
    fn just_under_half_second_rounds_down() {
        let engine = FixtureEngine::new();
        // 10:20:30.4996 UTC
        let jd = J2000_JD - 0.5 + (10.0 + 20.0 / 60.0 + 30.4996 / 3600.0) / 24.0;
        let t = to_civil_moment(&engine, jd, 0.0);
        assert_eq!((t.hour, t.minute, t.second), (10, 20, 30));
    }

    #[test]
    fn seconds_can_read_sixty() {
        let engine = FixtureEngine::new();
        // 10:20:59.7 UTC: minute floors to 20, seconds round up to 60.
        let jd = J2000_JD - 0.5 + (10.0 + 20.0 / 60.0 + 59.7 / 3600.0) / 24.0;
        let t = to_civil_moment(&engine, jd, 0.0);
        assert_eq!((t.hour, t.minute, t.second), (10, 20, 60));
    }

    #[test]
    fn out_of_range_fields_flow_through() {
        let engine = FixtureEngine::new();
        let a = to_universal_instant(&engine, &CivilMoment::new(2024, 1, 31).at(25, 0, 0));
        let b = to_universal_instant(&engine, &CivilMoment::new(2024, 2, 1).at(1, 0, 0));
        assert!((a - b).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn civil_roundtrip(
            year in 1800i32..2200,
            month in 1i32..=12,
            day in 1i32..=28,
            hour in 0i32..24,
            minute in 0i32..60,
            second in 0i32..60,
            offset_quarters in -48i32..=56,
        ) {
            let engine = FixtureEngine::new();
            let tz = f64::from(offset_quarters) / 4.0;
            let moment = CivilMoment::new(year, month, day)
                .at(hour, minute, second)
                .with_offset(tz);
            let jd = to_universal_instant(&engine, &moment);
            let back = to_civil_moment(&engine, jd, tz);
            // Hour boundaries may decompose as hh:60 of the previous hour, so
            // compare the instants rather than the fields.
            let again = CivilMoment::new(back.year, back.month, back.day)
                .at(back.hour, back.minute, back.second)
                .with_offset(tz);
            let jd_again = to_universal_instant(&engine, &again);
            prop_assert!((jd_again - jd).abs() * 86_400.0 <= 1.0, "{:?} vs {:?}", back, moment);
        }
    }
}
