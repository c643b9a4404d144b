//! Ephemeris engine seam.
//!
//! [`EphemerisEngine`] is the narrow set of operations the query layer
//! needs from an ephemeris library: positions, rise/set searches, house
//! tables, and calendar conversion. Two implementations ship here:
//!
//! - [`SwissEphemeris`] (feature `swisseph`): the Swiss Ephemeris C library.
//! - [`fixture::FixtureEngine`]: a deterministic stand-in built on mean
//!   motions, used by tests and benches.
//!
//! The engine's sidereal mode is process-wide state. Every operation takes
//! `&mut self`, so a caller holding the engine can set the mode and run the
//! dependent computation without interleaving.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod fixture;
pub mod types;

#[cfg(feature = "swisseph")]
#[allow(unsafe_code)]
mod swisseph;

use std::path::Path;

use graha_time::{CalendarKind, calendar_to_jd_in, jd_to_calendar_in, split_day_frac};

pub use config::{EPHE_PATH_ENV, EngineConfig};
pub use error::{EngineError, EngineFailure};
pub use types::{
    BodyId, CalcFlags, CalendarDate, EclipticPosition, GeoPosition, HouseSystem, HouseTable,
    SiderealModeId, TransitEvent,
};

#[cfg(feature = "swisseph")]
pub use swisseph::SwissEphemeris;

/// Operations an ephemeris backend provides to the query layer.
pub trait EphemerisEngine {
    /// Select the ayanamsa used by subsequent sidereal computations.
    fn set_sidereal_mode(&mut self, mode: SiderealModeId);

    /// Point the engine at a directory of ephemeris data files.
    fn set_ephemeris_path(&mut self, path: &Path) -> Result<(), EngineError>;

    /// Ecliptic position of `body` at `jd_et` (Ephemeris Time).
    fn calc(
        &mut self,
        jd_et: f64,
        body: BodyId,
        flags: CalcFlags,
    ) -> Result<EclipticPosition, EngineFailure>;

    /// Next rise or set of `body` after `jd_ut`, as a UT Julian day.
    fn rise_trans(
        &mut self,
        jd_ut: f64,
        body: BodyId,
        event: TransitEvent,
        geo: &GeoPosition,
        flags: CalcFlags,
    ) -> Result<f64, EngineFailure>;

    /// House cusps and angles for `jd_ut` at the given geographic position.
    fn houses(
        &mut self,
        jd_ut: f64,
        flags: CalcFlags,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
    ) -> Result<HouseTable, EngineFailure>;

    /// Civil date plus fractional hour to Julian day.
    fn julday(&self, year: i32, month: i32, day: i32, hour: f64, calendar: CalendarKind) -> f64 {
        calendar_to_jd_in(year, month, f64::from(day) + hour / 24.0, calendar)
    }

    /// Julian day to civil date plus fractional hour.
    fn revjul(&self, jd: f64, calendar: CalendarKind) -> CalendarDate {
        let (year, month, day_frac) = jd_to_calendar_in(jd, calendar);
        let (day, hour) = split_day_frac(day_frac);
        CalendarDate {
            year,
            month,
            day,
            hour,
        }
    }
}

impl<E: EphemerisEngine + ?Sized> EphemerisEngine for Box<E> {
    fn set_sidereal_mode(&mut self, mode: SiderealModeId) {
        (**self).set_sidereal_mode(mode)
    }

    fn set_ephemeris_path(&mut self, path: &Path) -> Result<(), EngineError> {
        (**self).set_ephemeris_path(path)
    }

    fn calc(
        &mut self,
        jd_et: f64,
        body: BodyId,
        flags: CalcFlags,
    ) -> Result<EclipticPosition, EngineFailure> {
        (**self).calc(jd_et, body, flags)
    }

    fn rise_trans(
        &mut self,
        jd_ut: f64,
        body: BodyId,
        event: TransitEvent,
        geo: &GeoPosition,
        flags: CalcFlags,
    ) -> Result<f64, EngineFailure> {
        (**self).rise_trans(jd_ut, body, event, geo, flags)
    }

    fn houses(
        &mut self,
        jd_ut: f64,
        flags: CalcFlags,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
    ) -> Result<HouseTable, EngineFailure> {
        (**self).houses(jd_ut, flags, latitude_deg, longitude_deg, system)
    }

    fn julday(&self, year: i32, month: i32, day: i32, hour: f64, calendar: CalendarKind) -> f64 {
        (**self).julday(year, month, day, hour, calendar)
    }

    fn revjul(&self, jd: f64, calendar: CalendarKind) -> CalendarDate {
        (**self).revjul(jd, calendar)
    }
}
