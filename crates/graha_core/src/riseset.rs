//! Sunrise and sunset queries.
//!
//! The engine searches forward from the requested instant, so the event
//! found is the first one after it. Polar day and night surface as the
//! engine's own failure text.

use graha_engine::{BodyId, CalcFlags, EphemerisEngine, GeoPosition, TransitEvent};

use crate::civil::{CivilMoment, LocalTime, to_civil_moment, to_universal_instant};
use crate::error::QueryError;

/// Which solar horizon crossing to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SunEvent {
    Rise,
    Set,
}

impl SunEvent {
    pub const fn transit_event(self) -> TransitEvent {
        match self {
            Self::Rise => TransitEvent::Rise,
            Self::Set => TransitEvent::Set,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rise => "sunrise",
            Self::Set => "sunset",
        }
    }
}

/// Local time of a solar event, with the request's offset and location echoed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventResult {
    pub time: LocalTime,
    pub utc_offset_hours: f64,
    pub location: GeoPosition,
    /// The event instant as a UT Julian day.
    pub jd_ut: f64,
}

/// Find the first sunrise or sunset after `moment` at `location`.
///
/// The result is expressed in the request's fixed UTC offset.
pub fn find_sun_event<E>(
    engine: &mut E,
    moment: &CivilMoment,
    location: &GeoPosition,
    event: SunEvent,
) -> Result<EventResult, QueryError>
where
    E: EphemerisEngine + ?Sized,
{
    let jd_ut = to_universal_instant(&*engine, moment);
    log::debug!(
        "{} search from JD {jd_ut} at lat {} lon {}",
        event.name(),
        location.latitude_deg,
        location.longitude_deg
    );
    let jd_event = engine.rise_trans(
        jd_ut,
        BodyId::SUN,
        event.transit_event(),
        location,
        CalcFlags::SWIEPH,
    )?;

    Ok(EventResult {
        time: to_civil_moment(&*engine, jd_event, moment.utc_offset_hours),
        utc_offset_hours: moment.utc_offset_hours,
        location: *location,
        jd_ut: jd_event,
    })
}

pub fn sunrise<E>(
    engine: &mut E,
    moment: &CivilMoment,
    location: &GeoPosition,
) -> Result<EventResult, QueryError>
where
    E: EphemerisEngine + ?Sized,
{
    find_sun_event(engine, moment, location, SunEvent::Rise)
}

pub fn sunset<E>(
    engine: &mut E,
    moment: &CivilMoment,
    location: &GeoPosition,
) -> Result<EventResult, QueryError>
where
    E: EphemerisEngine + ?Sized,
{
    find_sun_event(engine, moment, location, SunEvent::Set)
}
