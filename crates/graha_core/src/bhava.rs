//! House cusp and ascendant queries.
//!
//! Cusps and angles come back exactly as the engine produced them; the
//! engine already reports them in [0, 360).

use graha_engine::{EphemerisEngine, GeoPosition, HouseSystem};

use crate::civil::{CivilMoment, to_universal_instant};
use crate::error::QueryError;
use crate::position::SIDEREAL_FLAGS;
use crate::resolve::resolve_sidereal_mode;

/// Sidereal house cusps and principal angles from one engine call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseChart {
    /// Cusp longitudes, `cusps[0]` = house 1.
    pub cusps: [f64; 12],
    pub ascendant_deg: f64,
    pub mc_deg: f64,
    pub system: HouseSystem,
}

/// Compute the sidereal house chart for a local moment and location.
///
/// Sets the engine's sidereal mode, converts `moment` to UT, and passes
/// `system` through unchanged. Whether an unrecognized system code is
/// rejected or replaced is the engine's choice.
pub fn house_chart<E>(
    engine: &mut E,
    moment: &CivilMoment,
    location: &GeoPosition,
    system: HouseSystem,
    ayanamsa: Option<&str>,
) -> Result<HouseChart, QueryError>
where
    E: EphemerisEngine + ?Sized,
{
    let mode = resolve_sidereal_mode(ayanamsa);
    engine.set_sidereal_mode(mode.mode_id());

    let jd_ut = to_universal_instant(&*engine, moment);
    log::debug!(
        "houses '{}' at JD {jd_ut} lat {} lon {} with {}",
        system.as_char(),
        location.latitude_deg,
        location.longitude_deg,
        mode.name()
    );
    let table = engine.houses(
        jd_ut,
        SIDEREAL_FLAGS,
        location.latitude_deg,
        location.longitude_deg,
        system,
    )?;

    Ok(HouseChart {
        cusps: table.cusps,
        ascendant_deg: table.ascendant(),
        mc_deg: table.mc(),
        system,
    })
}

/// The 12 sidereal house cusps, house 1 first.
pub fn house_cusps<E>(
    engine: &mut E,
    moment: &CivilMoment,
    location: &GeoPosition,
    system: HouseSystem,
    ayanamsa: Option<&str>,
) -> Result<[f64; 12], QueryError>
where
    E: EphemerisEngine + ?Sized,
{
    house_chart(engine, moment, location, system, ayanamsa).map(|chart| chart.cusps)
}

/// Sidereal ascendant longitude.
pub fn ascendant<E>(
    engine: &mut E,
    moment: &CivilMoment,
    location: &GeoPosition,
    system: HouseSystem,
    ayanamsa: Option<&str>,
) -> Result<f64, QueryError>
where
    E: EphemerisEngine + ?Sized,
{
    house_chart(engine, moment, location, system, ayanamsa).map(|chart| chart.ascendant_deg)
}
