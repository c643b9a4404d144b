//! Sidereal position queries.

use graha_engine::{CalcFlags, EclipticPosition, EphemerisEngine};

use crate::angle::normalize_360;
use crate::error::QueryError;
use crate::resolve::{Graha, resolve_body, resolve_sidereal_mode};

/// Flags for every sidereal query.
pub(crate) const SIDEREAL_FLAGS: CalcFlags = CalcFlags::SWIEPH.union(CalcFlags::SIDEREAL);

/// Full sidereal position of `graha` at `jd_et` (Ephemeris Time).
///
/// Sets the engine's sidereal mode before computing. The longitude is
/// normalized to [0, 360) and shifted 180° for Ketu; the other components
/// are the engine's own.
pub fn sidereal_position<E>(
    engine: &mut E,
    graha: Graha,
    jd_et: f64,
    ayanamsa: Option<&str>,
) -> Result<EclipticPosition, QueryError>
where
    E: EphemerisEngine + ?Sized,
{
    let mode = resolve_sidereal_mode(ayanamsa);
    engine.set_sidereal_mode(mode.mode_id());

    let body = graha.body_id();
    log::debug!(
        "calc {} (body {}) at JD {jd_et} with {}",
        graha.english_name(),
        body.code(),
        mode.name()
    );
    let mut pos = engine.calc(jd_et, body, SIDEREAL_FLAGS)?;
    pos.longitude_deg = normalize_360(pos.longitude_deg + graha.longitude_offset_deg());
    Ok(pos)
}

/// Sidereal longitude in [0, 360) of the body named `body` at `jd_et`.
///
/// Unknown body names resolve to the Sun; unknown or absent ayanamsa
/// names to Lahiri.
pub fn sidereal_longitude<E>(
    engine: &mut E,
    body: &str,
    jd_et: f64,
    ayanamsa: Option<&str>,
) -> Result<f64, QueryError>
where
    E: EphemerisEngine + ?Sized,
{
    let graha = resolve_body(body);
    sidereal_position(engine, graha, jd_et, ayanamsa).map(|pos| pos.longitude_deg)
}
