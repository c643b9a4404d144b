//! Deterministic in-process engine for tests and benches.
//!
//! Positions come from linear mean longitudes at J2000.0, rise and set are
//! fixed local-mean-time instants, and houses are equal divisions from an
//! ascendant computed with a constant obliquity. The numbers are close
//! enough to the real sky for sanity checks but carry no precision claim.
//! Every call is recorded so tests can assert on what the query layer
//! asked for.

use std::path::{Path, PathBuf};

use graha_time::J2000_JD;

use crate::error::{EngineError, EngineFailure};
use crate::types::{
    BodyId, CalcFlags, EclipticPosition, GeoPosition, HouseSystem, HouseTable, SiderealModeId,
    TransitEvent,
};
use crate::EphemerisEngine;

/// Mean obliquity of the ecliptic at J2000.0, degrees.
const OBLIQUITY_DEG: f64 = 23.4393;

/// Precession rate of the sidereal offset, degrees per Julian year.
const AYANAMSA_RATE_DEG_PER_YEAR: f64 = 50.29 / 3600.0;

/// Latitude beyond which the fixture reports no sunrise or sunset.
const POLAR_LATITUDE_DEG: f64 = 66.56;

const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// One recorded engine call.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    SetSiderealMode(SiderealModeId),
    SetEphemerisPath(PathBuf),
    Calc {
        jd_et: f64,
        body: BodyId,
        flags: CalcFlags,
    },
    RiseTrans {
        jd_ut: f64,
        body: BodyId,
        event: TransitEvent,
        geo: GeoPosition,
        flags: CalcFlags,
    },
    Houses {
        jd_ut: f64,
        flags: CalcFlags,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
    },
}

/// Mean-motion engine that records its calls.
#[derive(Debug, Clone, Default)]
pub struct FixtureEngine {
    sidereal_mode: Option<SiderealModeId>,
    ephemeris_path: Option<PathBuf>,
    failure: Option<String>,
    calls: Vec<EngineCall>,
}

impl FixtureEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every computing call fail with `message`.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    pub fn clear_failure(&mut self) {
        self.failure = None;
    }

    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn last_sidereal_mode(&self) -> Option<SiderealModeId> {
        self.sidereal_mode
    }

    pub fn ephemeris_path(&self) -> Option<&Path> {
        self.ephemeris_path.as_deref()
    }

    /// Sidereal offset at `jd` under the current mode.
    ///
    /// Fagan/Bradley until a mode has been set, matching the library's
    /// initial state. Modes without a table entry also use Fagan/Bradley.
    pub fn ayanamsa(&self, jd: f64) -> f64 {
        let base = match self.sidereal_mode {
            Some(SiderealModeId::LAHIRI) => 23.857,
            _ => 24.74,
        };
        base + AYANAMSA_RATE_DEG_PER_YEAR * (jd - J2000_JD) / DAYS_PER_JULIAN_YEAR
    }

    fn check_failure(&self) -> Result<(), EngineFailure> {
        match &self.failure {
            Some(message) => Err(EngineFailure::new(message.clone())),
            None => Ok(()),
        }
    }
}

/// Mean longitude at J2000.0, daily motion, and a representative distance.
fn mean_elements(body: BodyId) -> Option<(f64, f64, f64)> {
    let elements = match body {
        BodyId::SUN => (280.46, 0.985_65, 0.983),
        BodyId::MOON => (218.32, 13.176_40, 0.002_57),
        BodyId::MERCURY => (252.25, 4.092_33, 1.0),
        BodyId::VENUS => (181.98, 1.602_13, 0.72),
        BodyId::MARS => (355.43, 0.524_03, 1.85),
        BodyId::JUPITER => (34.35, 0.083_09, 4.62),
        BodyId::SATURN => (50.08, 0.033_46, 8.65),
        BodyId::MEAN_NODE | BodyId::TRUE_NODE => (125.04, -0.052_95, 0.002_57),
        _ => return None,
    };
    Some(elements)
}

fn deg_rem(x: f64) -> f64 {
    let r = x.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

fn known_house_system(system: HouseSystem) -> bool {
    b"PKORCEAWBMTXHV".contains(&(system.code() as u8))
}

/// Ascendant and MC (tropical, degrees) for a sidereal angle and latitude.
fn angles_from_armc(armc_deg: f64, latitude_deg: f64) -> (f64, f64) {
    let theta = armc_deg.to_radians();
    let eps = OBLIQUITY_DEG.to_radians();
    let phi = latitude_deg.to_radians();

    let mc = theta.sin().atan2(theta.cos() * eps.cos());
    let asc = theta
        .cos()
        .atan2(-(theta.sin() * eps.cos() + phi.tan() * eps.sin()));
    (deg_rem(asc.to_degrees()), deg_rem(mc.to_degrees()))
}

impl EphemerisEngine for FixtureEngine {
    fn set_sidereal_mode(&mut self, mode: SiderealModeId) {
        self.calls.push(EngineCall::SetSiderealMode(mode));
        self.sidereal_mode = Some(mode);
    }

    fn set_ephemeris_path(&mut self, path: &Path) -> Result<(), EngineError> {
        if path.as_os_str().is_empty() {
            return Err(EngineError::InvalidConfig(
                "ephemeris_path must not be empty",
            ));
        }
        self.calls.push(EngineCall::SetEphemerisPath(path.to_path_buf()));
        self.ephemeris_path = Some(path.to_path_buf());
        Ok(())
    }

    fn calc(
        &mut self,
        jd_et: f64,
        body: BodyId,
        flags: CalcFlags,
    ) -> Result<EclipticPosition, EngineFailure> {
        self.calls.push(EngineCall::Calc { jd_et, body, flags });
        self.check_failure()?;

        let Some((l0, rate, distance)) = mean_elements(body) else {
            return Err(EngineFailure::new(format!(
                "illegal planet number {}.",
                body.code()
            )));
        };

        let mut longitude = l0 + rate * (jd_et - J2000_JD);
        if flags.contains(CalcFlags::SIDEREAL) {
            longitude -= self.ayanamsa(jd_et);
        }
        let speed = if flags.contains(CalcFlags::SPEED) {
            rate
        } else {
            0.0
        };

        Ok(EclipticPosition {
            longitude_deg: deg_rem(longitude),
            latitude_deg: 0.0,
            distance_au: distance,
            longitude_speed: speed,
            latitude_speed: 0.0,
            distance_speed: 0.0,
        })
    }

    fn rise_trans(
        &mut self,
        jd_ut: f64,
        body: BodyId,
        event: TransitEvent,
        geo: &GeoPosition,
        flags: CalcFlags,
    ) -> Result<f64, EngineFailure> {
        self.calls.push(EngineCall::RiseTrans {
            jd_ut,
            body,
            event,
            geo: *geo,
            flags,
        });
        self.check_failure()?;

        if body != BodyId::SUN {
            return Err(EngineFailure::new(format!(
                "fixture engine has no rise/set model for body {}",
                body.code()
            )));
        }
        if geo.latitude_deg.abs() > POLAR_LATITUDE_DEG {
            return Err(EngineFailure::new(format!(
                "rise or set not found at latitude {}",
                geo.latitude_deg
            )));
        }

        // Local mean time measured in days from local midnight.
        let lmt_offset = geo.longitude_deg / 360.0;
        let local = jd_ut + 0.5 + lmt_offset;
        let target_frac = match event {
            TransitEvent::Rise => 0.25,
            TransitEvent::Set => 0.75,
        };
        let mut target = local.floor() + target_frac;
        if target <= local {
            target += 1.0;
        }
        Ok(target - 0.5 - lmt_offset)
    }

    fn houses(
        &mut self,
        jd_ut: f64,
        flags: CalcFlags,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
    ) -> Result<HouseTable, EngineFailure> {
        self.calls.push(EngineCall::Houses {
            jd_ut,
            flags,
            latitude_deg,
            longitude_deg,
            system,
        });
        self.check_failure()?;

        if !known_house_system(system) {
            return Err(EngineFailure::new(format!(
                "unknown house system '{}'",
                system.as_char()
            )));
        }

        let armc = deg_rem(
            280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD) + longitude_deg,
        );
        let (mut asc, mut mc) = angles_from_armc(armc, latitude_deg);
        if flags.contains(CalcFlags::SIDEREAL) {
            let ayan = self.ayanamsa(jd_ut);
            asc = deg_rem(asc - ayan);
            mc = deg_rem(mc - ayan);
        }

        let first = if system == HouseSystem::WHOLE_SIGN {
            (asc / 30.0).floor() * 30.0
        } else {
            asc
        };
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = deg_rem(first + 30.0 * i as f64);
        }

        let mut angles = [0.0; 10];
        angles[HouseTable::ASC] = asc;
        angles[HouseTable::MC] = mc;
        angles[HouseTable::ARMC] = armc;
        Ok(HouseTable { cusps, angles })
    }
}
