//! Swiss Ephemeris backend.

use std::cell::Cell;
use std::ffi::CString;
use std::marker::PhantomData;
use std::os::raw::{c_char, c_int};
use std::path::Path;
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};

use graha_sys as ffi;
use graha_time::CalendarKind;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineFailure};
use crate::types::{
    BodyId, CalcFlags, CalendarDate, EclipticPosition, GeoPosition, HouseSystem, HouseTable,
    SiderealModeId, TransitEvent,
};
use crate::EphemerisEngine;

/// Set while a [`SwissEphemeris`] handle is alive.
static CLAIMED: AtomicBool = AtomicBool::new(false);

/// Handle to the process-wide Swiss Ephemeris library state.
///
/// At most one handle exists per process; the library's ephemeris path and
/// sidereal mode are global, so a second handle could silently change the
/// first one's results. Dropping the handle closes the library's files and
/// frees the claim.
///
/// The handle can move between threads but cannot be shared; wrap it in a
/// mutex to call it from several threads.
#[derive(Debug)]
pub struct SwissEphemeris {
    _not_sync: PhantomData<Cell<()>>,
}

impl SwissEphemeris {
    /// Claim the library and apply `config`.
    pub fn open(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        if CLAIMED
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(EngineError::Busy);
        }

        let mut engine = Self {
            _not_sync: PhantomData,
        };
        if let Some(path) = &config.ephemeris_path {
            // On error the handle drops here and releases the claim.
            engine.set_ephemeris_path(path)?;
        }
        log::debug!(
            "opened Swiss Ephemeris {} (ephemeris path: {:?})",
            engine.version(),
            config.ephemeris_path
        );
        Ok(engine)
    }

    /// Open with [`EngineConfig::from_env`].
    pub fn from_env() -> Result<Self, EngineError> {
        Self::open(&EngineConfig::from_env())
    }

    /// Library version string, e.g. "2.10.03".
    pub fn version(&self) -> String {
        let mut buf: [c_char; ffi::AS_MAXCH] = [0; ffi::AS_MAXCH];
        unsafe {
            ffi::swe_version(buf.as_mut_ptr());
        }
        c_buf_to_string(&buf)
    }
}

impl Drop for SwissEphemeris {
    fn drop(&mut self) {
        unsafe {
            ffi::swe_close();
        }
        CLAIMED.store(false, Ordering::Release);
    }
}

/// Text up to the first NUL of a C diagnostic buffer.
fn c_buf_to_string(buf: &[c_char]) -> String {
    let bytes: Vec<u8> = buf
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

fn failure_from(buf: &[c_char], fallback: impl FnOnce() -> String) -> EngineFailure {
    let message = c_buf_to_string(buf);
    if message.is_empty() {
        EngineFailure::new(fallback())
    } else {
        EngineFailure::new(message)
    }
}

impl EphemerisEngine for SwissEphemeris {
    fn set_sidereal_mode(&mut self, mode: SiderealModeId) {
        unsafe {
            ffi::swe_set_sid_mode(mode.code(), 0.0, 0.0);
        }
    }

    fn set_ephemeris_path(&mut self, path: &Path) -> Result<(), EngineError> {
        let Some(text) = path.to_str() else {
            return Err(EngineError::InvalidConfig(
                "ephemeris_path must be valid UTF-8",
            ));
        };
        let c_path = CString::new(text)
            .map_err(|_| EngineError::InvalidConfig("ephemeris_path contains a NUL byte"))?;
        unsafe {
            ffi::swe_set_ephe_path(c_path.as_ptr());
        }
        Ok(())
    }

    fn calc(
        &mut self,
        jd_et: f64,
        body: BodyId,
        flags: CalcFlags,
    ) -> Result<EclipticPosition, EngineFailure> {
        let mut xx = [0.0f64; 6];
        let mut serr: [c_char; ffi::AS_MAXCH] = [0; ffi::AS_MAXCH];
        let rc = unsafe {
            ffi::swe_calc(
                jd_et,
                body.code(),
                flags.bits(),
                xx.as_mut_ptr(),
                serr.as_mut_ptr(),
            )
        };
        if rc < 0 {
            return Err(failure_from(&serr, || format!("swe_calc returned {rc}")));
        }
        if serr[0] != 0 {
            // Non-fatal: the library fell back to another ephemeris.
            log::debug!("swe_calc: {}", c_buf_to_string(&serr));
        }
        Ok(EclipticPosition::from_raw(xx))
    }

    fn rise_trans(
        &mut self,
        jd_ut: f64,
        body: BodyId,
        event: TransitEvent,
        geo: &GeoPosition,
        flags: CalcFlags,
    ) -> Result<f64, EngineFailure> {
        let mut geopos = geo.to_array();
        let mut tret = 0.0f64;
        let mut serr: [c_char; ffi::AS_MAXCH] = [0; ffi::AS_MAXCH];
        let rc = unsafe {
            ffi::swe_rise_trans(
                jd_ut,
                body.code(),
                ptr::null_mut(),
                flags.bits(),
                event.code(),
                geopos.as_mut_ptr(),
                0.0,
                0.0,
                &mut tret,
                serr.as_mut_ptr(),
            )
        };
        if rc < 0 {
            // -2: the body stays above or below the horizon (circumpolar).
            return Err(failure_from(&serr, || {
                format!("swe_rise_trans returned {rc}")
            }));
        }
        Ok(tret)
    }

    fn houses(
        &mut self,
        jd_ut: f64,
        flags: CalcFlags,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
    ) -> Result<HouseTable, EngineFailure> {
        let mut cusps = [0.0f64; 13];
        let mut ascmc = [0.0f64; 10];
        let rc = unsafe {
            ffi::swe_houses_ex(
                jd_ut,
                flags.bits(),
                latitude_deg,
                longitude_deg,
                system.code(),
                cusps.as_mut_ptr(),
                ascmc.as_mut_ptr(),
            )
        };
        if rc == ffi::ERR {
            return Err(EngineFailure::new("swe_houses_ex error"));
        }
        let mut table_cusps = [0.0f64; 12];
        table_cusps.copy_from_slice(&cusps[1..13]);
        Ok(HouseTable {
            cusps: table_cusps,
            angles: ascmc,
        })
    }

    fn julday(&self, year: i32, month: i32, day: i32, hour: f64, calendar: CalendarKind) -> f64 {
        unsafe { ffi::swe_julday(year, month, day, hour, calendar.code()) }
    }

    fn revjul(&self, jd: f64, calendar: CalendarKind) -> CalendarDate {
        let mut year: c_int = 0;
        let mut month: c_int = 0;
        let mut day: c_int = 0;
        let mut hour = 0.0f64;
        unsafe {
            ffi::swe_revjul(
                jd,
                calendar.code(),
                &mut year,
                &mut month,
                &mut day,
                &mut hour,
            );
        }
        CalendarDate {
            year,
            month,
            day,
            hour,
        }
    }
}
