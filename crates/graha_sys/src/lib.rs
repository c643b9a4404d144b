//! # graha_sys
//!
//! Low-level FFI bindings to the Swiss Ephemeris C library (`libswe`).
//!
//! Only the entry points the query layer needs are declared. For a safe
//! handle, use `graha_engine::SwissEphemeris` (feature `swisseph`).
//!
//! ## Safety
//!
//! All functions in this crate are unsafe. Callers must ensure:
//! - output buffers have the documented length (`xx` 6, `cusps` 13, `ascmc` 10,
//!   `serr` [`AS_MAXCH`])
//! - strings are NUL-terminated
//! - the library is not used from two threads at once; its configuration
//!   (ephemeris path, sidereal mode) is process-wide

use std::os::raw::{c_char, c_double, c_int};

// ============================================================================
// Return codes and buffer sizes
// ============================================================================

pub const OK: c_int = 0;
pub const ERR: c_int = -1;

/// Size of the `serr` diagnostic buffer expected by every computing function.
pub const AS_MAXCH: usize = 256;

// ============================================================================
// Calendar flags
// ============================================================================

pub const SE_JUL_CAL: c_int = 0;
pub const SE_GREG_CAL: c_int = 1;

// ============================================================================
// Body numbers
// ============================================================================

pub const SE_SUN: c_int = 0;
pub const SE_MOON: c_int = 1;
pub const SE_MERCURY: c_int = 2;
pub const SE_VENUS: c_int = 3;
pub const SE_MARS: c_int = 4;
pub const SE_JUPITER: c_int = 5;
pub const SE_SATURN: c_int = 6;
pub const SE_MEAN_NODE: c_int = 10;
pub const SE_TRUE_NODE: c_int = 11;

// ============================================================================
// Calculation flags
// ============================================================================

pub const SEFLG_JPLEPH: c_int = 1;
pub const SEFLG_SWIEPH: c_int = 2;
pub const SEFLG_MOSEPH: c_int = 4;
pub const SEFLG_SPEED: c_int = 256;
pub const SEFLG_SIDEREAL: c_int = 64 * 1024;

// ============================================================================
// Sidereal modes
// ============================================================================

pub const SE_SIDM_FAGAN_BRADLEY: c_int = 0;
pub const SE_SIDM_LAHIRI: c_int = 1;

// ============================================================================
// Rise/transit selectors
// ============================================================================

pub const SE_CALC_RISE: c_int = 1;
pub const SE_CALC_SET: c_int = 2;
pub const SE_CALC_MTRANSIT: c_int = 4;
pub const SE_CALC_ITRANSIT: c_int = 8;

// ============================================================================
// Indices into the `ascmc` array
// ============================================================================

pub const SE_ASC: usize = 0;
pub const SE_MC: usize = 1;
pub const SE_ARMC: usize = 2;
pub const SE_VERTEX: usize = 3;

// ============================================================================
// FFI Function Declarations
// ============================================================================

unsafe extern "C" {
    // Configuration
    pub fn swe_set_ephe_path(path: *const c_char);
    pub fn swe_set_sid_mode(sid_mode: c_int, t0: c_double, ayan_t0: c_double);
    pub fn swe_close();
    pub fn swe_version(s: *mut c_char) -> *mut c_char;

    // Positions
    pub fn swe_calc(
        tjd: c_double,
        ipl: c_int,
        iflag: c_int,
        xx: *mut c_double,
        serr: *mut c_char,
    ) -> c_int;

    // Rise, set and meridian transits
    pub fn swe_rise_trans(
        tjd_ut: c_double,
        ipl: c_int,
        starname: *mut c_char,
        epheflag: c_int,
        rsmi: c_int,
        geopos: *mut c_double,
        atpress: c_double,
        attemp: c_double,
        tret: *mut c_double,
        serr: *mut c_char,
    ) -> c_int;

    // Houses
    pub fn swe_houses_ex(
        tjd_ut: c_double,
        iflag: c_int,
        geolat: c_double,
        geolon: c_double,
        hsys: c_int,
        cusps: *mut c_double,
        ascmc: *mut c_double,
    ) -> c_int;

    // Calendar
    pub fn swe_julday(
        year: c_int,
        month: c_int,
        day: c_int,
        hour: c_double,
        gregflag: c_int,
    ) -> c_double;

    pub fn swe_revjul(
        jd: c_double,
        gregflag: c_int,
        jyear: *mut c_int,
        jmon: *mut c_int,
        jday: *mut c_int,
        jut: *mut c_double,
    );
}
