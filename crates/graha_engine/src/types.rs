//! Vocabulary shared between the query layer and ephemeris backends.
//!
//! Body, sidereal-mode, and house-system identifiers are the engine's own
//! integer codes. They are opaque to callers: the query layer resolves
//! them from names and passes them straight through.

use std::ops::BitOr;

/// Engine body number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub i32);

impl BodyId {
    pub const SUN: Self = Self(0);
    pub const MOON: Self = Self(1);
    pub const MERCURY: Self = Self(2);
    pub const VENUS: Self = Self(3);
    pub const MARS: Self = Self(4);
    pub const JUPITER: Self = Self(5);
    pub const SATURN: Self = Self(6);
    pub const MEAN_NODE: Self = Self(10);
    pub const TRUE_NODE: Self = Self(11);

    /// Raw engine code.
    pub const fn code(self) -> i32 {
        self.0
    }
}

/// Engine sidereal-mode (ayanamsa) number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SiderealModeId(pub i32);

impl SiderealModeId {
    pub const FAGAN_BRADLEY: Self = Self(0);
    pub const LAHIRI: Self = Self(1);

    /// Raw engine code.
    pub const fn code(self) -> i32 {
        self.0
    }
}

/// Calculation flag bits passed to position, rise/set and house calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CalcFlags(i32);

impl CalcFlags {
    /// Use the engine's own compressed ephemeris files.
    pub const SWIEPH: Self = Self(2);
    /// Also compute daily motion.
    pub const SPEED: Self = Self(256);
    /// Sidereal coordinates under the currently configured sidereal mode.
    pub const SIDEREAL: Self = Self(64 * 1024);

    /// Flags as passed to the engine.
    pub const fn bits(self) -> i32 {
        self.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for CalcFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Single-letter house system code, passed through to the engine opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HouseSystem(u8);

impl HouseSystem {
    pub const PLACIDUS: Self = Self(b'P');
    pub const KOCH: Self = Self(b'K');
    pub const PORPHYRY: Self = Self(b'O');
    pub const REGIOMONTANUS: Self = Self(b'R');
    pub const CAMPANUS: Self = Self(b'C');
    pub const EQUAL: Self = Self(b'E');
    pub const WHOLE_SIGN: Self = Self(b'W');

    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// First byte of a non-empty code string; Placidus otherwise.
    pub fn from_code_str(code: Option<&str>) -> Self {
        match code.and_then(|s| s.as_bytes().first()) {
            Some(&b) => Self(b),
            None => Self::PLACIDUS,
        }
    }

    /// Code as passed to the engine.
    pub const fn code(self) -> i32 {
        self.0 as i32
    }

    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl Default for HouseSystem {
    fn default() -> Self {
        Self::PLACIDUS
    }
}

/// Which horizon crossing a rise/transit search looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitEvent {
    Rise,
    Set,
}

impl TransitEvent {
    /// Event selector code understood by the engine.
    pub const fn code(self) -> i32 {
        match self {
            Self::Rise => 1,
            Self::Set => 2,
        }
    }
}

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPosition {
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Height above sea level in meters.
    pub elevation_m: f64,
}

impl GeoPosition {
    pub fn new(longitude_deg: f64, latitude_deg: f64, elevation_m: f64) -> Self {
        Self {
            longitude_deg,
            latitude_deg,
            elevation_m,
        }
    }

    /// `[longitude, latitude, elevation]`, the order the engine expects.
    pub fn to_array(self) -> [f64; 3] {
        [self.longitude_deg, self.latitude_deg, self.elevation_m]
    }
}

/// Ecliptic position returned by a position call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EclipticPosition {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_au: f64,
    /// Daily motion in longitude (deg/day); zero unless `SPEED` was requested.
    pub longitude_speed: f64,
    pub latitude_speed: f64,
    pub distance_speed: f64,
}

impl EclipticPosition {
    /// Build from the engine's six-element output array.
    pub fn from_raw(xx: [f64; 6]) -> Self {
        Self {
            longitude_deg: xx[0],
            latitude_deg: xx[1],
            distance_au: xx[2],
            longitude_speed: xx[3],
            latitude_speed: xx[4],
            distance_speed: xx[5],
        }
    }
}

/// Output of a house computation: cusps 1..12 and the auxiliary angle set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseTable {
    /// Cusp longitudes, `cusps[0]` = house 1.
    pub cusps: [f64; 12],
    /// Auxiliary angles: ascendant, MC, ARMC, vertex, and engine extras.
    pub angles: [f64; 10],
}

impl HouseTable {
    pub const ASC: usize = 0;
    pub const MC: usize = 1;
    pub const ARMC: usize = 2;

    pub fn ascendant(&self) -> f64 {
        self.angles[Self::ASC]
    }

    pub fn mc(&self) -> f64 {
        self.angles[Self::MC]
    }
}

/// Civil calendar date with the hour of day as a fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: f64,
}
