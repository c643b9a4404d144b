//! Named-field records exchanged with the host.
//!
//! Field names are the short wire keys (`min`, `sec`, `tz`, `lat`, `lon`,
//! `elev`). Integer fields must be JSON integers; a float such as `6.0`
//! is rejected like any other type mismatch.

use graha_core::{CivilMoment, EventResult, QueryError};
use graha_engine::{GeoPosition, HouseSystem};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Date, local time, offset, and location of a request.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct MomentRecord {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    #[serde(default)]
    pub hour: i32,
    #[serde(default, rename = "min")]
    pub minute: i32,
    #[serde(default, rename = "sec")]
    pub second: i32,
    #[serde(default, rename = "tz")]
    pub utc_offset_hours: f64,
    #[serde(default, rename = "lat")]
    pub latitude_deg: f64,
    #[serde(default, rename = "lon")]
    pub longitude_deg: f64,
    #[serde(default, rename = "elev")]
    pub elevation_m: f64,
}

impl MomentRecord {
    pub fn moment(&self) -> CivilMoment {
        CivilMoment {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            utc_offset_hours: self.utc_offset_hours,
        }
    }

    pub fn location(&self) -> GeoPosition {
        GeoPosition::new(self.longitude_deg, self.latitude_deg, self.elevation_m)
    }
}

impl From<&EventResult> for MomentRecord {
    fn from(event: &EventResult) -> Self {
        Self {
            year: event.time.year,
            month: event.time.month,
            day: event.time.day,
            hour: event.time.hour,
            minute: event.time.minute,
            second: event.time.second,
            utc_offset_hours: event.utc_offset_hours,
            latitude_deg: event.location.latitude_deg,
            longitude_deg: event.location.longitude_deg,
            elevation_m: event.location.elevation_m,
        }
    }
}

/// Optional settings for house and ascendant operations.
///
/// Numbers are taken as their decimal text, so `5` selects code `'5'`.
/// Other non-string values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HouseOptions {
    #[serde(default, deserialize_with = "text_like")]
    pub house_system: Option<String>,
    #[serde(default, deserialize_with = "text_like")]
    pub ayanamsa: Option<String>,
}

fn text_like<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

impl HouseOptions {
    /// First letter of `house_system`; Placidus when absent or empty.
    pub fn system(&self) -> HouseSystem {
        HouseSystem::from_code_str(self.house_system.as_deref())
    }
}

/// Decode a record argument, mapping serde's message to `InvalidArgument`.
pub fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, QueryError> {
    T::deserialize(value).map_err(|e| QueryError::invalid_argument(e.to_string()))
}
