//! Sidereal position query layer.
//!
//! Turns loosely-specified requests (a body name, a local wall-clock time
//! with a UTC offset, a house system letter) into the strict parameters an
//! [`EphemerisEngine`](graha_engine::EphemerisEngine) expects, and turns the
//! engine's raw output back into normalized angles and local calendar time.
//!
//! Every query takes the engine by `&mut` reference. Queries that depend on
//! the sidereal mode set it immediately before computing, and the exclusive
//! borrow keeps another caller from changing it in between.
//!
//! # Quick start
//!
//! ```rust
//! use graha_core::{CivilMoment, sidereal_longitude, sunrise};
//! use graha_engine::GeoPosition;
//! use graha_engine::fixture::FixtureEngine;
//!
//! let mut engine = FixtureEngine::new();
//! let lon = sidereal_longitude(&mut engine, "Moon", 2_451_545.0, Some("Lahiri")).unwrap();
//! assert!((0.0..360.0).contains(&lon));
//!
//! let moment = CivilMoment::new(2024, 3, 20).with_offset(5.5);
//! let delhi = GeoPosition::new(77.209, 28.6139, 216.0);
//! let rise = sunrise(&mut engine, &moment, &delhi).unwrap();
//! assert_eq!(rise.time.day, 20);
//! ```

pub mod angle;
pub mod bhava;
pub mod civil;
pub mod error;
pub mod position;
pub mod resolve;
pub mod riseset;

pub use angle::normalize_360;
pub use bhava::{HouseChart, ascendant, house_chart, house_cusps};
pub use civil::{CivilMoment, LocalTime, to_civil_moment, to_universal_instant};
pub use error::QueryError;
pub use position::{sidereal_longitude, sidereal_position};
pub use resolve::{ALL_GRAHAS, Ayanamsa, Graha, resolve_body, resolve_sidereal_mode};
pub use riseset::{EventResult, SunEvent, find_sun_event, sunrise, sunset};
