//! Host-facing surface of the graha query layer.
//!
//! Exposes five operations by name under the module name `swisseph` (alias
//! `lua_swisseph`), taking and returning JSON values:
//!
//! | operation                 | arguments                       | result        |
//! |---------------------------|---------------------------------|---------------|
//! | `get_sidereal_longitude`  | planet, jd_et [, ayanamsa]      | number        |
//! | `sunrise_time`            | record                          | record        |
//! | `sunset_time`             | record                          | record        |
//! | `get_house_cusps`         | record [, options]              | 12 numbers    |
//! | `get_ascendant_longitude` | record [, options]              | number        |
//!
//! Records use the keys `year, month, day, hour, min, sec, tz, lat, lon,
//! elev`; options are `{house_system, ayanamsa}`.
//!
//! Use a [`Module`] to bind an engine you own, or the process-wide slot
//! ([`install`] / [`call`]) when the host has no place to keep one.
//!
//! ```rust
//! use graha_engine::fixture::FixtureEngine;
//! use graha_host::Module;
//! use serde_json::json;
//!
//! let mut module = Module::new(FixtureEngine::new());
//! let cusps = module
//!     .call(
//!         "get_house_cusps",
//!         &[json!({"year": 2024, "month": 3, "day": 20, "tz": 5.5,
//!                  "lat": 28.6139, "lon": 77.209}),
//!           json!({"house_system": "E"})],
//!     )
//!     .unwrap();
//! assert_eq!(cusps.as_array().unwrap().len(), 12);
//! ```

pub mod global;
pub mod module;
pub mod ops;
pub mod records;

#[cfg(feature = "swisseph")]
pub use global::init;
pub use global::{call, install, is_initialized, shutdown};
pub use module::{
    MODULE_ALIAS, MODULE_NAME, Module, OPERATIONS, Operation, OperationFn, dispatch,
    find_operation, is_module_name, operation_names,
};
pub use records::{HouseOptions, MomentRecord};

pub use graha_core::QueryError;
