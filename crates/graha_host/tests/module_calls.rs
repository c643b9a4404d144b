//! End-to-end calls through the operation table on the fixture engine.

use graha_engine::EphemerisEngine;
use graha_engine::fixture::FixtureEngine;
use graha_host::{Module, QueryError, find_operation};
use proptest::prelude::*;
use serde_json::{Value, json};

fn boxed_module() -> Module<Box<dyn EphemerisEngine + Send>> {
    Module::new(Box::new(FixtureEngine::new()))
}

#[test]
fn every_operation_is_callable() {
    let mut module = boxed_module();
    let record = json!({"year": 2024, "month": 3, "day": 20, "tz": 5.5,
                        "lat": 28.6139, "lon": 77.209, "elev": 216.0});

    let lon = module
        .call("get_sidereal_longitude", &[json!("Moon"), json!(2_460_390.0), json!("Lahiri")])
        .unwrap();
    assert!(lon.is_f64());

    let rise = module.call("sunrise_time", &[record.clone()]).unwrap();
    let set = module.call("sunset_time", &[record.clone()]).unwrap();
    assert!(rise["hour"].as_i64() < set["hour"].as_i64());

    let cusps = module.call("get_house_cusps", &[record.clone()]).unwrap();
    assert_eq!(cusps.as_array().map(Vec::len), Some(12));

    let asc = module
        .call("get_ascendant_longitude", &[record, Value::Null])
        .unwrap();
    assert!(asc.is_f64());
}

#[test]
fn event_record_round_trips_as_request() {
    let mut module = boxed_module();
    let record = json!({"year": 2024, "month": 6, "day": 21, "tz": 1.0,
                        "lat": 51.5074, "lon": -0.1278});
    let rise = module.call("sunrise_time", &[record]).unwrap();
    // The event record is itself a valid request record.
    let next = module.call("sunset_time", &[rise.clone()]).unwrap();
    assert_eq!(next["day"], rise["day"]);
    assert_eq!(next["lat"], json!(51.5074));
}

#[test]
fn missing_record_argument() {
    let mut module = boxed_module();
    let err = module.call("get_house_cusps", &[]).unwrap_err();
    assert_eq!(
        err,
        QueryError::InvalidArgument("bad argument #1 to 'get_house_cusps' (table expected)".into())
    );
}

#[test]
fn options_that_are_not_a_table_are_ignored() {
    let mut module = boxed_module();
    let record = json!({"year": 2024, "month": 3, "day": 20});
    let plain = module
        .call("get_ascendant_longitude", &[record.clone()])
        .unwrap();
    let with_string = module
        .call("get_ascendant_longitude", &[record, json!("W")])
        .unwrap();
    assert_eq!(with_string, plain);
}

#[test]
fn lookup_by_name() {
    assert!(find_operation("sunset_time").is_some());
    assert!(find_operation("Sunset_Time").is_none());
}

proptest! {
    #[test]
    fn longitude_in_range_for_any_name(
        name in prop::sample::select(vec![
            "Sun", "Moon", "Mars", "Mercury", "Jupiter", "Venus", "Saturn",
            "Rahu", "Ketu", "Pluto", "", "sun",
        ]),
        jd in 2_300_000.0f64..2_600_000.0,
    ) {
        let mut module = Module::new(FixtureEngine::new());
        let value = module
            .call("get_sidereal_longitude", &[json!(name), json!(jd)])
            .unwrap();
        let lon = value.as_f64().unwrap();
        prop_assert!((0.0..360.0).contains(&lon), "{name} at {jd}: {lon}");
    }
}
