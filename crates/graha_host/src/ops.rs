//! The five named operations, taking positional JSON arguments.
//!
//! Each operation validates its own arguments and returns a JSON value:
//! a number for longitudes, a record for rise/set events, and a
//! 12-element array for house cusps.

use graha_core::{QueryError, ascendant, house_cusps, sidereal_longitude, sunrise, sunset};
use graha_engine::EphemerisEngine;
use serde_json::{Value, json};

use crate::records::{HouseOptions, MomentRecord, decode};

fn bad_argument(op: &str, index: usize, expected: &str) -> QueryError {
    QueryError::invalid_argument(format!(
        "bad argument #{} to '{op}' ({expected} expected)",
        index + 1
    ))
}

fn arg_str<'a>(op: &str, args: &'a [Value], index: usize) -> Result<&'a str, QueryError> {
    args.get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| bad_argument(op, index, "string"))
}

fn arg_number(op: &str, args: &[Value], index: usize) -> Result<f64, QueryError> {
    args.get(index)
        .and_then(Value::as_f64)
        .ok_or_else(|| bad_argument(op, index, "number"))
}

fn opt_str<'a>(op: &str, args: &'a [Value], index: usize) -> Result<Option<&'a str>, QueryError> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(bad_argument(op, index, "string")),
    }
}

fn arg_record(op: &str, args: &[Value], index: usize) -> Result<MomentRecord, QueryError> {
    match args.get(index) {
        Some(value @ Value::Object(_)) => decode(value),
        _ => Err(bad_argument(op, index, "table")),
    }
}

/// Anything other than an object leaves the defaults in place.
fn opt_house_options(args: &[Value], index: usize) -> Result<HouseOptions, QueryError> {
    match args.get(index) {
        Some(value @ Value::Object(_)) => decode(value),
        _ => Ok(HouseOptions::default()),
    }
}

/// `get_sidereal_longitude(planet, jd_et [, ayanamsa])` → number.
pub fn get_sidereal_longitude(
    engine: &mut dyn EphemerisEngine,
    args: &[Value],
) -> Result<Value, QueryError> {
    const OP: &str = "get_sidereal_longitude";
    let planet = arg_str(OP, args, 0)?;
    let jd_et = arg_number(OP, args, 1)?;
    let ayanamsa = opt_str(OP, args, 2)?;
    let lon = sidereal_longitude(engine, planet, jd_et, ayanamsa)?;
    Ok(json!(lon))
}

/// `sunrise_time(record)` → event record.
pub fn sunrise_time(engine: &mut dyn EphemerisEngine, args: &[Value]) -> Result<Value, QueryError> {
    let rec = arg_record("sunrise_time", args, 0)?;
    let event = sunrise(engine, &rec.moment(), &rec.location())?;
    Ok(json!(MomentRecord::from(&event)))
}

/// `sunset_time(record)` → event record.
pub fn sunset_time(engine: &mut dyn EphemerisEngine, args: &[Value]) -> Result<Value, QueryError> {
    let rec = arg_record("sunset_time", args, 0)?;
    let event = sunset(engine, &rec.moment(), &rec.location())?;
    Ok(json!(MomentRecord::from(&event)))
}

/// `get_house_cusps(record [, options])` → array of 12 numbers.
pub fn get_house_cusps(
    engine: &mut dyn EphemerisEngine,
    args: &[Value],
) -> Result<Value, QueryError> {
    const OP: &str = "get_house_cusps";
    let rec = arg_record(OP, args, 0)?;
    let opts = opt_house_options(args, 1)?;
    let cusps = house_cusps(
        engine,
        &rec.moment(),
        &rec.location(),
        opts.system(),
        opts.ayanamsa.as_deref(),
    )?;
    Ok(json!(cusps))
}

/// `get_ascendant_longitude(record [, options])` → number.
pub fn get_ascendant_longitude(
    engine: &mut dyn EphemerisEngine,
    args: &[Value],
) -> Result<Value, QueryError> {
    const OP: &str = "get_ascendant_longitude";
    let rec = arg_record(OP, args, 0)?;
    let opts = opt_house_options(args, 1)?;
    let asc = ascendant(
        engine,
        &rec.moment(),
        &rec.location(),
        opts.system(),
        opts.ayanamsa.as_deref(),
    )?;
    Ok(json!(asc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use graha_engine::fixture::{EngineCall, FixtureEngine};
    use graha_engine::HouseSystem;

    fn delhi_record() -> Value {
        json!({
            "year": 2024, "month": 3, "day": 20,
            "tz": 5.5, "lat": 28.6139, "lon": 77.209, "elev": 216.0
        })
    }

    #[test]
    fn longitude_returns_number() {
        let mut engine = FixtureEngine::new();
        let value =
            get_sidereal_longitude(&mut engine, &[json!("Sun"), json!(2_451_545.0)]).unwrap();
        let lon = value.as_f64().unwrap();
        assert!((lon - (280.46 - 23.857)).abs() < 1e-9);
    }

    #[test]
    fn longitude_accepts_null_ayanamsa() {
        let mut engine = FixtureEngine::new();
        let a = get_sidereal_longitude(&mut engine, &[json!("Mars"), json!(2_451_545.0)]).unwrap();
        let b = get_sidereal_longitude(
            &mut engine,
            &[json!("Mars"), json!(2_451_545.0), Value::Null],
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn longitude_argument_errors() {
        let mut engine = FixtureEngine::new();
        let err = get_sidereal_longitude(&mut engine, &[json!(3), json!(2_451_545.0)]).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidArgument(
                "bad argument #1 to 'get_sidereal_longitude' (string expected)".into()
            )
        );
        let err = get_sidereal_longitude(&mut engine, &[json!("Sun")]).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidArgument(
                "bad argument #2 to 'get_sidereal_longitude' (number expected)".into()
            )
        );
        // Nothing reaches the engine on a bad argument.
        assert!(engine.calls().is_empty());
    }

    #[test]
    fn sunrise_record_has_wire_keys() {
        let mut engine = FixtureEngine::new();
        let value = sunrise_time(&mut engine, &[delhi_record()]).unwrap();
        assert_eq!(value["year"], json!(2024));
        assert_eq!(value["month"], json!(3));
        assert_eq!(value["day"], json!(20));
        assert_eq!(value["hour"], json!(6));
        assert_eq!(value["min"], json!(21));
        assert_eq!(value["tz"], json!(5.5));
        assert_eq!(value["lat"], json!(28.6139));
        assert_eq!(value["lon"], json!(77.209));
        assert_eq!(value["elev"], json!(216.0));
    }

    #[test]
    fn sunset_record_is_evening() {
        let mut engine = FixtureEngine::new();
        let value = sunset_time(&mut engine, &[delhi_record()]).unwrap();
        assert_eq!(value["hour"], json!(18));
    }

    #[test]
    fn record_must_be_object() {
        let mut engine = FixtureEngine::new();
        let err = sunrise_time(&mut engine, &[json!("2024-03-20")]).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidArgument("bad argument #1 to 'sunrise_time' (table expected)".into())
        );
        let err = sunrise_time(&mut engine, &[json!({"year": 2024, "day": 1})]).unwrap_err();
        assert_eq!(err, QueryError::InvalidArgument("missing field `month`".into()));
    }

    #[test]
    fn house_cusps_array_of_twelve() {
        let mut engine = FixtureEngine::new();
        let value = get_house_cusps(&mut engine, &[delhi_record()]).unwrap();
        let cusps = value.as_array().unwrap();
        assert_eq!(cusps.len(), 12);
        assert!(cusps.iter().all(Value::is_f64));
    }

    #[test]
    fn house_options_select_system() {
        let mut engine = FixtureEngine::new();
        get_house_cusps(
            &mut engine,
            &[delhi_record(), json!({"house_system": "W", "ayanamsa": "Lahiri"})],
        )
        .unwrap();
        let Some(EngineCall::Houses { system, .. }) = engine.calls().last() else {
            panic!("no houses call");
        };
        assert_eq!(*system, HouseSystem::WHOLE_SIGN);
    }

    #[test]
    fn non_table_options_fall_back_to_defaults() {
        let mut engine = FixtureEngine::new();
        let plain = get_house_cusps(&mut engine, &[delhi_record()]).unwrap();
        for opts in [json!("W"), json!(7), json!(true), json!(["W"])] {
            let value = get_house_cusps(&mut engine, &[delhi_record(), opts]).unwrap();
            assert_eq!(value, plain);
            let Some(EngineCall::Houses { system, .. }) = engine.calls().last() else {
                panic!("no houses call");
            };
            assert_eq!(*system, HouseSystem::PLACIDUS);
        }
    }

    #[test]
    fn ascendant_equals_first_equal_cusp() {
        let mut engine = FixtureEngine::new();
        let opts = json!({"house_system": "E"});
        let asc = get_ascendant_longitude(&mut engine, &[delhi_record(), opts.clone()]).unwrap();
        let cusps = get_house_cusps(&mut engine, &[delhi_record(), opts]).unwrap();
        assert_eq!(asc, cusps[0]);
    }

    #[test]
    fn engine_failure_passes_through() {
        let mut engine = FixtureEngine::new().with_failure("swe_houses_ex error");
        let err = get_ascendant_longitude(&mut engine, &[delhi_record()]).unwrap_err();
        assert_eq!(err, QueryError::EngineComputation("swe_houses_ex error".into()));
    }
}
