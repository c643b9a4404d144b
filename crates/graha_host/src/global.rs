//! Process-wide engine slot.
//!
//! The host calls operations by name without holding an engine. The slot
//! keeps one engine behind a mutex; every call holds the lock for its whole
//! unit of work, so a sidereal-mode change and the computation that depends
//! on it never interleave with another caller.

use graha_core::QueryError;
use graha_engine::EphemerisEngine;
use parking_lot::Mutex;
use serde_json::Value;

use crate::module::dispatch;

type SharedEngine = Box<dyn EphemerisEngine + Send>;

static SLOT: Mutex<Option<SharedEngine>> = Mutex::new(None);

/// Install `engine` in the slot, returning the one it replaces.
pub fn install(engine: SharedEngine) -> Option<SharedEngine> {
    SLOT.lock().replace(engine)
}

/// Remove and return the installed engine.
pub fn shutdown() -> Option<SharedEngine> {
    SLOT.lock().take()
}

pub fn is_initialized() -> bool {
    SLOT.lock().is_some()
}

/// Open the Swiss Ephemeris with `config` and install it.
#[cfg(feature = "swisseph")]
pub fn init(config: &graha_engine::EngineConfig) -> Result<(), graha_engine::EngineError> {
    let mut slot = SLOT.lock();
    // Release the previous handle first; the library allows only one.
    drop(slot.take());
    let engine = graha_engine::SwissEphemeris::open(config)?;
    *slot = Some(Box::new(engine));
    Ok(())
}

/// Invoke operation `name` on the installed engine.
///
/// With the `swisseph` feature an empty slot is filled on first use from
/// [`EngineConfig::from_env`](graha_engine::EngineConfig::from_env).
pub fn call(name: &str, args: &[Value]) -> Result<Value, QueryError> {
    let mut slot = SLOT.lock();
    if slot.is_none() {
        *slot = Some(default_engine()?);
    }
    match slot.as_mut() {
        Some(engine) => dispatch(engine.as_mut(), name, args),
        None => Err(not_initialized()),
    }
}

#[cfg(feature = "swisseph")]
fn default_engine() -> Result<SharedEngine, QueryError> {
    let engine = graha_engine::SwissEphemeris::from_env()
        .map_err(|e| QueryError::EngineComputation(e.to_string()))?;
    Ok(Box::new(engine))
}

#[cfg(not(feature = "swisseph"))]
fn default_engine() -> Result<SharedEngine, QueryError> {
    Err(not_initialized())
}

fn not_initialized() -> QueryError {
    QueryError::EngineComputation(
        "no ephemeris engine installed; call graha_host::install first".into(),
    )
}
