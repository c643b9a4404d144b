//! Operation table and name-based dispatch.

use graha_core::QueryError;
use graha_engine::EphemerisEngine;
use serde_json::Value;

use crate::ops;

/// Name the module registers under.
pub const MODULE_NAME: &str = "swisseph";

/// Alternate name resolving to the same module.
pub const MODULE_ALIAS: &str = "lua_swisseph";

/// Signature shared by every operation.
pub type OperationFn = fn(&mut dyn EphemerisEngine, &[Value]) -> Result<Value, QueryError>;

/// One named operation.
#[derive(Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub func: OperationFn,
}

impl std::fmt::Debug for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation").field("name", &self.name).finish()
    }
}

/// Every operation the module exposes.
pub static OPERATIONS: [Operation; 5] = [
    Operation {
        name: "get_sidereal_longitude",
        func: ops::get_sidereal_longitude,
    },
    Operation {
        name: "sunrise_time",
        func: ops::sunrise_time,
    },
    Operation {
        name: "sunset_time",
        func: ops::sunset_time,
    },
    Operation {
        name: "get_house_cusps",
        func: ops::get_house_cusps,
    },
    Operation {
        name: "get_ascendant_longitude",
        func: ops::get_ascendant_longitude,
    },
];

/// Look up an operation by exact name.
pub fn find_operation(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}

/// True for both the module name and its alias.
pub fn is_module_name(name: &str) -> bool {
    name == MODULE_NAME || name == MODULE_ALIAS
}

/// Operation names in table order.
pub fn operation_names() -> impl Iterator<Item = &'static str> {
    OPERATIONS.iter().map(|op| op.name)
}

/// An engine bound to the operation table.
#[derive(Debug)]
pub struct Module<E> {
    engine: E,
}

impl<E: EphemerisEngine> Module<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Invoke `name` with positional `args`.
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value, QueryError> {
        dispatch(&mut self.engine, name, args)
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

/// Invoke `name` on `engine`. Unknown names are `InvalidArgument`.
pub fn dispatch(
    engine: &mut dyn EphemerisEngine,
    name: &str,
    args: &[Value],
) -> Result<Value, QueryError> {
    let Some(op) = find_operation(name) else {
        return Err(QueryError::invalid_argument(format!(
            "unknown operation '{name}' in module '{MODULE_NAME}'"
        )));
    };
    log::debug!("{MODULE_NAME}.{name} with {} argument(s)", args.len());
    (op.func)(engine, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graha_engine::fixture::FixtureEngine;
    use serde_json::json;

    #[test]
    fn table_lists_five_operations() {
        let names: Vec<_> = operation_names().collect();
        assert_eq!(
            names,
            [
                "get_sidereal_longitude",
                "sunrise_time",
                "sunset_time",
                "get_house_cusps",
                "get_ascendant_longitude",
            ]
        );
    }

    #[test]
    fn alias_resolves() {
        assert!(is_module_name("swisseph"));
        assert!(is_module_name("lua_swisseph"));
        assert!(!is_module_name("SwissEph"));
    }

    #[test]
    fn dispatch_by_name() {
        let mut module = Module::new(FixtureEngine::new());
        let value = module
            .call("get_sidereal_longitude", &[json!("Ketu"), json!(2_460_390.0)])
            .unwrap();
        assert!(value.is_f64());
        assert_eq!(module.engine().calls().len(), 2);
    }

    #[test]
    fn unknown_operation() {
        let mut module = Module::new(FixtureEngine::new());
        let err = module.call("get_moon_phase", &[]).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidArgument(
                "unknown operation 'get_moon_phase' in module 'swisseph'".into()
            )
        );
    }
}
