//! Extraction of typed arguments from a coerced argument object.
//!
//! A GraphQL argument type is a chain of nullable/list modifiers around a
//! scalar leaf. The chain is spelled as a Rust type — `Option<T>` for a
//! nullable layer, `Vec<T>` for a list layer — and extraction recurses
//! through the wrappers down to the leaf conversion. Non-null is the
//! default: `[Int!]!` is `Vec<i32>`, `[Int]` is `Option<Vec<Option<i32>>>`.
//!
//! Required arguments go through [`require`], which fails with a
//! [`SchemaError`] when the argument is missing or of the wrong shape.
//! Optional lookups go through [`find`], which never fails.

use serde_json::Value;

use crate::error::SchemaError;
use crate::scalars::ID;
use crate::value::Variables;

/// Conversion of a JSON argument value into a typed Rust value.
///
/// Implementations exist for the scalar leaves (`i32`, `f64`, `String`,
/// `bool`, [`ID`], raw [`Value`]) and for `Option`/`Vec` wrappers over
/// any implementation.
pub trait FromArgument: Sized {
    /// Converts a single JSON value. `name` is only used to label errors.
    fn from_argument(name: &str, value: &Value) -> Result<Self, SchemaError>;

    /// Looks up `name` in `arguments` and converts it.
    ///
    /// An absent argument fails here; the nullable wrapper overrides this
    /// to accept absence.
    fn require(name: &str, arguments: &Variables) -> Result<Self, SchemaError> {
        match arguments.get(name) {
            Some(value) => Self::from_argument(name, value),
            None => Err(SchemaError::invalid_argument(
                name,
                "missing required value",
            )),
        }
    }
}

/// Extracts a required argument, failing on absence or type mismatch.
pub fn require<T: FromArgument>(name: &str, arguments: &Variables) -> Result<T, SchemaError> {
    T::require(name, arguments)
}

/// Extracts an optional argument; any extraction failure maps to `None`.
pub fn find<T: FromArgument>(name: &str, arguments: &Variables) -> Option<T> {
    T::require(name, arguments).ok()
}

impl FromArgument for i32 {
    fn from_argument(name: &str, value: &Value) -> Result<Self, SchemaError> {
        value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| SchemaError::invalid_argument(name, "expected an Int value"))
    }
}

impl FromArgument for f64 {
    fn from_argument(name: &str, value: &Value) -> Result<Self, SchemaError> {
        value
            .as_f64()
            .ok_or_else(|| SchemaError::invalid_argument(name, "expected a Float value"))
    }
}

impl FromArgument for String {
    fn from_argument(name: &str, value: &Value) -> Result<Self, SchemaError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| SchemaError::invalid_argument(name, "expected a String value"))
    }
}

impl FromArgument for bool {
    fn from_argument(name: &str, value: &Value) -> Result<Self, SchemaError> {
        value
            .as_bool()
            .ok_or_else(|| SchemaError::invalid_argument(name, "expected a Boolean value"))
    }
}

impl FromArgument for ID {
    fn from_argument(name: &str, value: &Value) -> Result<Self, SchemaError> {
        let encoded = value
            .as_str()
            .ok_or_else(|| SchemaError::invalid_argument(name, "expected an ID value"))?;
        ID::from_base64(encoded).map_err(|err| SchemaError::invalid_argument(name, err))
    }
}

/// Custom scalars pass through unchanged.
impl FromArgument for Value {
    fn from_argument(_name: &str, value: &Value) -> Result<Self, SchemaError> {
        Ok(value.clone())
    }
}

impl<T: FromArgument> FromArgument for Option<T> {
    fn from_argument(name: &str, value: &Value) -> Result<Self, SchemaError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_argument(name, value).map(Some)
        }
    }

    fn require(name: &str, arguments: &Variables) -> Result<Self, SchemaError> {
        match arguments.get(name) {
            None => Ok(None),
            Some(value) => Self::from_argument(name, value),
        }
    }
}

impl<T: FromArgument> FromArgument for Vec<T> {
    fn from_argument(name: &str, value: &Value) -> Result<Self, SchemaError> {
        let items = value
            .as_array()
            .ok_or_else(|| SchemaError::invalid_argument(name, "expected a List value"))?;
        // Elements surface conversion errors under the synthetic name
        // "value"; the first failure wins.
        items
            .iter()
            .map(|element| T::from_argument("value", element))
            .collect()
    }
}
