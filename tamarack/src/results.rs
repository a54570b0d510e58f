//! Projection of typed resolver output back into JSON.
//!
//! The inverse of argument extraction: a resolver produces a typed value
//! whose modifier chain is spelled with `Option` (nullable) and `Vec`
//! (list) wrappers, and projection walks the chain back out to a JSON
//! value. Complex leaves re-enter the engine through
//! [`Object::resolve`](crate::Object).

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::scalars::ID;
use crate::schema::{Object, ResolverParams};

/// Conversion of a resolver's typed result into a JSON response value.
///
/// Implementations exist for the scalar leaves (`i32`, `f64`, `String`,
/// `bool`, [`ID`], raw [`Value`]), for [`Arc<Object>`] leaves, and for
/// `Option`/`Vec` wrappers over any implementation.
pub trait IntoFieldValue {
    /// Performs the conversion.
    fn into_field_value(self, params: ResolverParams<'_, '_>) -> Value;
}

impl IntoFieldValue for i32 {
    fn into_field_value(self, _params: ResolverParams<'_, '_>) -> Value {
        Value::from(self)
    }
}

impl IntoFieldValue for f64 {
    fn into_field_value(self, _params: ResolverParams<'_, '_>) -> Value {
        Value::from(self)
    }
}

impl IntoFieldValue for String {
    fn into_field_value(self, _params: ResolverParams<'_, '_>) -> Value {
        Value::String(self)
    }
}

impl IntoFieldValue for &str {
    fn into_field_value(self, _params: ResolverParams<'_, '_>) -> Value {
        Value::String(self.into())
    }
}

impl IntoFieldValue for bool {
    fn into_field_value(self, _params: ResolverParams<'_, '_>) -> Value {
        Value::Bool(self)
    }
}

impl IntoFieldValue for ID {
    fn into_field_value(self, _params: ResolverParams<'_, '_>) -> Value {
        Value::String(self.to_base64())
    }
}

/// Custom scalars pass through unchanged.
impl IntoFieldValue for Value {
    fn into_field_value(self, _params: ResolverParams<'_, '_>) -> Value {
        self
    }
}

/// An absent nullable value projects to JSON `null`.
impl<T: IntoFieldValue> IntoFieldValue for Option<T> {
    fn into_field_value(self, params: ResolverParams<'_, '_>) -> Value {
        match self {
            Some(value) => value.into_field_value(params),
            None => Value::Null,
        }
    }
}

/// Lists project element-wise, preserving order.
impl<T: IntoFieldValue> IntoFieldValue for Vec<T> {
    fn into_field_value(self, params: ResolverParams<'_, '_>) -> Value {
        Value::Array(
            self.into_iter()
                .map(|element| element.into_field_value(params.clone()))
                .collect(),
        )
    }
}

/// Complex leaves resolve their own sub-selection.
///
/// A complex field without a sub-selection in the query is a programmer
/// error on the caller's side (the field should have been a scalar); it
/// answers with an empty object rather than aborting the request.
impl IntoFieldValue for Arc<Object> {
    fn into_field_value(self, params: ResolverParams<'_, '_>) -> Value {
        match params.selection {
            Some(selection) => {
                self.resolve(selection, params.fragments, params.variables, params.errors)
            }
            None => {
                tracing::warn!("complex field resolved without a selection set");
                Value::Object(Map::new())
            }
        }
    }
}
