//! Conversion of AST values into JSON.

use serde_json::{Map, Number, Value};

use crate::ast::InputValue;

/// The map of variables used for substitution during query execution.
///
/// Keys are variable names without the `$` prefix. A variable that is
/// absent from the map resolves to JSON `null`.
pub type Variables = Map<String, Value>;

/// Resolves an AST value node into a JSON value.
///
/// Literals map onto their JSON counterparts, enum values serialize as
/// their identifier string, and variable references are looked up in
/// `variables`. The traversal is depth-first and total: every well-formed
/// AST value yields exactly one JSON value, with unknown variables (and
/// non-finite floats, which JSON cannot carry) degrading to `null`.
pub fn resolve_value(value: &InputValue<'_>, variables: &Variables) -> Value {
    match value {
        InputValue::Variable(name) => variables.get(*name).cloned().unwrap_or(Value::Null),
        InputValue::Int(n) => n.as_i64().map(Value::from).unwrap_or(Value::Null),
        InputValue::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
        InputValue::String(s) => Value::String(s.clone()),
        InputValue::Boolean(b) => Value::Bool(*b),
        InputValue::Null => Value::Null,
        InputValue::Enum(name) => Value::String((*name).into()),
        InputValue::List(items) => Value::Array(
            items
                .iter()
                .map(|item| resolve_value(item, variables))
                .collect(),
        ),
        InputValue::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(name, value)| ((*name).into(), resolve_value(value, variables)))
                .collect(),
        ),
    }
}
