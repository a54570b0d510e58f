//! The long-lived registries: resolver-bearing objects and their maps.

use std::sync::Arc;

use fnv::{FnvHashMap, FnvHashSet};
use serde_json::Value;

use crate::ast::SelectionSet;
use crate::error::{ErrorLog, SchemaError};
use crate::executor::{FragmentMap, SelectionExecutor};
use crate::value::Variables;

/// The result of a single resolver invocation.
pub type FieldResult = Result<Value, SchemaError>;

/// A field resolver.
///
/// Resolvers take the coerced arguments (plus the selection context for
/// complex fields) and return the JSON value of a single field. The
/// engine never inspects a resolver's internals; it only composes the
/// output through result projection. Resolvers must be shareable across
/// concurrently executing requests.
pub type Resolver = Box<dyn Fn(ResolverParams<'_, '_>) -> FieldResult + Send + Sync>;

/// Field name to resolver mapping for one object type.
pub type ResolverMap = FnvHashMap<String, Resolver>;

/// The set of type names a fragment type condition can match on an
/// object: its concrete type name plus every interface it implements.
pub type TypeNames = FnvHashSet<String>;

/// Operation roots keyed by the reserved names `query`, `mutation` and
/// `subscription`. Populated once at service construction.
pub type TypeMap = FnvHashMap<String, Arc<Object>>;

/// The bundle of borrowed state passed to each resolver invocation.
///
/// All members remain valid for the duration of the call. `selection` is
/// present when the field carries a sub-selection; resolvers for complex
/// fields hand it back to the engine by projecting an [`Object`] through
/// [`IntoFieldValue`](crate::IntoFieldValue).
#[derive(Clone)]
pub struct ResolverParams<'a, 'b> {
    /// Field arguments, coerced to JSON with variables substituted.
    ///
    /// Behind an `Arc`: projecting a list fans one `ResolverParams` out
    /// per element, and the argument map must not be copied each time.
    pub arguments: Arc<Variables>,
    /// The field's sub-selection, if any was written in the query.
    pub selection: Option<&'a SelectionSet<'a>>,
    /// All named fragments of the current document.
    pub fragments: &'b FragmentMap<'a>,
    /// The request's variable bindings.
    pub variables: &'b Variables,
    pub(crate) errors: &'b ErrorLog,
}

/// A named, resolver-bearing node in the runtime type graph.
///
/// An `Object` models one GraphQL object type: `type_names` drives
/// fragment type-condition matching and `resolvers` supplies one callback
/// per field. State is immutable after construction, so a single
/// instance is shared (via `Arc`) by every request of its schema and may
/// be resolved concurrently.
pub struct Object {
    type_names: TypeNames,
    resolvers: ResolverMap,
}

impl Object {
    /// Builds an object type from its type names and field resolvers.
    pub fn new(type_names: TypeNames, resolvers: ResolverMap) -> Self {
        Object {
            type_names,
            resolvers,
        }
    }

    /// Resolves a selection set against this object, accumulating any
    /// field-level errors into the request log.
    pub(crate) fn resolve<'a, 'b>(
        &self,
        selection: &'a SelectionSet<'a>,
        fragments: &'b FragmentMap<'a>,
        variables: &'b Variables,
        errors: &'b ErrorLog,
    ) -> Value {
        let mut executor =
            SelectionExecutor::new(fragments, variables, &self.type_names, &self.resolvers, errors);
        executor.visit_selection_set(selection);
        Value::Object(executor.into_values())
    }
}
