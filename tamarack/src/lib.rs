/*!

# Tamarack

Tamarack is a resolver-map GraphQL execution engine. It takes a parsed
GraphQL document, an operation name, a set of variable bindings and a
registry of resolver callbacks, and produces the JSON response mandated
by the GraphQL specification.

Unlike schema-first libraries that derive execution from static Rust
types, Tamarack keeps the runtime type graph dynamic: every GraphQL
object type is an [`Object`] value holding its type names (concrete type
plus implemented interfaces) and a map from field names to boxed
[`Resolver`] closures. This makes the engine a good fit for generated
schemas, gateways and services whose type graph is only known at
start-up.

Parsing is delegated to the [`graphql-parser`] crate; the engine consumes
its query AST directly and never inspects schema definitions. Responses
are [`serde_json`] values with object key order preserved, so the fields
of a response always appear in the order the query selected them.

## Quick start

```rust
use std::sync::Arc;

use serde_json::Value;
use tamarack::{Object, Request, ResolverMap, TypeMap, TypeNames, Variables};

let mut resolvers = ResolverMap::default();
resolvers.insert(
    "hello".into(),
    Box::new(|_params| Ok(Value::String("world".into()))),
);

let mut type_names = TypeNames::default();
type_names.insert("Query".into());

let mut operations = TypeMap::default();
operations.insert("query".into(), Arc::new(Object::new(type_names, resolvers)));

let request = Request::new(operations);
let response = request.execute("{ hello }", None, &Variables::new()).unwrap();

assert_eq!(response.data["hello"], Value::String("world".into()));
```

Execution walks the selection set in source order, expands fragment
spreads whose type condition matches the current object, honors
`@include`/`@skip`, and recurses into child [`Object`]s for complex
fields. Field-level failures never abort the request: the failing field
becomes JSON `null` and the error message is collected on the response.

[`graphql-parser`]: https://docs.rs/graphql-parser
[`serde_json`]: https://docs.rs/serde_json

*/
#![doc(html_root_url = "https://docs.rs/tamarack/0.1.0")]
#![warn(missing_docs)]

pub mod ast;
mod arguments;
mod error;
mod executor;
mod request;
mod results;
mod scalars;
mod schema;
mod value;

#[cfg(test)]
mod executor_tests;

pub use crate::{
    arguments::{find, require, FromArgument},
    ast::parse_document,
    error::SchemaError,
    executor::{collect_fragments, Fragment, FragmentMap},
    request::{Request, Response, ResponseError},
    results::IntoFieldValue,
    scalars::ID,
    schema::{FieldResult, Object, Resolver, ResolverMap, ResolverParams, TypeMap, TypeNames},
    value::{resolve_value, Variables},
};
