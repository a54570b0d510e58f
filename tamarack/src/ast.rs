//! Aliases binding the engine to the [`graphql-parser`] query AST.
//!
//! The engine executes documents produced by an external parser. All AST
//! types are generic over the parser's `Text` representation; execution
//! borrows from the source string, so the borrowed instantiation is the
//! only one the engine deals with. These aliases pin that choice in one
//! place and spare the rest of the crate (and its callers) the second
//! type parameter.
//!
//! [`graphql-parser`]: https://docs.rs/graphql-parser

use graphql_parser::query;

pub use graphql_parser::{query::ParseError, Pos};

/// A parsed query document, borrowing from its source string.
pub type Document<'a> = query::Document<'a, &'a str>;

/// A top-level definition: an operation or a fragment.
pub type Definition<'a> = query::Definition<'a, &'a str>;

/// A query, mutation, subscription, or bare selection-set operation.
pub type OperationDefinition<'a> = query::OperationDefinition<'a, &'a str>;

/// A named fragment definition with a type condition.
pub type FragmentDefinition<'a> = query::FragmentDefinition<'a, &'a str>;

/// The `on <Type>` condition of a fragment.
pub type TypeCondition<'a> = query::TypeCondition<'a, &'a str>;

/// A block of selections requested on a type.
pub type SelectionSet<'a> = query::SelectionSet<'a, &'a str>;

/// One entry in a selection set: field, fragment spread, or inline fragment.
pub type Selection<'a> = query::Selection<'a, &'a str>;

/// A single selected field, with optional alias, arguments and sub-selections.
pub type Field<'a> = query::Field<'a, &'a str>;

/// A `...name` reference to a named fragment.
pub type FragmentSpread<'a> = query::FragmentSpread<'a, &'a str>;

/// An anonymous `... on Type { }` fragment.
pub type InlineFragment<'a> = query::InlineFragment<'a, &'a str>;

/// A directive application such as `@include(if: $flag)`.
pub type Directive<'a> = query::Directive<'a, &'a str>;

/// A variable definition in an operation header.
pub type VariableDefinition<'a> = query::VariableDefinition<'a, &'a str>;

/// A literal or variable value appearing in argument position.
pub type InputValue<'a> = query::Value<'a, &'a str>;

/// Parses a GraphQL query document from source text.
///
/// Thin wrapper around [`graphql_parser::parse_query`] fixing the text
/// representation to borrowed `&str`.
pub fn parse_document(source: &str) -> Result<Document<'_>, ParseError> {
    graphql_parser::parse_query(source)
}
