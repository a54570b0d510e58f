//! Per-request execution: fragment collection, selection execution and
//! operation dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::ast::{
    Definition, Directive, Document, Field, FragmentDefinition, FragmentSpread, InlineFragment,
    OperationDefinition, Selection, SelectionSet, TypeCondition, VariableDefinition,
};
use crate::error::{ErrorLog, SchemaError};
use crate::schema::{ResolverMap, ResolverParams, TypeMap, TypeNames};
use crate::value::{resolve_value, Variables};

/// A named fragment, borrowed from the request document.
///
/// Fragments are referenced by name and carry a single type condition.
/// They live exactly as long as the request that collected them.
pub struct Fragment<'a> {
    type_condition: &'a str,
    selection_set: &'a SelectionSet<'a>,
}

impl<'a> Fragment<'a> {
    /// The type name this fragment applies to.
    pub fn type_condition(&self) -> &'a str {
        self.type_condition
    }

    /// The fragment's selections.
    pub fn selection_set(&self) -> &'a SelectionSet<'a> {
        self.selection_set
    }
}

impl<'a> From<&'a FragmentDefinition<'a>> for Fragment<'a> {
    fn from(definition: &'a FragmentDefinition<'a>) -> Self {
        let TypeCondition::On(type_condition) = &definition.type_condition;
        Fragment {
            type_condition: *type_condition,
            selection_set: &definition.selection_set,
        }
    }
}

/// Named fragments of one request document.
pub type FragmentMap<'a> = HashMap<&'a str, Fragment<'a>>;

/// Collects every fragment definition of a document into a map.
///
/// A single pass over the top-level definitions; selection sets are not
/// entered and references between fragments are left unresolved (they
/// expand lazily at selection time). A repeated fragment name keeps the
/// last definition.
pub fn collect_fragments<'a>(document: &'a Document<'a>) -> FragmentMap<'a> {
    document
        .definitions
        .iter()
        .filter_map(|definition| match definition {
            Definition::Fragment(fragment) => Some((fragment.name, Fragment::from(fragment))),
            Definition::Operation(_) => None,
        })
        .collect()
}

/// Walks one selection set for one object, accumulating the response
/// fields in source order.
pub(crate) struct SelectionExecutor<'a, 'b> {
    fragments: &'b FragmentMap<'a>,
    variables: &'b Variables,
    type_names: &'b TypeNames,
    resolvers: &'b ResolverMap,
    errors: &'b ErrorLog,
    values: Map<String, Value>,
}

impl<'a, 'b> SelectionExecutor<'a, 'b> {
    pub(crate) fn new(
        fragments: &'b FragmentMap<'a>,
        variables: &'b Variables,
        type_names: &'b TypeNames,
        resolvers: &'b ResolverMap,
        errors: &'b ErrorLog,
    ) -> Self {
        SelectionExecutor {
            fragments,
            variables,
            type_names,
            resolvers,
            errors,
            values: Map::new(),
        }
    }

    pub(crate) fn into_values(self) -> Map<String, Value> {
        self.values
    }

    pub(crate) fn visit_selection_set(&mut self, selection_set: &'a SelectionSet<'a>) {
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) => self.visit_field(field),
                Selection::FragmentSpread(spread) => self.visit_fragment_spread(spread),
                Selection::InlineFragment(inline) => self.visit_inline_fragment(inline),
            }
        }
    }

    fn visit_field(&mut self, field: &'a Field<'a>) {
        let response_key = field.alias.unwrap_or(field.name);

        match should_skip(&field.directives, self.variables) {
            Ok(true) => return,
            Ok(false) => {}
            Err(error) => {
                self.errors.append(error);
                self.values.insert(response_key.into(), Value::Null);
                return;
            }
        }

        let mut arguments = Variables::new();
        for (name, value) in &field.arguments {
            arguments.insert((*name).into(), resolve_value(value, self.variables));
        }

        let Some(resolver) = self.resolvers.get(field.name) else {
            self.errors.push(format!("Missing resolver: {}", field.name));
            self.values.insert(response_key.into(), Value::Null);
            return;
        };

        tracing::trace!(field = field.name, "resolving field");

        let selection = (!field.selection_set.items.is_empty()).then_some(&field.selection_set);
        let params = ResolverParams {
            arguments: Arc::new(arguments),
            selection,
            fragments: self.fragments,
            variables: self.variables,
            errors: self.errors,
        };

        // Duplicate response keys keep their first position but take the
        // last-assigned value.
        match resolver(params) {
            Ok(value) => {
                self.values.insert(response_key.into(), value);
            }
            Err(error) => {
                self.errors.append(error);
                self.values.insert(response_key.into(), Value::Null);
            }
        }
    }

    fn visit_fragment_spread(&mut self, spread: &'a FragmentSpread<'a>) {
        match should_skip(&spread.directives, self.variables) {
            Ok(true) => return,
            Ok(false) => {}
            Err(error) => {
                self.errors.append(error);
                return;
            }
        }

        let Some(fragment) = self.fragments.get(spread.fragment_name) else {
            self.errors
                .push(format!("Unknown fragment: {}", spread.fragment_name));
            return;
        };

        if self.type_names.contains(fragment.type_condition()) {
            self.visit_selection_set(fragment.selection_set());
        }
    }

    fn visit_inline_fragment(&mut self, inline: &'a InlineFragment<'a>) {
        match should_skip(&inline.directives, self.variables) {
            Ok(true) => return,
            Ok(false) => {}
            Err(error) => {
                self.errors.append(error);
                return;
            }
        }

        if let Some(TypeCondition::On(type_condition)) = &inline.type_condition {
            if !self.type_names.contains(*type_condition) {
                return;
            }
        }

        self.visit_selection_set(&inline.selection_set);
    }
}

/// Evaluates `@skip`/`@include` on a selection.
///
/// Skips compose with OR: any directive demanding a skip wins. Unknown
/// directives are ignored. A missing `if` argument, or one that is not a
/// boolean after variable resolution, is a schema error.
fn should_skip(directives: &[Directive<'_>], variables: &Variables) -> Result<bool, SchemaError> {
    for directive in directives {
        let skip_when = match directive.name {
            "skip" => true,
            "include" => false,
            _ => continue,
        };

        let condition = directive
            .arguments
            .iter()
            .find(|(name, _)| *name == "if")
            .map(|(_, value)| resolve_value(value, variables))
            .ok_or_else(|| SchemaError::invalid_argument("if", "missing required value"))?;
        let condition = condition
            .as_bool()
            .ok_or_else(|| SchemaError::invalid_argument("if", "expected a Boolean value"))?;

        if condition == skip_when {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Finds the requested operation in the document and resolves it against
/// the corresponding root object.
///
/// An anonymous request (`operation_name` of `None`) matches only when
/// the document holds exactly one operation; anything else records a
/// `Missing operation` error and yields JSON `null`.
pub(crate) fn execute_operation<'a>(
    operations: &TypeMap,
    document: &'a Document<'a>,
    operation_name: Option<&str>,
    variables: &Variables,
    fragments: &FragmentMap<'a>,
    errors: &ErrorLog,
) -> Value {
    let operation_count = document
        .definitions
        .iter()
        .filter(|definition| matches!(definition, Definition::Operation(_)))
        .count();

    for definition in &document.definitions {
        let Definition::Operation(operation) = definition else {
            continue;
        };

        let no_variables: &[VariableDefinition<'_>] = &[];
        let (kind, name, variable_definitions, selection_set) = match operation {
            OperationDefinition::SelectionSet(selection_set) => {
                ("query", None, no_variables, selection_set)
            }
            OperationDefinition::Query(query) => (
                "query",
                query.name,
                &query.variable_definitions[..],
                &query.selection_set,
            ),
            OperationDefinition::Mutation(mutation) => (
                "mutation",
                mutation.name,
                &mutation.variable_definitions[..],
                &mutation.selection_set,
            ),
            OperationDefinition::Subscription(subscription) => (
                "subscription",
                subscription.name,
                &subscription.variable_definitions[..],
                &subscription.selection_set,
            ),
        };

        let matches = match operation_name {
            Some(requested) => name == Some(requested),
            None => operation_count == 1,
        };
        if !matches {
            continue;
        }

        let Some(root) = operations.get(kind) else {
            errors.push(format!("Missing operation: {kind}"));
            return Value::Null;
        };

        tracing::debug!(kind, operation = name.unwrap_or_default(), "dispatching operation");

        let variables = with_variable_defaults(variables, variable_definitions);
        return root.resolve(selection_set, fragments, &variables, errors);
    }

    errors.push(format!(
        "Missing operation: {}",
        operation_name.unwrap_or_default()
    ));
    Value::Null
}

/// Merges default values from the operation's variable definitions into
/// the request variables. Explicit bindings win over defaults.
fn with_variable_defaults(
    variables: &Variables,
    definitions: &[VariableDefinition<'_>],
) -> Variables {
    let mut merged = variables.clone();
    for definition in definitions {
        if merged.contains_key(definition.name) {
            continue;
        }
        if let Some(default) = &definition.default_value {
            merged.insert(definition.name.into(), resolve_value(default, variables));
        }
    }
    merged
}
