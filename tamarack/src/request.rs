//! The top-level request façade.

use serde::Serialize;
use serde_json::Value;

use crate::ast::{parse_document, Document, ParseError};
use crate::error::ErrorLog;
use crate::executor::{collect_fragments, execute_operation};
use crate::schema::TypeMap;
use crate::value::Variables;

/// A single entry of the response `errors` list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ResponseError {
    /// Human-readable description of what went wrong.
    pub message: String,
}

/// The JSON response of one executed request.
///
/// Serializes to `{ "data": ..., "errors": [...] }` with `errors`
/// omitted when empty. Partial success is normal: consumers must check
/// `errors` even when `data` is present.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Response {
    /// The resolved operation data, or `null` when dispatch failed.
    pub data: Value,
    /// Errors accumulated during execution, in the order they occurred.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ResponseError>,
}

impl Response {
    /// Converts the response into a plain JSON value.
    pub fn into_value(self) -> Value {
        serde_json::to_value(self).expect("response serialization is infallible")
    }
}

/// The entry point of the engine: owns the operation roots and resolves
/// one document per call.
///
/// A `Request` holds only immutable registry state, so a single instance
/// serves any number of concurrent requests.
pub struct Request {
    operations: TypeMap,
}

impl Request {
    /// Builds a service from its operation roots.
    ///
    /// `operations` is keyed by the reserved names `query`, `mutation`
    /// and `subscription`; kinds a schema does not support are simply
    /// left out.
    pub fn new(operations: TypeMap) -> Self {
        Request { operations }
    }

    /// Resolves a parsed document against the operation roots.
    ///
    /// Scans the document for fragment definitions, selects the
    /// operation matching `operation_name` (which may be `None` for a
    /// single-operation document) and executes it with the given
    /// variable bindings.
    pub fn resolve<'a>(
        &self,
        document: &'a Document<'a>,
        operation_name: Option<&str>,
        variables: &Variables,
    ) -> Response {
        let span = tracing::debug_span!("resolve", operation = operation_name.unwrap_or_default());
        let _enter = span.enter();

        let fragments = collect_fragments(document);
        let errors = ErrorLog::default();
        let data = execute_operation(
            &self.operations,
            document,
            operation_name,
            variables,
            &fragments,
            &errors,
        );

        Response {
            data,
            errors: errors
                .into_messages()
                .into_iter()
                .map(|message| ResponseError { message })
                .collect(),
        }
    }

    /// Parses `source` and resolves the resulting document.
    pub fn execute(
        &self,
        source: &str,
        operation_name: Option<&str>,
        variables: &Variables,
    ) -> Result<Response, ParseError> {
        let document = parse_document(source)?;
        Ok(self.resolve(&document, operation_name, variables))
    }
}
