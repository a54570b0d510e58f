use std::cell::RefCell;
use std::fmt;

use thiserror::Error;

/// An error that carries one or more messages destined for the `errors`
/// member of the response.
///
/// `SchemaError` is the single error currency of the engine: argument
/// extraction, directive evaluation and resolver bodies all fail with it,
/// and the selection executor flattens every instance it catches into the
/// request-level error list. Most errors hold a single message; a bundle
/// appears when a nested execution already accumulated several.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{}", .messages.join(", "))]
pub struct SchemaError {
    messages: Vec<String>,
}

impl SchemaError {
    /// Constructs an error from a single message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    /// Constructs an error from an already accumulated message bundle.
    pub fn with_messages(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// The conventional message for an argument that is missing or fails
    /// conversion.
    pub fn invalid_argument(name: &str, detail: impl fmt::Display) -> Self {
        Self::new(format!("Invalid argument: {name} message: {detail}"))
    }

    /// The messages carried by this error.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consumes the error, yielding its messages.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl From<String> for SchemaError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for SchemaError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Append-only error list owned by a single request.
///
/// Execution threads a shared reference to this log through nested
/// selection executors; resolvers never see it. Requests are
/// single-threaded, so interior mutability through `RefCell` suffices.
#[derive(Debug, Default)]
pub(crate) struct ErrorLog {
    messages: RefCell<Vec<String>>,
}

impl ErrorLog {
    pub(crate) fn push(&self, message: String) {
        tracing::debug!(error = %message, "execution error recorded");
        self.messages.borrow_mut().push(message);
    }

    pub(crate) fn append(&self, error: SchemaError) {
        for message in error.into_messages() {
            self.push(message);
        }
    }

    pub(crate) fn into_messages(self) -> Vec<String> {
        self.messages.into_inner()
    }
}
