use serde_json::{json, Value};

use super::util::{run_query, test_service};
use crate::Variables;

#[test]
fn scalar_include_true() {
    run_query("{ a, b @include(if: true) }", |result| {
        assert_eq!(result.get("a"), Some(&json!("a")));
        assert_eq!(result.get("b"), Some(&json!("b")));
    });
}

#[test]
fn scalar_include_false() {
    run_query("{ a, b @include(if: false) }", |result| {
        assert_eq!(result.get("a"), Some(&json!("a")));
        assert_eq!(result.get("b"), None);
    });
}

#[test]
fn scalar_skip_false() {
    run_query("{ a, b @skip(if: false) }", |result| {
        assert_eq!(result.get("a"), Some(&json!("a")));
        assert_eq!(result.get("b"), Some(&json!("b")));
    });
}

#[test]
fn scalar_skip_true() {
    run_query("{ a, b @skip(if: true) }", |result| {
        assert_eq!(result.get("a"), Some(&json!("a")));
        assert_eq!(result.get("b"), None);
    });
}

#[test]
fn fragment_spread_include_false() {
    run_query(
        "{ a, ...Frag @include(if: false) } fragment Frag on Query { b }",
        |result| {
            assert_eq!(result.get("a"), Some(&json!("a")));
            assert_eq!(result.get("b"), None);
        },
    );
}

#[test]
fn fragment_spread_skip_true() {
    run_query(
        "{ a, ...Frag @skip(if: true) } fragment Frag on Query { b }",
        |result| {
            assert_eq!(result.get("a"), Some(&json!("a")));
            assert_eq!(result.get("b"), None);
        },
    );
}

#[test]
fn inline_fragment_include_false() {
    run_query("{ a, ... on Query @include(if: false) { b } }", |result| {
        assert_eq!(result.get("a"), Some(&json!("a")));
        assert_eq!(result.get("b"), None);
    });
}

#[test]
fn inline_fragment_skip_true() {
    run_query("{ a, ... on Query @skip(if: true) { b } }", |result| {
        assert_eq!(result.get("a"), Some(&json!("a")));
        assert_eq!(result.get("b"), None);
    });
}

#[test]
fn unknown_directives_are_ignored() {
    run_query("{ a @uppercase, b @cached(ttl: 60) }", |result| {
        assert_eq!(result.get("a"), Some(&json!("a")));
        assert_eq!(result.get("b"), Some(&json!("b")));
    });
}

#[test]
fn include_and_skip_compose_with_or() {
    run_query("{ a, b @include(if: true) @skip(if: true) }", |result| {
        assert_eq!(result.get("b"), None);
    });
    run_query("{ a, b @include(if: true) @skip(if: false) }", |result| {
        assert_eq!(result.get("b"), Some(&json!("b")));
    });
    run_query("{ a, b @include(if: false) @skip(if: false) }", |result| {
        assert_eq!(result.get("b"), None);
    });
}

#[test]
fn missing_if_argument_is_a_schema_error() {
    let response = test_service()
        .execute("{ a, b @include }", None, &Variables::new())
        .unwrap();

    assert_eq!(response.data["a"], json!("a"));
    assert_eq!(response.data["b"], Value::Null);
    assert_eq!(
        response.errors[0].message,
        "Invalid argument: if message: missing required value"
    );
}

#[test]
fn non_boolean_if_argument_is_a_schema_error() {
    let response = test_service()
        .execute("{ b @include(if: 3) }", None, &Variables::new())
        .unwrap();

    assert_eq!(response.data["b"], Value::Null);
    assert_eq!(
        response.errors[0].message,
        "Invalid argument: if message: expected a Boolean value"
    );
}
