use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use super::util::{run_query, test_service};
use crate::Variables;

#[test]
fn fragment_spread_is_transparent() {
    let inlined = test_service()
        .execute("{ pet { name barks } }", None, &Variables::new())
        .unwrap();
    let spread = test_service()
        .execute(
            "{ pet { ...PetFields } } fragment PetFields on Dog { name barks }",
            None,
            &Variables::new(),
        )
        .unwrap();

    assert_eq!(spread, inlined);
}

#[test]
fn type_condition_matches_interface() {
    run_query("{ pet { ... on Pet { name } } }", |result| {
        assert_eq!(result.get("pet"), Some(&json!({ "name": "Rex" })));
    });
}

#[test]
fn type_condition_mismatch_contributes_nothing() {
    run_query("{ pet { name ... on Cat { barks } } }", |result| {
        assert_eq!(result.get("pet"), Some(&json!({ "name": "Rex" })));
    });
}

#[test]
fn inline_fragment_without_condition_always_applies() {
    run_query("{ pet { ... { name } } }", |result| {
        assert_eq!(result.get("pet"), Some(&json!({ "name": "Rex" })));
    });
}

#[test]
fn unknown_fragment_is_reported_and_siblings_continue() {
    let response = test_service()
        .execute("{ a ...Missing }", None, &Variables::new())
        .unwrap();

    assert_eq!(response.data, json!({ "a": "a" }));
    assert_eq!(response.errors[0].message, "Unknown fragment: Missing");
}

#[test]
fn merged_fields_keep_first_position_and_last_value() {
    // `a` aliased twice: the key appears where it was first selected and
    // carries the value of the last write.
    run_query(
        "{ first: a ...Frag b } fragment Frag on Query { first: b }",
        |result| {
            let keys: Vec<_> = result.keys().collect();
            assert_eq!(keys, ["first", "b"]);
            assert_eq!(result.get("first"), Some(&json!("b")));
        },
    );
}

#[test]
fn fragment_redefinition_keeps_last_definition() {
    run_query(
        "{ ...Frag } fragment Frag on Query { a } fragment Frag on Query { b }",
        |result| {
            assert_eq!(result.get("a"), None);
            assert_eq!(result.get("b"), Some(&json!("b")));
        },
    );
}

#[test]
fn fragments_expand_recursively() {
    let response = test_service()
        .execute(
            "{ ...Outer } \
             fragment Outer on Query { a pet { ...Inner } } \
             fragment Inner on Dog { name }",
            None,
            &Variables::new(),
        )
        .unwrap();

    assert_eq!(
        response.data,
        json!({ "a": "a", "pet": { "name": "Rex" } })
    );
    assert_eq!(response.errors, []);
}

#[test]
fn field_order_follows_the_selection() {
    run_query("{ b pet { barks name } a }", |result| {
        let keys: Vec<_> = result.keys().collect();
        assert_eq!(keys, ["b", "pet", "a"]);

        let pet = result.get("pet").and_then(Value::as_object).unwrap();
        let pet_keys: Vec<_> = pet.keys().collect();
        assert_eq!(pet_keys, ["barks", "name"]);
    });
}
