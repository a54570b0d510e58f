mod directives;
mod fragments;

pub(crate) mod util {
    use std::sync::Arc;

    use serde_json::{Map, Value};

    use crate::{
        require, FieldResult, IntoFieldValue, Object, Request, Resolver, ResolverMap,
        ResolverParams, TypeMap, TypeNames, Variables,
    };

    pub(crate) fn type_names(names: &[&str]) -> TypeNames {
        names.iter().map(|name| (*name).to_owned()).collect()
    }

    pub(crate) fn resolver(
        f: impl Fn(ResolverParams<'_, '_>) -> FieldResult + Send + Sync + 'static,
    ) -> Resolver {
        Box::new(f)
    }

    fn pet_object() -> Arc<Object> {
        let mut resolvers = ResolverMap::default();
        resolvers.insert("name".into(), resolver(|params| Ok("Rex".into_field_value(params))));
        resolvers.insert("barks".into(), resolver(|params| Ok(true.into_field_value(params))));
        Arc::new(Object::new(type_names(&["Dog", "Pet"]), resolvers))
    }

    /// A small schema exercising scalars, arguments and one complex field:
    /// `{ a b echo(value: String) pet { name barks } }` with `pet`
    /// resolving to a `Dog` that implements `Pet`.
    pub(crate) fn test_service() -> Request {
        let mut resolvers = ResolverMap::default();
        resolvers.insert("a".into(), resolver(|params| Ok("a".into_field_value(params))));
        resolvers.insert("b".into(), resolver(|params| Ok("b".into_field_value(params))));
        resolvers.insert(
            "echo".into(),
            resolver(|params| {
                let value: Option<String> = require("value", &params.arguments)?;
                Ok(value.into_field_value(params))
            }),
        );
        resolvers.insert(
            "pet".into(),
            resolver(|params| Ok(pet_object().into_field_value(params))),
        );
        // Echoes the coerced argument object back, for asserting coercion.
        resolvers.insert(
            "args".into(),
            resolver(|params| Ok(Value::Object(params.arguments.as_ref().clone()))),
        );

        let mut operations = TypeMap::default();
        operations.insert(
            "query".into(),
            Arc::new(Object::new(type_names(&["Query"]), resolvers)),
        );
        Request::new(operations)
    }

    pub(crate) fn run_variable_query<F>(query: &str, variables: Variables, f: F)
    where
        F: Fn(&Map<String, Value>),
    {
        let response = test_service()
            .execute(query, None, &variables)
            .expect("parse failed");

        assert_eq!(response.errors, []);

        let data = response.data.as_object().expect("data is not an object");
        f(data);
    }

    pub(crate) fn run_query<F>(query: &str, f: F)
    where
        F: Fn(&Map<String, Value>),
    {
        run_variable_query(query, Variables::new(), f);
    }
}
